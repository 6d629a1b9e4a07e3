//! Tests for word/symbol tokenization and title casing

#[cfg(test)]
mod tests {
    use fragmentgen::analysis::tokens::{
        is_symbol_char, is_word_char, literal_segments, symbol_chars, title_case, word_tokens,
    };

    // Tests that underscores and digits stay inside word runs
    // Verified by dropping the underscore from the word class
    #[test]
    fn test_word_tokens_are_maximal_runs() {
        let tokens: Vec<&str> = word_tokens("snake_case 42nd-place, ok!").collect();
        assert_eq!(tokens, vec!["snake_case", "42nd", "place", "ok"]);
    }

    // Tests non-ASCII letters count as word characters
    // Verified by restricting the word class to ASCII
    #[test]
    fn test_word_tokens_unicode() {
        let tokens: Vec<&str> = word_tokens("café über—naïve").collect();
        assert_eq!(tokens, vec!["café", "über", "naïve"]);
    }

    // Tests symbols exclude whitespace and word characters but keep repeats
    // Verified by treating whitespace as a symbol
    #[test]
    fn test_symbol_chars() {
        let symbols: String = symbol_chars("I love cats!! (really?)").collect();
        assert_eq!(symbols, "!!(?)");
        assert!(is_symbol_char('™'));
        assert!(!is_symbol_char('_'));
        assert!(!is_symbol_char('\t'));
        assert!(is_word_char('_'));
    }

    // Tests segment count is token count plus one, including edge tokens
    // Verified by skipping the leading empty segment
    #[test]
    fn test_literal_segments_surround_tokens() {
        assert_eq!(literal_segments("I love cats!"), vec!["", " ", " ", "!"]);
        assert_eq!(literal_segments("...wait"), vec!["...", ""]);
        assert_eq!(literal_segments("?!"), vec!["?!"]);
        assert_eq!(literal_segments(""), vec![""]);
    }

    // Tests segments never contain word characters
    // Verified by pushing word characters into the current segment
    #[test]
    fn test_literal_segments_are_word_free() {
        for segment in literal_segments("a1 -- b_2 @c #d e!") {
            assert!(!segment.chars().any(is_word_char), "segment {segment:?}");
        }
    }

    // Tests title casing restarts after non-letters like str.title
    // Verified by only capitalizing the first character
    #[test]
    fn test_title_case() {
        assert_eq!(title_case("hELLO"), "Hello");
        assert_eq!(title_case("abc1def"), "Abc1Def");
        assert_eq!(title_case("snake_case"), "Snake_Case");
        assert_eq!(title_case(""), "");
    }
}
