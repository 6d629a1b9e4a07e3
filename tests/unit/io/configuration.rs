//! Tests for generation constants and output settings

#[cfg(test)]
mod tests {
    use fragmentgen::analysis::tokens::is_word_char;
    use fragmentgen::io::configuration::{
        DEFAULT_COUNT, DEFAULT_MAX_ATTEMPTS, INTERJECTION, MAX_COMBINATION_WORDS, MAX_COUNT,
        MIN_COMBINATION_WORDS, MIN_COUNT, OUTPUT_FILE_NAME, OUTPUT_SUFFIX, PLACEHOLDER,
        SPECIAL_CHARS,
    };

    // Tests the placeholder is made of word characters, so literals cannot contain it
    // Verified by changing the marker to punctuation
    #[test]
    fn test_placeholder_cannot_collide_with_literals() {
        assert!(!PLACEHOLDER.is_empty());
        assert!(PLACEHOLDER.chars().all(is_word_char));
    }

    // Tests the batch size bounds match the interactive surface
    // Verified by widening the range
    #[test]
    fn test_count_bounds() {
        assert_eq!(MIN_COUNT, 1);
        assert_eq!(MAX_COUNT, 10);
        assert!((MIN_COUNT..=MAX_COUNT).contains(&DEFAULT_COUNT));
    }

    // Tests the combination range is non-empty
    // Verified by inverting the bounds
    #[test]
    fn test_combination_range() {
        assert_eq!(MIN_COMBINATION_WORDS, 2);
        assert_eq!(MAX_COMBINATION_WORDS, 5);
    }

    // Tests retries are bounded but allow at least one redraw
    // Verified by setting the bound to one
    #[test]
    fn test_retry_bound() {
        assert!(DEFAULT_MAX_ATTEMPTS > 1);
    }

    // Tests the output names used for saving
    // Verified by changing the file name
    #[test]
    fn test_output_names() {
        assert_eq!(OUTPUT_FILE_NAME, "fragments.txt");
        assert!(OUTPUT_SUFFIX.starts_with('_'));
        for ch in OUTPUT_SUFFIX.chars() {
            assert!(ch.is_alphanumeric() || ch == '_' || ch == '-');
        }
    }

    // Tests the special set includes the trademark sign and common punctuation
    // Verified by removing characters from the set
    #[test]
    fn test_special_chars() {
        for ch in ['™', '®', '*', '@', '$', '#', '&', '%', '!', '?', '.'] {
            assert!(SPECIAL_CHARS.contains(ch), "missing {ch}");
        }
        assert_eq!(INTERJECTION, "... um...");
    }
}
