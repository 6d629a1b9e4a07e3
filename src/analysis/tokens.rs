//! Character classes and tokenization shared by every extraction step

/// Word characters are alphanumerics plus underscore
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Symbols are everything that is neither a word character nor whitespace
pub fn is_symbol_char(c: char) -> bool {
    !is_word_char(c) && !c.is_whitespace()
}

/// Maximal runs of word characters, in order of appearance
pub fn word_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_word_char(c))
        .filter(|token| !token.is_empty())
}

/// Symbol characters, in order of appearance (repeats included)
pub fn symbol_chars(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().filter(|&c| is_symbol_char(c))
}

/// Split text into the literal segments surrounding its word tokens
///
/// The result always has one more segment than there are word tokens:
/// segment `i` precedes token `i`, and the final segment trails the last
/// token. Segments never contain word characters.
pub fn literal_segments(text: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut in_word = false;

    for c in text.chars() {
        if is_word_char(c) {
            if !in_word {
                segments.push(std::mem::take(&mut current));
                in_word = true;
            }
        } else {
            in_word = false;
            current.push(c);
        }
    }
    segments.push(current);
    segments
}

/// Title-case each alphabetic run: first letter upper, the rest lower
///
/// Digits and underscores break runs, so `abc1def` becomes `Abc1Def`.
pub fn title_case(word: &str) -> String {
    let mut result = String::with_capacity(word.len());
    let mut previous_alphabetic = false;

    for c in word.chars() {
        if c.is_alphabetic() {
            if previous_alphabetic {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            previous_alphabetic = true;
        } else {
            result.push(c);
            previous_alphabetic = false;
        }
    }
    result
}
