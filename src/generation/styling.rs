//! Randomized per-word styling transforms

use crate::analysis::tokens::title_case;
use crate::io::configuration::SPECIAL_CHARS;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Named text transforms applied to individual words
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WordStyle {
    /// Word unchanged
    Original,
    /// `WORD`
    Uppercase,
    /// `word`
    Lowercase,
    /// `Word`
    TitleCase,
    /// `word™`
    Trademark,
    /// `*word*`
    Asterisks,
    /// `word-word`
    Repeated,
    /// `word` followed by one random special character
    SpecialSuffix,
    /// Each character independently upper or lower: `wOrD`
    MixedCase,
}

impl WordStyle {
    /// Every style, drawn from uniformly
    pub const ALL: [Self; 9] = [
        Self::Original,
        Self::Uppercase,
        Self::Lowercase,
        Self::TitleCase,
        Self::Trademark,
        Self::Asterisks,
        Self::Repeated,
        Self::SpecialSuffix,
        Self::MixedCase,
    ];

    /// Pick a style uniformly at random
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL.choose(rng).copied().unwrap_or(Self::Original)
    }

    /// Apply this style to a word
    ///
    /// Only `SpecialSuffix` and `MixedCase` consume randomness.
    pub fn apply<R: Rng + ?Sized>(self, word: &str, rng: &mut R) -> String {
        match self {
            Self::Original => word.to_owned(),
            Self::Uppercase => word.to_uppercase(),
            Self::Lowercase => word.to_lowercase(),
            Self::TitleCase => title_case(word),
            Self::Trademark => format!("{word}™"),
            Self::Asterisks => format!("*{word}*"),
            Self::Repeated => format!("{word}-{word}"),
            Self::SpecialSuffix => {
                let specials: Vec<char> = SPECIAL_CHARS.chars().collect();
                match specials.choose(rng) {
                    Some(special) => format!("{word}{special}"),
                    None => word.to_owned(),
                }
            }
            Self::MixedCase => word
                .chars()
                .flat_map(|c| {
                    if rng.random_bool(0.5) {
                        c.to_uppercase().collect::<Vec<_>>()
                    } else {
                        c.to_lowercase().collect::<Vec<_>>()
                    }
                })
                .collect(),
        }
    }
}

/// Style a word with a uniformly chosen transform
pub fn style_word<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    WordStyle::random(rng).apply(word, rng)
}
