//! Whole-fragment wrappers for the stylized strategy

use rand::Rng;
use rand::seq::IndexedRandom;

/// Decorations applied around or inside a finished combination
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Wrapper {
    /// `(text)`
    Parentheses,
    /// `...text...`
    Ellipsis,
    /// `[text]`
    Brackets,
    /// `/text/`
    Slashes,
    /// `**text**`
    DoubleAsterisks,
    /// Spaces become `_`
    Underscores,
    /// Spaces become `-`
    Hyphens,
}

impl Wrapper {
    /// Every wrapper, drawn from uniformly
    pub const ALL: [Self; 7] = [
        Self::Parentheses,
        Self::Ellipsis,
        Self::Brackets,
        Self::Slashes,
        Self::DoubleAsterisks,
        Self::Underscores,
        Self::Hyphens,
    ];

    /// Pick a wrapper uniformly at random
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL.choose(rng).copied().unwrap_or(Self::Parentheses)
    }

    /// Apply this wrapper
    pub fn apply(self, text: &str) -> String {
        match self {
            Self::Parentheses => format!("({text})"),
            Self::Ellipsis => format!("...{text}..."),
            Self::Brackets => format!("[{text}]"),
            Self::Slashes => format!("/{text}/"),
            Self::DoubleAsterisks => format!("**{text}**"),
            Self::Underscores => text.replace(' ', "_"),
            Self::Hyphens => text.replace(' ', "-"),
        }
    }
}
