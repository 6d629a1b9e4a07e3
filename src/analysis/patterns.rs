//! Structural templates extracted from source strings

use crate::analysis::tokens::literal_segments;
use crate::io::configuration::{PLACEHOLDER, SPECIAL_CHARS};
use std::fmt;

/// A source string with every word token replaced by an empty slot
///
/// Stored as the literal segments around the slots, so a pattern with `n`
/// slots holds `n + 1` segments. Filling is therefore total: there is no
/// marker text left to search for once words are supplied.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pattern {
    segments: Vec<String>,
}

impl Pattern {
    /// Derive the pattern of a source string
    pub fn from_text(text: &str) -> Self {
        Self {
            segments: literal_segments(text),
        }
    }

    /// Parse a rendered template such as `WORD, WORD!`
    ///
    /// Every occurrence of [`PLACEHOLDER`] becomes a slot.
    pub fn from_template(template: &str) -> Self {
        Self {
            segments: template.split(PLACEHOLDER).map(str::to_owned).collect(),
        }
    }

    /// Number of word slots to fill
    pub fn slot_count(&self) -> usize {
        self.segments.len().saturating_sub(1)
    }

    /// Literal text between the slots
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Test whether any literal contains one of [`SPECIAL_CHARS`]
    pub fn is_distinctive(&self) -> bool {
        self.segments
            .iter()
            .any(|segment| segment.chars().any(|c| SPECIAL_CHARS.contains(c)))
    }

    /// Fill the slots left to right with words drawn from `next_word`
    pub fn fill(&self, mut next_word: impl FnMut() -> String) -> String {
        let mut result = String::new();
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                result.push_str(&next_word());
            }
            result.push_str(segment);
        }
        result
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join(PLACEHOLDER))
    }
}

/// Which extracted patterns are kept in the vocabulary
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PatternFilter {
    /// Keep every pattern
    #[default]
    All,
    /// Keep only patterns containing a special character
    Distinctive,
}

impl PatternFilter {
    /// Test whether a pattern passes this filter
    pub fn accepts(self, pattern: &Pattern) -> bool {
        match self {
            Self::All => true,
            Self::Distinctive => pattern.is_distinctive(),
        }
    }
}
