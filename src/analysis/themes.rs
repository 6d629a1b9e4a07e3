//! Non-exclusive thematic tagging of source strings

use crate::analysis::tokens::word_tokens;
use bitvec::prelude::*;
use std::collections::BTreeSet;
use std::fmt;

/// Lowercase keywords marking a violent string
pub const VIOLENT_KEYWORDS: [&str; 6] = ["blood", "kill", "dead", "death", "knife", "gun"];
/// Characters marking a tech string
pub const TECH_CHARS: [char; 5] = ['@', '/', '\\', '#', '*'];
/// Lowercase keywords marking an emotional string
pub const EMOTIONAL_KEYWORDS: [&str; 5] = ["love", "hate", "feel", "want", "need"];

/// Thematic categories a source string may belong to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Theme {
    /// Mentions blood, killing, weapons
    Violent,
    /// Contains path, handle, or markup characters
    Tech,
    /// Mentions wanting, loving, hating
    Emotional,
}

impl Theme {
    /// Every theme, in tagging order
    pub const ALL: [Self; 3] = [Self::Violent, Self::Tech, Self::Emotional];

    /// Test whether a string carries this theme
    ///
    /// Keyword themes match case-insensitively on substrings, so `killer`
    /// counts as violent.
    pub fn matches(self, text: &str) -> bool {
        match self {
            Self::Violent => contains_keyword(text, &VIOLENT_KEYWORDS),
            Self::Tech => text.chars().any(|c| TECH_CHARS.contains(&c)),
            Self::Emotional => contains_keyword(text, &EMOTIONAL_KEYWORDS),
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Violent => 0,
            Self::Tech => 1,
            Self::Emotional => 2,
        }
    }
}

fn contains_keyword(text: &str, keywords: &[&str]) -> bool {
    let lowered = text.to_lowercase();
    keywords.iter().any(|keyword| lowered.contains(keyword))
}

/// Fixed-size bitset over corpus indices
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhraseSet {
    bits: BitVec,
}

impl PhraseSet {
    /// Create a set with no phrases present
    pub fn new(phrase_count: usize) -> Self {
        Self {
            bits: bitvec![0; phrase_count],
        }
    }

    /// Insert a corpus index, ignoring indices past the end
    pub fn insert(&mut self, index: usize) {
        if index < self.bits.len() {
            self.bits.set(index, true);
        }
    }

    /// Test phrase membership
    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Test if no phrases are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count phrases in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Member indices in ascending order
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }
}

impl fmt::Display for PhraseSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PhraseSet({} phrases)", self.count())
    }
}

/// Per-theme phrase membership plus the uppercased words of each bucket
#[derive(Clone, Debug)]
pub struct ThemeIndex {
    members: [PhraseSet; 3],
    words: [Vec<String>; 3],
}

impl ThemeIndex {
    /// Tag every phrase against every theme
    pub fn build(phrases: &[String]) -> Self {
        let mut members = Theme::ALL.map(|_| PhraseSet::new(phrases.len()));
        let mut words: [BTreeSet<String>; 3] = Default::default();

        for (index, phrase) in phrases.iter().enumerate() {
            for theme in Theme::ALL {
                if !theme.matches(phrase) {
                    continue;
                }
                if let Some(set) = members.get_mut(theme.index()) {
                    set.insert(index);
                }
                if let Some(bucket) = words.get_mut(theme.index()) {
                    bucket.extend(word_tokens(phrase).map(str::to_uppercase));
                }
            }
        }

        Self {
            members,
            words: words.map(|bucket| bucket.into_iter().collect()),
        }
    }

    /// Phrases tagged with a theme
    // Theme::index is always in bounds for the fixed arrays
    #[allow(clippy::indexing_slicing)]
    pub const fn members(&self, theme: Theme) -> &PhraseSet {
        &self.members[theme.index()]
    }

    /// Sorted, unique uppercased words drawn from a theme's phrases
    pub fn words(&self, theme: Theme) -> &[String] {
        self.words
            .get(theme.index())
            .map_or(&[], Vec::as_slice)
    }

    /// Every theme a phrase belongs to (possibly none)
    pub fn themes_of(&self, index: usize) -> Vec<Theme> {
        Theme::ALL
            .into_iter()
            .filter(|&theme| self.members(theme).contains(index))
            .collect()
    }
}
