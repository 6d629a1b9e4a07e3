//! Vocabulary extraction from a source corpus

use crate::analysis::patterns::{Pattern, PatternFilter};
use crate::analysis::themes::ThemeIndex;
use crate::analysis::tokens::{symbol_chars, word_tokens};
use crate::io::corpus::SourceCorpus;
use clap::ValueEnum;
use std::collections::BTreeSet;

/// How word tokens are cased before they enter the vocabulary
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum CasePolicy {
    /// Normalize every source string to uppercase first
    #[value(name = "upper")]
    Uppercase,
    /// Keep words exactly as written
    #[default]
    Preserve,
}

impl CasePolicy {
    fn normalize(self, text: &str) -> String {
        match self {
            Self::Uppercase => text.to_uppercase(),
            Self::Preserve => text.to_owned(),
        }
    }
}

/// Options controlling vocabulary extraction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExtractionOptions {
    /// Casing applied before tokenizing words and patterns
    pub case_policy: CasePolicy,
    /// Which patterns survive extraction
    pub pattern_filter: PatternFilter,
}

/// Words, symbols, patterns and themes derived from a corpus
///
/// Every collection is sorted and free of duplicates, so extraction is
/// deterministic and seeded generation is reproducible.
#[derive(Clone, Debug)]
pub struct Vocabulary {
    phrases: Vec<String>,
    words: Vec<String>,
    symbols: Vec<char>,
    patterns: Vec<Pattern>,
    themes: ThemeIndex,
}

impl Vocabulary {
    /// Extract a vocabulary from a corpus
    pub fn extract(corpus: &SourceCorpus, options: ExtractionOptions) -> Self {
        let mut words = BTreeSet::new();
        let mut symbols = BTreeSet::new();
        let mut patterns = BTreeSet::new();

        for text in corpus.texts() {
            let normalized = options.case_policy.normalize(text);
            words.extend(word_tokens(&normalized).map(str::to_owned));
            symbols.extend(symbol_chars(&normalized));

            let pattern = Pattern::from_text(&normalized);
            if options.pattern_filter.accepts(&pattern) {
                patterns.insert(pattern);
            }
        }

        let vocabulary = Self {
            phrases: corpus.texts().to_vec(),
            words: words.into_iter().collect(),
            symbols: symbols.into_iter().collect(),
            patterns: patterns.into_iter().collect(),
            themes: ThemeIndex::build(corpus.texts()),
        };

        tracing::info!(
            phrases = vocabulary.phrases.len(),
            words = vocabulary.words.len(),
            symbols = vocabulary.symbols.len(),
            patterns = vocabulary.patterns.len(),
            "extracted vocabulary"
        );

        vocabulary
    }

    /// Source strings in corpus order
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Unique word tokens
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Unique symbol characters
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Unique structural patterns
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Thematic tagging of the source strings
    pub const fn themes(&self) -> &ThemeIndex {
        &self.themes
    }

    /// True when the corpus contributed no source strings at all
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}
