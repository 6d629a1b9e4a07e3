//! Fragment generation strategies and their dispatch registry

use crate::analysis::vocabulary::Vocabulary;
use crate::generation::sampling::{bounded_count, sample_distinct};
use crate::generation::styling::style_word;
use crate::generation::themed::ThemedTemplate;
use crate::generation::wrapping::Wrapper;
use crate::io::configuration::{
    INTERJECTION, MAX_COMBINATION_WORDS, MAX_INTERLEAVED_SYMBOLS, MIN_COMBINATION_WORDS,
    MIN_PERTURBATION_TOKENS,
};
use clap::ValueEnum;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Named ways of producing one fragment from a vocabulary
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum StrategyKind {
    /// Fill a source pattern's slots with random words
    #[value(name = "template")]
    TemplateSubstitution,
    /// Join a few distinct random words with spaces
    #[value(name = "combination")]
    RandomCombination,
    /// Wrap a combination in brackets, ellipses, or joiners
    #[value(name = "stylized")]
    StylizedWrapping,
    /// Put a short run of corpus symbols between two words
    #[value(name = "symbolic")]
    SymbolicInterleaving,
    /// Closed-vocabulary sentence templates
    #[value(name = "thematic")]
    Thematic,
    /// Insert an interjection into a whole source string
    #[value(name = "perturbation")]
    Perturbation,
}

impl StrategyKind {
    /// The full registry
    pub const ALL: [Self; 6] = [
        Self::TemplateSubstitution,
        Self::RandomCombination,
        Self::StylizedWrapping,
        Self::SymbolicInterleaving,
        Self::Thematic,
        Self::Perturbation,
    ];

    /// Test whether this strategy has everything it draws from
    pub fn is_applicable(self, vocabulary: &Vocabulary) -> bool {
        match self {
            Self::TemplateSubstitution => {
                !vocabulary.patterns().is_empty() && !vocabulary.words().is_empty()
            }
            Self::RandomCombination | Self::StylizedWrapping | Self::SymbolicInterleaving => {
                !vocabulary.words().is_empty()
            }
            Self::Thematic | Self::Perturbation => !vocabulary.is_empty(),
        }
    }

    /// Produce one fragment
    ///
    /// Returns `None` only if the strategy is not applicable to `vocabulary`.
    pub fn produce<R: Rng + ?Sized>(
        self,
        vocabulary: &Vocabulary,
        styled: bool,
        rng: &mut R,
    ) -> Option<String> {
        if !self.is_applicable(vocabulary) {
            return None;
        }
        let word_source = WordSource {
            words: vocabulary.words(),
            styled,
        };

        match self {
            Self::TemplateSubstitution => {
                let pattern = vocabulary.patterns().choose(rng)?;
                Some(pattern.fill(|| word_source.next(rng).unwrap_or_default()))
            }
            Self::RandomCombination => Some(word_source.combination(rng)),
            Self::StylizedWrapping => {
                let base = word_source.combination(rng);
                Some(Wrapper::random(rng).apply(&base))
            }
            Self::SymbolicInterleaving => {
                let left = word_source.next(rng)?;
                let right = word_source.next(rng)?;
                let run_length = bounded_count(
                    1,
                    MAX_INTERLEAVED_SYMBOLS,
                    vocabulary.symbols().len(),
                    rng,
                );
                if run_length == 0 {
                    return Some(format!("{left} {right}"));
                }
                let symbols: String = sample_distinct(vocabulary.symbols(), run_length, rng)
                    .into_iter()
                    .collect();
                Some(format!("{left}{symbols}{right}"))
            }
            Self::Thematic => Some(ThemedTemplate::random(rng).render(vocabulary, rng)),
            Self::Perturbation => {
                let phrase = vocabulary.phrases().choose(rng)?;
                Some(perturb(phrase, rng))
            }
        }
    }
}

/// Word draws shared by the word-based strategies
struct WordSource<'a> {
    words: &'a [String],
    styled: bool,
}

impl WordSource<'_> {
    fn next<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<String> {
        let word = self.words.choose(rng)?;
        Some(self.finish(word, rng))
    }

    fn finish<R: Rng + ?Sized>(&self, word: &str, rng: &mut R) -> String {
        if self.styled {
            style_word(word, rng)
        } else {
            word.to_owned()
        }
    }

    /// Distinct words, between the configured bounds, joined by spaces
    fn combination<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let count = bounded_count(
            MIN_COMBINATION_WORDS,
            MAX_COMBINATION_WORDS,
            self.words.len(),
            rng,
        );
        sample_distinct(self.words, count, rng)
            .into_iter()
            .map(|word| self.finish(word, rng))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Insert [`INTERJECTION`] at a random token boundary of a source string
///
/// Strings with too few tokens are only whitespace-normalized.
pub fn perturb<R: Rng + ?Sized>(phrase: &str, rng: &mut R) -> String {
    let mut tokens: Vec<&str> = phrase.split_whitespace().collect();
    if tokens.len() > MIN_PERTURBATION_TOKENS {
        let position = rng.random_range(0..=tokens.len());
        tokens.insert(position, INTERJECTION);
    }
    tokens.join(" ")
}
