//! Batch generation: strategy dispatch, styling switch and duplicate policy

use crate::analysis::vocabulary::{ExtractionOptions, Vocabulary};
use crate::generation::strategies::StrategyKind;
use crate::io::configuration::DEFAULT_MAX_ATTEMPTS;
use crate::io::corpus::SourceCorpus;
use crate::io::error::{FragmentError, Result, invalid_parameter};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::HashSet;

/// Whether fragments within one batch must differ
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Accept every fragment as produced
    Allow,
    /// Redraw on collision, accepting a duplicate after `max_attempts`
    UniqueWithinBatch {
        /// Draws per slot before giving up on uniqueness
        max_attempts: usize,
    },
}

impl Default for DuplicatePolicy {
    fn default() -> Self {
        Self::UniqueWithinBatch {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Runtime options for a [`FragmentGenerator`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Strategies that may be drawn, before applicability filtering
    pub strategies: Vec<StrategyKind>,
    /// Apply a random [`crate::generation::styling::WordStyle`] to each word
    pub styled: bool,
    /// Within-batch uniqueness
    pub duplicates: DuplicatePolicy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            strategies: StrategyKind::ALL.to_vec(),
            styled: true,
            duplicates: DuplicatePolicy::default(),
        }
    }
}

impl GeneratorConfig {
    /// Check that the configuration can drive generation
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if no strategy is enabled or the
    /// retry bound is zero
    pub fn validate(&self) -> Result<()> {
        if self.strategies.is_empty() {
            return Err(invalid_parameter(
                "strategies",
                &"[]",
                &"at least one strategy must be enabled",
            ));
        }
        if let DuplicatePolicy::UniqueWithinBatch { max_attempts: 0 } = self.duplicates {
            return Err(invalid_parameter(
                "max_attempts",
                &0,
                &"must allow at least one draw per fragment",
            ));
        }
        Ok(())
    }
}

/// Produces batches of fragments from an immutable vocabulary
#[derive(Clone, Debug)]
pub struct FragmentGenerator {
    vocabulary: Vocabulary,
    config: GeneratorConfig,
    registry: Vec<StrategyKind>,
}

impl FragmentGenerator {
    /// Build a generator over an extracted vocabulary
    ///
    /// Enabled strategies that cannot run on this vocabulary are left out of
    /// the registry, so every draw is guaranteed to produce.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails [`GeneratorConfig::validate`]
    pub fn new(vocabulary: Vocabulary, config: GeneratorConfig) -> Result<Self> {
        config.validate()?;

        let mut registry: Vec<StrategyKind> = Vec::new();
        for &strategy in &config.strategies {
            if strategy.is_applicable(&vocabulary) && !registry.contains(&strategy) {
                registry.push(strategy);
            }
        }
        tracing::debug!(?registry, "strategy registry");

        Ok(Self {
            vocabulary,
            config,
            registry,
        })
    }

    /// Extract a vocabulary from `corpus` and build a generator over it
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails [`GeneratorConfig::validate`]
    pub fn from_corpus(
        corpus: &SourceCorpus,
        options: ExtractionOptions,
        config: GeneratorConfig,
    ) -> Result<Self> {
        Self::new(Vocabulary::extract(corpus, options), config)
    }

    /// The vocabulary fragments are drawn from
    pub const fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// The active configuration
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Strategies that will actually be drawn from
    pub fn registry(&self) -> &[StrategyKind] {
        &self.registry
    }

    /// Generate exactly `count` fragments
    ///
    /// `count == 0` always succeeds with an empty batch. Under
    /// [`DuplicatePolicy::UniqueWithinBatch`], a slot that keeps colliding is
    /// filled with its last candidate once the retry bound is spent.
    ///
    /// # Errors
    ///
    /// Returns [`FragmentError::InsufficientVocabulary`] when `count > 0` and
    /// no strategy can run, which happens exactly when the corpus is empty
    pub fn generate<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Result<Vec<String>> {
        if count == 0 {
            return Ok(Vec::new());
        }
        if self.registry.is_empty() {
            return Err(FragmentError::InsufficientVocabulary { requested: count });
        }

        let mut fragments = Vec::with_capacity(count);
        let mut seen = HashSet::with_capacity(count);

        for slot in 0..count {
            let fragment = match self.config.duplicates {
                DuplicatePolicy::Allow => self.draw(rng)?,
                DuplicatePolicy::UniqueWithinBatch { max_attempts } => {
                    self.draw_unique(&seen, max_attempts, slot, rng)?
                }
            };
            seen.insert(fragment.clone());
            fragments.push(fragment);
        }

        Ok(fragments)
    }

    /// One fragment from a uniformly drawn strategy
    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String> {
        let strategy = *self
            .registry
            .choose(rng)
            .ok_or(FragmentError::InsufficientVocabulary { requested: 1 })?;
        tracing::trace!(?strategy, "drawing fragment");
        strategy
            .produce(&self.vocabulary, self.config.styled, rng)
            .ok_or(FragmentError::InsufficientVocabulary { requested: 1 })
    }

    fn draw_unique<R: Rng + ?Sized>(
        &self,
        seen: &HashSet<String>,
        max_attempts: usize,
        slot: usize,
        rng: &mut R,
    ) -> Result<String> {
        let mut candidate = self.draw(rng)?;
        for attempt in 1..max_attempts {
            if !seen.contains(&candidate) {
                return Ok(candidate);
            }
            tracing::debug!(slot, attempt, %candidate, "duplicate fragment, redrawing");
            candidate = self.draw(rng)?;
        }

        if seen.contains(&candidate) {
            tracing::warn!(
                slot,
                max_attempts,
                %candidate,
                "no distinct fragment found, accepting duplicate"
            );
        }
        Ok(candidate)
    }
}
