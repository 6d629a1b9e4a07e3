//! Tests for batch generation, registry filtering and duplicate handling

#[cfg(test)]
mod tests {
    use fragmentgen::generation::strategies::StrategyKind;
    use fragmentgen::{
        DuplicatePolicy, ExtractionOptions, FragmentError, FragmentGenerator, GeneratorConfig,
        SourceCorpus,
    };
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn generator(texts: &[&str], config: GeneratorConfig) -> FragmentGenerator {
        let corpus = SourceCorpus::new(texts.iter().copied());
        match FragmentGenerator::from_corpus(&corpus, ExtractionOptions::default(), config) {
            Ok(generator) => generator,
            Err(error) => unreachable!("valid configuration rejected: {error}"),
        }
    }

    fn slogans() -> Vec<&'static str> {
        vec![
            "Buy now, pay forever!",
            "I love cats!",
            "I hate dogs?",
            "system@failure #42",
            "the knife knows",
            "feel the *static*",
        ]
    }

    // Tests a zero-sized request succeeds even on an empty corpus
    // Verified by checking vocabulary before the count
    #[test]
    fn test_zero_count_is_empty() {
        let generator = generator(&[], GeneratorConfig::default());
        let mut rng = StdRng::seed_from_u64(40);
        assert!(matches!(generator.generate(0, &mut rng), Ok(batch) if batch.is_empty()));
    }

    // Tests an empty corpus signals insufficient vocabulary
    // Verified by returning an empty batch instead
    #[test]
    fn test_empty_corpus_is_insufficient() {
        let generator = generator(&[], GeneratorConfig::default());
        let mut rng = StdRng::seed_from_u64(41);

        assert!(generator.registry().is_empty());
        match generator.generate(3, &mut rng) {
            Err(FragmentError::InsufficientVocabulary { requested }) => assert_eq!(requested, 3),
            other => unreachable!("expected InsufficientVocabulary, got {other:?}"),
        }
    }

    // Tests batches without deduplication have exactly the requested length
    // Verified by skipping the final slot
    #[test]
    fn test_allow_duplicates_exact_length() {
        let config = GeneratorConfig {
            duplicates: DuplicatePolicy::Allow,
            ..GeneratorConfig::default()
        };
        let generator = generator(&slogans(), config);
        let mut rng = StdRng::seed_from_u64(42);

        for count in [1, 5, 10, 50] {
            let batch = generator.generate(count, &mut rng).unwrap_or_default();
            assert_eq!(batch.len(), count);
            assert!(batch.iter().all(|fragment| !fragment.is_empty()));
        }
    }

    // Tests a rich corpus yields a fully distinct batch
    // Verified by never consulting the seen set
    #[test]
    fn test_unique_within_batch() {
        let generator = generator(&slogans(), GeneratorConfig::default());
        let mut rng = StdRng::seed_from_u64(43);

        let batch = generator.generate(10, &mut rng).unwrap_or_default();
        let distinct: HashSet<&String> = batch.iter().collect();
        assert_eq!(batch.len(), 10);
        assert_eq!(distinct.len(), 10);
    }

    // Tests retry exhaustion accepts duplicates rather than looping or failing
    // Verified by retrying without an attempt bound
    #[test]
    fn test_retry_exhaustion_falls_back_to_duplicates() {
        let config = GeneratorConfig {
            strategies: vec![StrategyKind::RandomCombination],
            styled: false,
            duplicates: DuplicatePolicy::UniqueWithinBatch { max_attempts: 4 },
        };
        let generator = generator(&["solo"], config);
        let mut rng = StdRng::seed_from_u64(44);

        let batch = generator.generate(5, &mut rng).unwrap_or_default();
        assert_eq!(batch, vec!["solo"; 5]);
    }

    // Tests a two-string corpus with a small reachable set never errors
    // Verified by failing the batch on exhaustion
    #[test]
    fn test_small_corpus_full_batch() {
        let config = GeneratorConfig {
            strategies: vec![StrategyKind::Perturbation],
            styled: false,
            duplicates: DuplicatePolicy::default(),
        };
        // Two tokens each, so perturbation can only echo the source strings
        let generator = generator(&["love cats!", "hate dogs?"], config);
        let mut rng = StdRng::seed_from_u64(45);

        let batch = generator.generate(5, &mut rng).unwrap_or_default();
        assert_eq!(batch.len(), 5);
        let distinct: HashSet<&String> = batch.iter().collect();
        assert!(distinct.len() <= 2);
    }

    // Tests inapplicable strategies are left out of the registry
    // Verified by registering every enabled strategy
    #[test]
    fn test_registry_filters_inapplicable() {
        let generator = generator(&["!!!"], GeneratorConfig::default());
        assert_eq!(
            generator.registry(),
            [StrategyKind::Thematic, StrategyKind::Perturbation]
        );
    }

    // Tests repeated strategies are registered once
    // Verified by pushing every configured entry
    #[test]
    fn test_registry_deduplicates() {
        let config = GeneratorConfig {
            strategies: vec![StrategyKind::Thematic, StrategyKind::Thematic],
            ..GeneratorConfig::default()
        };
        let generator = generator(&["anything"], config);
        assert_eq!(generator.registry(), [StrategyKind::Thematic]);
    }

    // Tests invalid configurations are rejected up front
    // Verified by removing validation from the constructor
    #[test]
    fn test_config_validation() {
        let no_strategies = GeneratorConfig {
            strategies: Vec::new(),
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            no_strategies.validate(),
            Err(FragmentError::InvalidParameter { parameter: "strategies", .. })
        ));

        let no_attempts = GeneratorConfig {
            duplicates: DuplicatePolicy::UniqueWithinBatch { max_attempts: 0 },
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            no_attempts.validate(),
            Err(FragmentError::InvalidParameter { parameter: "max_attempts", .. })
        ));

        assert!(GeneratorConfig::default().validate().is_ok());
    }

    // Tests equal seeds reproduce equal batches
    // Verified by drawing from thread-local randomness
    #[test]
    fn test_seeded_generation_is_reproducible() {
        let generator = generator(&slogans(), GeneratorConfig::default());
        let first = generator.generate(10, &mut StdRng::seed_from_u64(46)).unwrap_or_default();
        let second = generator.generate(10, &mut StdRng::seed_from_u64(46)).unwrap_or_default();
        assert_eq!(first, second);
    }

    proptest! {
        // Tests any non-empty corpus yields exactly N non-empty fragments
        // Verified by returning early when a strategy yields nothing
        #[test]
        fn prop_batches_are_full_and_non_empty(
            texts in prop::collection::vec("[a-zA-Z!?@# ]{1,24}", 1..8),
            count in 0usize..12,
            seed in any::<u64>(),
        ) {
            let corpus = SourceCorpus::new(texts);
            prop_assume!(!corpus.is_empty());

            let generator = FragmentGenerator::from_corpus(
                &corpus,
                ExtractionOptions::default(),
                GeneratorConfig::default(),
            );
            prop_assert!(generator.is_ok());
            if let Ok(generator) = generator {
                let batch = generator.generate(count, &mut StdRng::seed_from_u64(seed));
                prop_assert!(batch.is_ok());
                let batch = batch.unwrap_or_default();
                prop_assert_eq!(batch.len(), count);
                prop_assert!(batch.iter().all(|fragment| !fragment.is_empty()));
            }
        }
    }
}
