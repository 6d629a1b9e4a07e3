//! Tests for pattern extraction, rendering, filtering and filling

#[cfg(test)]
mod tests {
    use fragmentgen::analysis::patterns::{Pattern, PatternFilter};
    use fragmentgen::io::configuration::PLACEHOLDER;

    // Tests every word token becomes exactly one placeholder
    // Verified by replacing each character instead of each run
    #[test]
    fn test_pattern_rendering() {
        let pattern = Pattern::from_text("I LOVE CATS!");
        assert_eq!(pattern.to_string(), "WORD WORD WORD!");
        assert_eq!(pattern.slot_count(), 3);
    }

    // Tests punctuation and spacing are kept verbatim
    // Verified by collapsing whitespace in segments
    #[test]
    fn test_pattern_keeps_layout() {
        let pattern = Pattern::from_text("  ***buy  now*** @ 9.99 ");
        assert_eq!(pattern.to_string(), "  ***WORD  WORD*** @ WORD.WORD ");
    }

    // Tests rendering then parsing gives back the same pattern
    // Verified by splitting on a different marker
    #[test]
    fn test_from_template_matches_from_text() {
        let pattern = Pattern::from_text("hello, world?");
        assert_eq!(Pattern::from_template(&pattern.to_string()), pattern);
    }

    // Tests filling leaves no placeholder marker behind
    // Verified by skipping the last slot
    #[test]
    fn test_fill_consumes_every_slot() {
        let pattern = Pattern::from_text("one, two & three!");
        let mut counter = 0;
        let filled = pattern.fill(|| {
            counter += 1;
            format!("w{counter}")
        });

        assert_eq!(filled, "w1, w2 & w3!");
        assert_eq!(counter, pattern.slot_count());
        assert!(!filled.contains(PLACEHOLDER));
    }

    // Tests a pattern without words fills to its literal text
    // Verified by always calling the word source once
    #[test]
    fn test_fill_without_slots() {
        let pattern = Pattern::from_text("?!?");
        let filled = pattern.fill(|| unreachable!("no slots to fill"));
        assert_eq!(filled, "?!?");
    }

    // Tests the distinctive filter needs a special character in a literal
    // Verified by accepting every pattern under the distinctive filter
    #[test]
    fn test_distinctive_filter() {
        let plain = Pattern::from_text("just some words");
        let loud = Pattern::from_text("just some words!");
        let branded = Pattern::from_text("brand™ thing");

        assert!(PatternFilter::All.accepts(&plain));
        assert!(!PatternFilter::Distinctive.accepts(&plain));
        assert!(PatternFilter::Distinctive.accepts(&loud));
        assert!(PatternFilter::Distinctive.accepts(&branded));
    }
}
