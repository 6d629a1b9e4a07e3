//! Guarded random draws over possibly empty collections

use rand::Rng;
use rand::seq::IndexedRandom;

/// Draw uniformly from the union of a fixed list and a derived list
///
/// Both lists are treated as one sequence, so a longer derived list shifts
/// the odds toward corpus words. Returns `None` only when both are empty.
pub fn pick_from_union<'a, R: Rng + ?Sized>(
    fixed: &'a [&'a str],
    derived: &'a [String],
    rng: &mut R,
) -> Option<&'a str> {
    let total = fixed.len() + derived.len();
    if total == 0 {
        return None;
    }
    let index = rng.random_range(0..total);
    fixed
        .get(index)
        .copied()
        .or_else(|| derived.get(index - fixed.len()).map(String::as_str))
}

/// Draw a count in `min..=max`, clamped so it never exceeds `available`
///
/// Returns 0 when nothing is available.
pub fn bounded_count<R: Rng + ?Sized>(
    min: usize,
    max: usize,
    available: usize,
    rng: &mut R,
) -> usize {
    let upper = max.min(available);
    let lower = min.min(upper);
    if upper == 0 {
        return 0;
    }
    rng.random_range(lower..=upper)
}

/// Sample up to `amount` distinct items, in random order
pub fn sample_distinct<'a, T, R: Rng + ?Sized>(
    items: &'a [T],
    amount: usize,
    rng: &mut R,
) -> Vec<&'a T> {
    items.choose_multiple(rng, amount).collect()
}

/// Fair coin flip used by two-shape templates
pub fn coin_flip<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.random_bool(0.5)
}
