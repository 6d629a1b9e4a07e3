/// Batch generation with duplicate handling
pub mod generator;
/// Guarded random draws
pub mod sampling;
/// Strategy registry and per-strategy production
pub mod strategies;
/// Per-word styling transforms
pub mod styling;
/// Closed-vocabulary thematic templates
pub mod themed;
/// Whole-fragment wrappers
pub mod wrapping;
