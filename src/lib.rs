//! Procedural generation of short text fragments from a column of source samples
//!
//! The system extracts words, symbols, structural patterns and thematic buckets
//! from the source strings, then recombines them through a registry of
//! randomized strategies to produce new fragments.

#![forbid(unsafe_code)]

/// Vocabulary, pattern and theme extraction from source strings
pub mod analysis;
/// Strategy registry, styling and batch generation
pub mod generation;
/// Input/output operations, configuration and error handling
pub mod io;

pub use analysis::vocabulary::{CasePolicy, ExtractionOptions, Vocabulary};
pub use generation::generator::{DuplicatePolicy, FragmentGenerator, GeneratorConfig};
pub use io::corpus::SourceCorpus;
pub use io::error::{FragmentError, Result};
