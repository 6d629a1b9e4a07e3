//! Generation constants and runtime configuration defaults

// Extraction
/// Marker standing in for a word token inside a rendered pattern
pub const PLACEHOLDER: &str = "WORD";

/// Characters that make a pattern stylistically distinctive
pub const SPECIAL_CHARS: &str = "™®*@$#&%!?.";

// Generation
/// Smallest number of words joined by the combination strategies
pub const MIN_COMBINATION_WORDS: usize = 2;
/// Largest number of words joined by the combination strategies
pub const MAX_COMBINATION_WORDS: usize = 5;

/// Longest run of symbols placed between two interleaved words
pub const MAX_INTERLEAVED_SYMBOLS: usize = 3;

/// Token inserted into perturbed source strings
pub const INTERJECTION: &str = "... um...";

/// Perturbation only inserts into strings with more tokens than this
pub const MIN_PERTURBATION_TOKENS: usize = 2;

// Bounded so that a tiny corpus cannot stall a batch
/// Attempts per slot before a duplicate fragment is accepted
pub const DEFAULT_MAX_ATTEMPTS: usize = 32;

// CLI surface
/// Default number of fragments per batch
pub const DEFAULT_COUNT: u64 = 5;
/// Smallest batch the CLI accepts
pub const MIN_COUNT: u64 = 1;
/// Largest batch the CLI accepts
pub const MAX_COUNT: u64 = 10;

// Output settings
/// File name used when saving a single batch next to its input
pub const OUTPUT_FILE_NAME: &str = "fragments.txt";
/// Suffix added to per-file outputs in directory mode
pub const OUTPUT_SUFFIX: &str = "_fragments";
/// Extension of accepted input files
pub const INPUT_EXTENSION: &str = "csv";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
