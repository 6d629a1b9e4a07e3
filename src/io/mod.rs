/// Command-line parsing and file orchestration
pub mod cli;
/// Compile-time defaults
pub mod configuration;
/// Source corpus loading
pub mod corpus;
/// Error types
pub mod error;
/// Saving and rendering fragment batches
pub mod export;
/// Diagnostic logging setup
pub mod logging;
/// Directory progress display
pub mod progress;
