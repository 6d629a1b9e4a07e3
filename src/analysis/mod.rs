//! Analysis modules for vocabulary and pattern extraction

/// Structural templates with word slots
pub mod patterns;
/// Thematic tagging of source strings
pub mod themes;
/// Word and symbol tokenization
pub mod tokens;
/// Vocabulary extraction from a corpus
pub mod vocabulary;
