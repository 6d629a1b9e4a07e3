//! Error types and path context for corpus loading, generation and export

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all fragment generation operations
#[derive(Debug)]
pub enum FragmentError {
    /// Failed to read or parse the tabular source file
    CorpusLoad {
        /// Path to the CSV file
        path: PathBuf,
        /// Underlying CSV error
        source: csv::Error,
    },

    /// Generation was requested but the corpus holds nothing to draw from
    ///
    /// Occurs when the source column was empty or every cell was blank
    InsufficientVocabulary {
        /// Number of fragments that were requested
        requested: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// CLI target is neither a CSV file nor a directory
    InvalidTarget {
        /// The offending target path
        path: PathBuf,
        /// What was expected instead
        reason: &'static str,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for FragmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CorpusLoad { path, source } => {
                write!(f, "Failed to load corpus '{}': {source}", path.display())
            }
            Self::InsufficientVocabulary { requested } => {
                write!(
                    f,
                    "Insufficient vocabulary: cannot generate {requested} fragments from an empty corpus"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidTarget { path, reason } => {
                write!(f, "Invalid target '{}': {reason}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for FragmentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CorpusLoad { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for fragment generation results
pub type Result<T> = std::result::Result<T, FragmentError>;

/// Attaches the path and operation to raw I/O failures
pub trait WithPath<T> {
    /// Convert an I/O result into a [`FragmentError::FileSystem`] naming the path
    ///
    /// # Errors
    ///
    /// Propagates the original I/O error wrapped with the path and operation
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::io::Result<T> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| FragmentError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

impl From<std::io::Error> for FragmentError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> FragmentError {
    FragmentError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
