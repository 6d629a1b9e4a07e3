//! Plain-text rendering and saving of fragment batches

use crate::io::error::{Result, WithPath};
use std::fs;
use std::path::Path;

/// How a batch is written when the output file already exists
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportMode {
    /// Replace the file contents
    #[default]
    Overwrite,
    /// Put the new batch above whatever the file already holds
    Prepend,
}

/// Join fragments one per line, without a trailing newline
pub fn render(fragments: &[String]) -> String {
    fragments.join("\n")
}

/// Combine a new batch with previously accumulated text, newest first
pub fn prepend_batch(batch: &str, previous: &str) -> String {
    match (batch.is_empty(), previous.is_empty()) {
        (_, true) => batch.to_owned(),
        (true, false) => previous.to_owned(),
        (false, false) => format!("{batch}\n{previous}"),
    }
}

/// Write a batch to `path`
///
/// # Errors
///
/// Returns a file system error naming `path` if reading the previous
/// contents or writing the new ones fails
pub fn write_fragments(path: &Path, fragments: &[String], mode: ExportMode) -> Result<()> {
    let batch = render(fragments);
    let contents = match mode {
        ExportMode::Overwrite => batch,
        ExportMode::Prepend if path.exists() => {
            let previous = fs::read_to_string(path).with_path(path, "read")?;
            prepend_batch(&batch, &previous)
        }
        ExportMode::Prepend => batch,
    };

    fs::write(path, contents).with_path(path, "write")?;
    tracing::info!(path = %path.display(), fragments = fragments.len(), "saved fragments");
    Ok(())
}
