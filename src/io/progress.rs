//! Progress display for directory batches

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static FILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Files: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks files completed within one directory run
pub struct ProgressManager {
    bar: ProgressBar,
    fragments_written: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a hidden manager; call [`Self::initialize`] to show it
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            fragments_written: 0,
        }
    }

    /// Show a bar sized to the number of files
    pub fn initialize(&mut self, file_count: usize) {
        let bar = ProgressBar::new(file_count as u64);
        bar.set_style(FILE_STYLE.clone());
        self.bar = bar;
    }

    /// Name the file currently being processed
    pub fn start_file(&self, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.bar.set_message(display_name);
    }

    /// Count a finished file and its fragments
    pub fn complete_file(&mut self, fragment_count: usize) {
        self.fragments_written += fragment_count;
        self.bar.inc(1);
    }

    /// Total fragments reported through [`Self::complete_file`]
    pub const fn fragments_written(&self) -> usize {
        self.fragments_written
    }

    /// Files completed so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the bar, leaving a summary message
    pub fn finish(&self) {
        self.bar.finish_with_message(format!(
            "{} fragments written",
            self.fragments_written
        ));
    }
}
