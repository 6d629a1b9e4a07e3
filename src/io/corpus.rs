//! Source corpus loading from the first column of a CSV table

use crate::io::error::{FragmentError, Result};
use rand::Rng;
use rand::seq::SliceRandom;
use std::path::Path;

/// Ordered, non-empty source strings for one session
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceCorpus {
    texts: Vec<String>,
}

impl SourceCorpus {
    /// Build a corpus from raw strings, dropping blank entries
    pub fn new<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            texts: texts
                .into_iter()
                .map(Into::into)
                .filter(|text| !text.trim().is_empty())
                .collect(),
        }
    }

    /// Load the first column of a CSV file with a header row
    ///
    /// Missing and blank cells are dropped; row order is preserved. Rows may
    /// have differing lengths.
    ///
    /// # Errors
    ///
    /// Returns [`FragmentError::CorpusLoad`] if the file cannot be opened or
    /// a record cannot be parsed
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let load_error = |source: csv::Error| FragmentError::CorpusLoad {
            path: path.to_path_buf(),
            source,
        };

        let mut reader = reader_builder().from_path(path).map_err(load_error)?;
        let texts = first_column(&mut reader).map_err(load_error)?;

        let corpus = Self::new(texts);
        tracing::info!(path = %path.display(), texts = corpus.len(), "loaded corpus");
        Ok(corpus)
    }

    /// Load a CSV from any reader, as [`Self::from_csv_path`] does for files
    ///
    /// # Errors
    ///
    /// Returns the underlying CSV error if a record cannot be parsed
    pub fn from_csv_reader<R: std::io::Read>(reader: R) -> std::result::Result<Self, csv::Error> {
        let mut reader = reader_builder().from_reader(reader);
        Ok(Self::new(first_column(&mut reader)?))
    }

    /// Randomize the order once, as some sessions do at load time
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        self.texts.shuffle(rng);
        self
    }

    /// Source strings in corpus order
    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    /// Number of source strings
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    /// True when no usable source strings were loaded
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).flexible(true);
    builder
}

fn first_column<R: std::io::Read>(reader: &mut csv::Reader<R>) -> csv::Result<Vec<String>> {
    let mut texts = Vec::new();
    for record in reader.records() {
        if let Some(cell) = record?.get(0) {
            texts.push(cell.to_owned());
        }
    }
    Ok(texts)
}
