//! Extraction service that ties loading and recognition together.

use std::path::{Path, PathBuf};

use crate::config::validate_input_path;
use crate::document::{load_paragraphs, LoadOptions};
use crate::error::Result;
use crate::recognizer::{recognize_with, RecognizerOptions};
use crate::types::ClauseRecord;

/// Options for a full extraction run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Document loading options.
    pub load: LoadOptions,

    /// Recognizer options.
    pub recognizer: RecognizerOptions,
}

/// Result of extracting clauses from one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// The document the clauses came from.
    pub source: PathBuf,

    /// Number of paragraphs read from the document.
    pub paragraph_count: usize,

    /// Recognized clauses.
    pub records: Vec<ClauseRecord>,
}

impl Extraction {
    /// True when no clause was recognized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Load a document and extract its clauses.
///
/// # Arguments
/// * `path` - Path to a `.docx` or plain text document
/// * `options` - Loading and recognition options
///
/// # Returns
/// An `Extraction` with the records in the order selected by the options
pub fn extract_clauses(path: &Path, options: &ExtractOptions) -> Result<Extraction> {
    validate_input_path(path)?;

    let paragraphs = load_paragraphs(path, &options.load)?;
    let records = recognize_with(&paragraphs, &options.recognizer);

    if records.is_empty() {
        tracing::warn!(path = %path.display(), "No clauses found in document");
    }

    Ok(Extraction {
        source: path.to_path_buf(),
        paragraph_count: paragraphs.len(),
        records,
    })
}
