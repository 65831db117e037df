//! Configuration constants and validation functions for the extractor.

use std::path::Path;

use crate::error::{ExtractorError, Result};

/// Header of the identifier column in tabular output.
pub const CLAUSE_NUMBER_HEADER: &str = "Clause Number";

/// Header of the text column in tabular output.
pub const CONTENT_HEADER: &str = "Content";

/// Separator placed between open level tokens in a clause identifier.
pub const DEFAULT_SEPARATOR: &str = " ";

/// Identifier of the synthetic record holding text found before the first clause.
pub const PREAMBLE_IDENTIFIER: &str = "preamble";

/// Path of the main document part inside a `.docx` container.
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Default maximum size of a single document part in bytes (100 MB).
///
/// Guards against archives that decompress to far more than their file size.
/// Can be overridden via the CLI --max-size flag.
pub const DEFAULT_MAX_PART_SIZE: u64 = 100 * 1024 * 1024;

/// File stem used when no output path is given.
pub const DEFAULT_OUTPUT_STEM: &str = "clauses";

/// Validate that an input path points at an existing regular file.
///
/// # Examples
/// ```
/// use clause_extractor::config::validate_input_path;
///
/// assert!(validate_input_path(std::path::Path::new("does/not/exist.docx")).is_err());
/// ```
pub fn validate_input_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ExtractorError::InputNotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(ExtractorError::NotAFile(path.to_path_buf()));
    }
    Ok(())
}

/// Validate that the directory an output file will be written to exists.
///
/// A bare file name (no parent component) always refers to the working
/// directory and is accepted.
pub fn validate_output_path(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.is_dir() => {
            Err(ExtractorError::OutputDirectoryMissing(dir.to_path_buf()))
        }
        _ => Ok(()),
    }
}
