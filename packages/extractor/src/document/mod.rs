//! Document loading: turns an input file into trimmed paragraph strings.
//!
//! The recognizer has no knowledge of container formats; everything it needs
//! is produced here.

pub mod docx;
pub mod plain;

use std::fs::File;
use std::path::Path;

use crate::config::DEFAULT_MAX_PART_SIZE;
use crate::error::{ExtractorError, Result};

/// Supported input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Office Open XML word processing document (`.docx`).
    Docx,

    /// Plain text, one paragraph per line.
    PlainText,
}

impl InputFormat {
    /// Determine the input format from a file extension.
    ///
    /// # Examples
    /// ```
    /// use std::path::Path;
    /// use clause_extractor::document::InputFormat;
    ///
    /// assert_eq!(InputFormat::from_path(Path::new("terms.DOCX")).unwrap(), InputFormat::Docx);
    /// assert_eq!(InputFormat::from_path(Path::new("terms.txt")).unwrap(), InputFormat::PlainText);
    /// assert!(InputFormat::from_path(Path::new("terms.pdf")).is_err());
    /// ```
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "docx" => Ok(Self::Docx),
            "txt" | "text" | "md" => Ok(Self::PlainText),
            _ => Err(ExtractorError::UnsupportedFormat(
                path.display().to_string(),
            )),
        }
    }
}

/// Options for loading documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Maximum decompressed size of a single document part in bytes.
    pub max_part_size: u64,
}

impl LoadOptions {
    /// Set the maximum part size.
    #[must_use]
    pub fn with_max_part_size(mut self, max_part_size: u64) -> Self {
        self.max_part_size = max_part_size;
        self
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            max_part_size: DEFAULT_MAX_PART_SIZE,
        }
    }
}

/// Load the paragraphs of a document in source order.
///
/// Every returned paragraph is trimmed; empty paragraphs are kept.
pub fn load_paragraphs(path: &Path, options: &LoadOptions) -> Result<Vec<String>> {
    let format = InputFormat::from_path(path)?;
    tracing::debug!(path = %path.display(), ?format, "Loading document");

    let paragraphs = match format {
        InputFormat::Docx => docx::paragraphs_from_reader(File::open(path)?, options.max_part_size)?,
        InputFormat::PlainText => plain::load(path)?,
    };

    tracing::debug!(paragraphs = paragraphs.len(), "Loaded paragraphs");
    Ok(paragraphs)
}

/// Convert bytes to a UTF-8 string, logging a warning if invalid bytes are replaced.
pub(crate) fn bytes_to_string(bytes: &[u8], context: &str) -> String {
    let text = match String::from_utf8(bytes.to_vec()) {
        Ok(text) => text,
        Err(_) => {
            tracing::warn!(
                context = context,
                "Invalid UTF-8 sequences replaced with U+FFFD"
            );
            String::from_utf8_lossy(bytes).into_owned()
        }
    };

    match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_input_format_from_path() {
        assert_eq!(
            InputFormat::from_path(Path::new("a/b/contract.docx")).unwrap(),
            InputFormat::Docx
        );
        assert_eq!(
            InputFormat::from_path(Path::new("notes.md")).unwrap(),
            InputFormat::PlainText
        );
    }

    #[test]
    fn test_input_format_rejects_unknown() {
        let err = InputFormat::from_path(Path::new("contract.doc")).unwrap_err();
        assert!(matches!(err, ExtractorError::UnsupportedFormat(_)));

        let err = InputFormat::from_path(Path::new("no_extension")).unwrap_err();
        assert!(matches!(err, ExtractorError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_load_options_default() {
        let options = LoadOptions::default();
        assert_eq!(options.max_part_size, DEFAULT_MAX_PART_SIZE);
        assert_eq!(options.with_max_part_size(10).max_part_size, 10);
    }

    #[test]
    fn test_load_paragraphs_plain_text() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("terms.txt");
        std::fs::write(&path, "1 Intro\n  more  \n\n2 Next\n").unwrap();

        let paragraphs = load_paragraphs(&path, &LoadOptions::default()).unwrap();
        assert_eq!(paragraphs, vec!["1 Intro", "more", "", "2 Next"]);
    }

    #[test]
    fn test_bytes_to_string_valid() {
        assert_eq!(bytes_to_string(b"clause", "test"), "clause");
    }

    #[test]
    fn test_bytes_to_string_lossy() {
        let text = bytes_to_string(&[b'a', 0xff, b'b'], "test");
        assert_eq!(text, "a\u{fffd}b");
    }

    #[test]
    fn test_bytes_to_string_strips_bom() {
        assert_eq!(bytes_to_string("\u{feff}1 Intro".as_bytes(), "test"), "1 Intro");
    }
}
