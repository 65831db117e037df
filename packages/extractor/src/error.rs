//! Error types for the clause extractor.
//!
//! The recognizer itself is total and never fails; every variant here belongs
//! to the collaborators around it (document loading, export, CLI validation).

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the clause extractor library.
#[derive(Debug, Error)]
pub enum ExtractorError {
    /// Input file does not exist.
    #[error("Input file does not exist: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Input path exists but is not a regular file.
    #[error("Input path is not a file: {}", .0.display())]
    NotAFile(PathBuf),

    /// Input file extension is not a supported document format.
    #[error("Unsupported input format: '{0}'. Expected .docx, .txt or .md")]
    UnsupportedFormat(String),

    /// Output directory does not exist.
    #[error("Output directory does not exist: {}", .0.display())]
    OutputDirectoryMissing(PathBuf),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The document container could not be read as a zip archive.
    #[error("Failed to read document archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// A required part is missing from the document container.
    #[error("Document is missing required part: {part}")]
    MissingPart { part: String },

    /// A document part exceeds the configured size limit.
    #[error("Document part {part} exceeds size limit of {limit} bytes")]
    PartTooLarge { part: String, limit: u64 },

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// Missing required XML element.
    #[error("Missing required XML element: {element} in {context}")]
    MissingElement { element: String, context: String },

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),
}

/// Result type alias for extractor operations.
pub type Result<T> = std::result::Result<T, ExtractorError>;
