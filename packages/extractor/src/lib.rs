//! Clause Extractor - Turn hierarchically numbered clauses into a flat table.
//!
//! This crate reads the paragraphs of a document, recognizes clause markers
//! such as `1.2`, `a)` and `ii)`, folds continuation paragraphs into the open
//! clause and produces `(identifier, text)` records that can be exported as
//! CSV or YAML.
//!
//! # Example
//!
//! ```
//! use clause_extractor::recognize;
//!
//! let records = recognize(["1 Intro", "a) first", "i) sub", "2 Next"]);
//! let ids: Vec<_> = records.iter().map(|r| r.identifier.as_str()).collect();
//! assert_eq!(ids, ["1 a) i)", "1 a)", "1", "2"]);
//! ```
//!
//! # Architecture
//!
//! - [`recognizer`]: Clause boundary recognition and hierarchy folding
//! - [`types`]: Core data types (ClauseLevel, ClauseRecord)
//! - [`document`]: Paragraph loading from .docx and plain text files
//! - [`xml`]: XML utilities
//! - [`export`]: CSV and YAML output
//! - [`extractor`]: Load-and-recognize service
//! - [`config`]: Configuration constants and validation
//! - [`error`]: Error types and Result alias
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod extractor;
pub mod recognizer;
pub mod types;
pub mod xml;

// Re-export main functions
pub use extractor::{extract_clauses, ExtractOptions, Extraction};
pub use recognizer::{recognize, recognize_with, ClauseRecognizer, RecognizerOptions};

// Re-export commonly used items
pub use error::{ExtractorError, Result};
pub use export::{save_records, OutputFormat};
pub use types::{ClauseLevel, ClauseRecord};
