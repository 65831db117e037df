//! End-to-end integration tests for the extraction pipeline.
//!
//! Builds `.docx` files on the fly, runs them through loading, recognition
//! and export, and checks the resulting tables.

use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use clause_extractor::document::{docx, LoadOptions};
use clause_extractor::recognizer::{ClauseOrder, PreamblePolicy};
use clause_extractor::{
    extract_clauses, recognize, save_records, ClauseRecord, ExtractOptions, OutputFormat,
    RecognizerOptions,
};

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

/// A service agreement as it would appear in a word processor.
const AGREEMENT: &[&str] = &[
    "SERVICE AGREEMENT",
    "",
    "1 Definitions",
    "In this agreement:",
    "a) \"Services\" means the work described in the schedule;",
    "b) \"Fees\" means the amounts payable, including:",
    "i) the monthly retainer;",
    "ii) approved expenses.",
    "2 Term",
    "2.1 This agreement starts on the signature date.",
    "2.2 Either party may terminate it with notice.",
];

/// Render paragraphs as the XML of a minimal main document part.
fn document_xml(paragraphs: &[&str]) -> String {
    let body: String = paragraphs
        .iter()
        .map(|text| {
            if text.is_empty() {
                "<w:p/>".to_string()
            } else {
                let escaped = text
                    .replace('&', "&amp;")
                    .replace('<', "&lt;")
                    .replace('>', "&gt;");
                format!(r#"<w:p><w:r><w:t xml:space="preserve">{escaped}</w:t></w:r></w:p>"#)
            }
        })
        .collect();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="{W_NS}"><w:body>{body}<w:sectPr/></w:body></w:document>"#
    )
}

/// Write a `.docx` file containing the given paragraphs.
fn write_docx(dir: &Path, name: &str, paragraphs: &[&str]) -> PathBuf {
    let mut buffer = Cursor::new(Vec::new());
    {
        let mut zip = ZipWriter::new(&mut buffer);
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        zip.start_file("[Content_Types].xml", options)
            .expect("Failed to start content types");
        zip.write_all(CONTENT_TYPES.as_bytes())
            .expect("Failed to write content types");

        zip.start_file("word/document.xml", options)
            .expect("Failed to start document part");
        zip.write_all(document_xml(paragraphs).as_bytes())
            .expect("Failed to write document part");

        zip.finish().expect("Failed to finish archive");
    }

    let path = dir.join(name);
    fs::write(&path, buffer.into_inner()).expect("Failed to write docx");
    path
}

fn pairs(records: &[ClauseRecord]) -> Vec<(&str, &str)> {
    records.iter().map(ClauseRecord::as_pair).collect()
}

#[test]
fn test_docx_paragraphs_match_source() {
    let dir = TempDir::new().unwrap();
    let path = write_docx(dir.path(), "agreement.docx", AGREEMENT);

    let bytes = fs::read(&path).unwrap();
    let paragraphs = docx::paragraphs_from_bytes(&bytes, LoadOptions::default().max_part_size)
        .expect("Failed to read paragraphs");

    assert_eq!(paragraphs, AGREEMENT.to_vec());
}

#[test]
fn test_pipeline_emission_order() {
    let dir = TempDir::new().unwrap();
    let path = write_docx(dir.path(), "agreement.docx", AGREEMENT);

    let extraction = extract_clauses(&path, &ExtractOptions::default()).unwrap();

    assert_eq!(extraction.paragraph_count, AGREEMENT.len());
    assert_eq!(
        pairs(&extraction.records),
        vec![
            ("1 a)", "\"Services\" means the work described in the schedule;"),
            ("1 b) i)", "the monthly retainer;"),
            ("1 b) ii)", "approved expenses."),
            ("1 b)", "\"Fees\" means the amounts payable, including:"),
            ("1", "Definitions In this agreement:"),
            ("2", "Term"),
            ("2.1", "This agreement starts on the signature date."),
            ("2.2", "Either party may terminate it with notice."),
        ]
    );
}

#[test]
fn test_pipeline_parent_first_with_preamble() {
    let dir = TempDir::new().unwrap();
    let path = write_docx(dir.path(), "agreement.docx", AGREEMENT);

    let options = ExtractOptions {
        recognizer: RecognizerOptions::default()
            .with_order(ClauseOrder::ParentFirst)
            .with_preamble(PreamblePolicy::Record),
        ..ExtractOptions::default()
    };
    let extraction = extract_clauses(&path, &options).unwrap();

    let ids: Vec<&str> = extraction
        .records
        .iter()
        .map(|r| r.identifier.as_str())
        .collect();
    assert_eq!(
        ids,
        vec![
            "preamble", "1", "1 a)", "1 b)", "1 b) i)", "1 b) ii)", "2", "2.1", "2.2",
        ]
    );
    assert_eq!(extraction.records[0].text, "SERVICE AGREEMENT ");
}

#[test]
fn test_pipeline_csv_export() {
    let dir = TempDir::new().unwrap();
    let path = write_docx(
        dir.path(),
        "short.docx",
        &["1 Payment", "a) Invoices are due in 30 days, net.", "2 Law"],
    );

    let extraction = extract_clauses(&path, &ExtractOptions::default()).unwrap();
    let output = dir.path().join("clauses.csv");
    save_records(&extraction.records, OutputFormat::Csv, &output).unwrap();

    let csv = fs::read_to_string(&output).unwrap();
    assert_eq!(
        csv,
        "Clause Number,Content\n\
         1 a),\"Invoices are due in 30 days, net.\"\n\
         1,Payment\n\
         2,Law\n"
    );
}

#[test]
fn test_pipeline_yaml_export() {
    let dir = TempDir::new().unwrap();
    let path = write_docx(dir.path(), "short.docx", &["1.1 Scope", "more text", "1.2 Definitions"]);

    let extraction = extract_clauses(&path, &ExtractOptions::default()).unwrap();
    let output = dir.path().join("clauses.yaml");
    save_records(&extraction.records, OutputFormat::Yaml, &output).unwrap();

    let yaml = fs::read_to_string(&output).unwrap();
    assert!(yaml.starts_with("---\n"));
    assert!(yaml.contains("content: Scope more text"));
    assert!(yaml.contains("content: Definitions"));
}

#[test]
fn test_pipeline_document_without_clauses() {
    let dir = TempDir::new().unwrap();
    let path = write_docx(dir.path(), "letter.docx", &["Dear reader,", "Nothing numbered here."]);

    let extraction = extract_clauses(&path, &ExtractOptions::default()).unwrap();
    assert!(extraction.is_empty());
}

#[test]
fn test_recognize_matches_pipeline() {
    let dir = TempDir::new().unwrap();
    let path = write_docx(dir.path(), "agreement.docx", AGREEMENT);

    let extraction = extract_clauses(&path, &ExtractOptions::default()).unwrap();
    assert_eq!(extraction.records, recognize(AGREEMENT));
}
