//! Paragraph extraction from `.docx` (WordprocessingML) documents.
//!
//! Only the direct paragraph children of `<w:body>` are returned, in document
//! order. Paragraphs inside tables are not part of the stream.

use std::io::{Cursor, Read, Seek};

use roxmltree::{Document, Node};
use zip::result::ZipError;
use zip::ZipArchive;

use super::bytes_to_string;
use crate::config::DOCUMENT_PART;
use crate::error::{ExtractorError, Result};
use crate::xml::{find_child, find_children, get_tag_name};

/// Elements whose content never belongs to the paragraph's own text.
///
/// `pPr` holds tab stop definitions (`<w:tab>`) that are not tab characters;
/// `txbxContent` holds the paragraphs of floating text boxes; `Fallback`
/// duplicates the content of an `AlternateContent` choice.
const SKIPPED_ELEMENTS: &[&str] = &["pPr", "rPr", "txbxContent", "Fallback", "del"];

/// Read paragraphs from an in-memory `.docx` file.
pub fn paragraphs_from_bytes(bytes: &[u8], max_part_size: u64) -> Result<Vec<String>> {
    paragraphs_from_reader(Cursor::new(bytes), max_part_size)
}

/// Read paragraphs from a seekable `.docx` source.
pub fn paragraphs_from_reader<R: Read + Seek>(reader: R, max_part_size: u64) -> Result<Vec<String>> {
    let mut archive = ZipArchive::new(reader)?;
    let xml = read_part(&mut archive, DOCUMENT_PART, max_part_size)?;
    paragraphs_from_xml(&xml)
}

/// Extract trimmed body paragraphs from the main document part XML.
pub fn paragraphs_from_xml(xml: &str) -> Result<Vec<String>> {
    let doc = Document::parse(xml)?;
    let body = find_child(doc.root_element(), "body").ok_or_else(|| {
        ExtractorError::MissingElement {
            element: "body".to_string(),
            context: DOCUMENT_PART.to_string(),
        }
    })?;

    Ok(find_children(body, "p")
        .map(|paragraph| paragraph_text(paragraph).trim().to_string())
        .collect())
}

/// Read one part of the container, refusing parts larger than `limit` bytes.
fn read_part<R: Read + Seek>(archive: &mut ZipArchive<R>, part: &str, limit: u64) -> Result<String> {
    let file = match archive.by_name(part) {
        Ok(file) => file,
        Err(ZipError::FileNotFound) => {
            return Err(ExtractorError::MissingPart {
                part: part.to_string(),
            })
        }
        Err(e) => return Err(e.into()),
    };

    // Read one byte past the limit so oversized parts are detected without
    // trusting the size recorded in the archive header.
    let mut bytes = Vec::new();
    file.take(limit.saturating_add(1)).read_to_end(&mut bytes)?;
    if bytes.len() as u64 > limit {
        return Err(ExtractorError::PartTooLarge {
            part: part.to_string(),
            limit,
        });
    }

    Ok(bytes_to_string(&bytes, part))
}

/// Text of a paragraph: runs concatenated, with tabs and breaks preserved.
fn paragraph_text(paragraph: Node<'_, '_>) -> String {
    let mut text = String::new();
    collect_text(paragraph, &mut text);
    text
}

fn collect_text(node: Node<'_, '_>, text: &mut String) {
    for child in node.children().filter(Node::is_element) {
        match get_tag_name(child) {
            "t" => text.push_str(child.text().unwrap_or_default()),
            "tab" => text.push('\t'),
            "br" | "cr" => text.push('\n'),
            tag if SKIPPED_ELEMENTS.contains(&tag) => {}
            _ => collect_text(child, text),
        }
    }
}
