//! Plain text documents: one paragraph per line.

use std::fs;
use std::path::Path;

use super::bytes_to_string;
use crate::error::Result;

/// Split text into trimmed paragraphs, one per line.
///
/// Both `\n` and `\r\n` line endings are accepted.
#[must_use]
pub fn paragraphs_from_text(text: &str) -> Vec<String> {
    text.lines().map(|line| line.trim().to_string()).collect()
}

/// Read a plain text file into paragraphs.
pub fn load(path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(path)?;
    let text = bytes_to_string(&bytes, &path.display().to_string());
    Ok(paragraphs_from_text(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_from_text() {
        let paragraphs = paragraphs_from_text("1 Intro\r\n\ta) first \r\n\r\nlast");
        assert_eq!(paragraphs, vec!["1 Intro", "a) first", "", "last"]);
    }

    #[test]
    fn test_paragraphs_from_empty_text() {
        assert!(paragraphs_from_text("").is_empty());
    }
}
