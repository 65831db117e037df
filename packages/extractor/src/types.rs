//! Core data types for clause extraction.

use serde::{Deserialize, Serialize};

/// Nesting level of a clause marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClauseLevel {
    /// Top-level numeric clause (`1`, `1.1`, `1.1.1`).
    Top,

    /// Alphabetic sub-clause (`a)`, `b)`).
    Sub,

    /// Lowercase roman sub-sub-clause (`i)`, `ii)`).
    SubSub,
}

impl ClauseLevel {
    /// Get the string value used in logs.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "TOP",
            Self::Sub => "SUB",
            Self::SubSub => "SUBSUB",
        }
    }
}

/// One extracted clause: its composite identifier and accumulated text.
///
/// Serializes as `{number, content}`, the columns of the exported table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseRecord {
    /// Open level tokens joined by the separator (e.g. "1.2 a) ii)").
    #[serde(rename = "number")]
    pub identifier: String,

    /// Space-joined paragraph fragments attributed to the clause.
    #[serde(rename = "content")]
    pub text: String,
}

impl ClauseRecord {
    /// Create a new clause record.
    #[must_use]
    pub fn new(identifier: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            text: text.into(),
        }
    }

    /// Borrow the record as an `(identifier, text)` pair.
    #[must_use]
    pub fn as_pair(&self) -> (&str, &str) {
        (&self.identifier, &self.text)
    }
}

impl<I: Into<String>, T: Into<String>> From<(I, T)> for ClauseRecord {
    fn from((identifier, text): (I, T)) -> Self {
        Self::new(identifier, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clause_level_ordering() {
        assert!(ClauseLevel::Top < ClauseLevel::Sub);
        assert!(ClauseLevel::Sub < ClauseLevel::SubSub);
    }

    #[test]
    fn test_clause_level_as_str() {
        assert_eq!(ClauseLevel::Top.as_str(), "TOP");
        assert_eq!(ClauseLevel::Sub.as_str(), "SUB");
        assert_eq!(ClauseLevel::SubSub.as_str(), "SUBSUB");
    }

    #[test]
    fn test_clause_record_from_pair() {
        let record = ClauseRecord::from(("1 a)", "first"));
        assert_eq!(record.as_pair(), ("1 a)", "first"));
    }
}
