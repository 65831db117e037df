//! Options controlling identifier composition and output shape.

use crate::config::DEFAULT_SEPARATOR;

/// Order of the returned records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ClauseOrder {
    /// Order in which clauses were closed: children precede their parent.
    #[default]
    Emission,

    /// Order in which clauses were opened: document order, parent first.
    ParentFirst,
}

/// What happens to text that appears before the first clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreamblePolicy {
    /// Discard it.
    #[default]
    Drop,

    /// Emit it as a record with identifier `preamble`.
    Record,
}

/// Options for a recognizer run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizerOptions {
    /// Placed between open level tokens in an identifier.
    pub separator: String,

    /// Order of the returned records.
    pub order: ClauseOrder,

    /// Handling of text before the first clause.
    pub preamble: PreamblePolicy,
}

impl RecognizerOptions {
    /// Create options with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the identifier separator.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the record order.
    #[must_use]
    pub fn with_order(mut self, order: ClauseOrder) -> Self {
        self.order = order;
        self
    }

    /// Set the preamble policy.
    #[must_use]
    pub fn with_preamble(mut self, preamble: PreamblePolicy) -> Self {
        self.preamble = preamble;
        self
    }
}

impl Default for RecognizerOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            order: ClauseOrder::default(),
            preamble: PreamblePolicy::default(),
        }
    }
}
