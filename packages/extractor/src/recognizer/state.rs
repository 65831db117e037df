//! Clause recognizer state machine.
//!
//! Holds up to three open levels (TOP, SUB, SUBSUB), each with a token and
//! the text fragments collected for it. A SUB is only open while a TOP is
//! open, and a SUBSUB only while a SUB is open. Continuation text always goes
//! to the deepest open level.

use super::options::{ClauseOrder, PreamblePolicy, RecognizerOptions};
use super::patterns::{classify, next_letter, next_roman, Marker, MarkerKind};
use crate::config::PREAMBLE_IDENTIFIER;
use crate::types::{ClauseLevel, ClauseRecord};

/// Open-order key of the preamble record; clauses count up from 1.
const PREAMBLE_KEY: usize = 0;

/// A clause level that is accumulating text.
#[derive(Debug)]
struct OpenClause {
    token: String,
    fragments: Vec<String>,
    opened_at: usize,
}

impl OpenClause {
    fn new(token: &str, content: &str, opened_at: usize) -> Self {
        Self {
            token: token.to_string(),
            fragments: vec![content.to_string()],
            opened_at,
        }
    }

    fn push(&mut self, fragment: &str) {
        self.fragments.push(fragment.to_string());
    }

    fn text(&self) -> String {
        self.fragments.join(" ")
    }
}

/// Incremental clause recognizer.
///
/// Feed it trimmed paragraphs in document order, then call
/// [`finish`](Self::finish) to flush the remaining open levels.
///
/// # Examples
/// ```
/// use clause_extractor::recognizer::ClauseRecognizer;
///
/// let mut recognizer = ClauseRecognizer::default();
/// recognizer.feed("1.1 Scope");
/// recognizer.feed("more text");
/// let records = recognizer.finish();
///
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].identifier, "1.1");
/// assert_eq!(records[0].text, "Scope more text");
/// ```
#[derive(Debug)]
pub struct ClauseRecognizer {
    options: RecognizerOptions,
    top: Option<OpenClause>,
    sub: Option<OpenClause>,
    subsub: Option<OpenClause>,
    preamble: Vec<String>,
    preamble_closed: bool,
    opened: usize,
    emitted: Vec<(usize, ClauseRecord)>,
}

impl ClauseRecognizer {
    /// Create a recognizer with the given options.
    #[must_use]
    pub fn new(options: RecognizerOptions) -> Self {
        Self {
            options,
            top: None,
            sub: None,
            subsub: None,
            preamble: Vec::new(),
            preamble_closed: false,
            opened: PREAMBLE_KEY,
            emitted: Vec::new(),
        }
    }

    /// Process one paragraph.
    pub fn feed(&mut self, paragraph: &str) {
        let line = paragraph.trim();

        let opening = classify(line).and_then(|marker| {
            self.level_for(&marker)
                .map(|level| (level, marker.token, marker.content))
        });

        match opening {
            Some((level, token, content)) => self.open(level, token, content),
            None => self.append(line),
        }
    }

    /// The level currently receiving continuation text, if any clause is open.
    #[must_use]
    pub fn active_level(&self) -> Option<ClauseLevel> {
        if self.subsub.is_some() {
            Some(ClauseLevel::SubSub)
        } else if self.sub.is_some() {
            Some(ClauseLevel::Sub)
        } else if self.top.is_some() {
            Some(ClauseLevel::Top)
        } else {
            None
        }
    }

    /// Flush all open levels, deepest first, and return the records.
    #[must_use]
    pub fn finish(mut self) -> Vec<ClauseRecord> {
        self.flush_subsub();
        self.flush_sub();
        self.flush_top();
        self.close_preamble();

        if self.options.order == ClauseOrder::ParentFirst {
            // Stable: records sharing a key keep their emission order.
            self.emitted.sort_by_key(|(opened_at, _)| *opened_at);
        }

        tracing::debug!(
            records = self.emitted.len(),
            order = ?self.options.order,
            "Clause recognition finished"
        );

        self.emitted.into_iter().map(|(_, record)| record).collect()
    }

    /// Decide which level a marker opens, given what is currently open.
    ///
    /// Returns `None` when the marker cannot open a level here and the
    /// paragraph is continuation text instead.
    fn level_for(&self, marker: &Marker<'_>) -> Option<ClauseLevel> {
        match marker.kind {
            MarkerKind::Numeric => Some(ClauseLevel::Top),
            MarkerKind::Letter => {
                if self.reads_as_roman(marker) {
                    Some(ClauseLevel::SubSub)
                } else if self.top.is_some() {
                    Some(ClauseLevel::Sub)
                } else {
                    None
                }
            }
            MarkerKind::Roman => self.sub.is_some().then_some(ClauseLevel::SubSub),
        }
    }

    /// Whether a single-letter marker continues the roman numbering of an
    /// open SUB instead of starting a new SUB.
    ///
    /// "i)" starts a roman list unless it is the next letter of the SUB
    /// ("h)" followed by "i)"). Any other letter only counts as roman when it
    /// is the next numeral of the open SUBSUB ("iv)" followed by "v)").
    fn reads_as_roman(&self, marker: &Marker<'_>) -> bool {
        let Some(sub) = self.sub.as_ref() else {
            return false;
        };
        let Some(letter) = marker.letter() else {
            return false;
        };

        if let Some(subsub) = self.subsub.as_ref() {
            let numeral = marker.token.strip_suffix(')');
            if next_roman(&subsub.token).as_deref() == numeral {
                return true;
            }
        }

        letter == 'i' && next_letter(&sub.token) != Some('i')
    }

    fn open(&mut self, level: ClauseLevel, token: &str, content: &str) {
        self.opened += 1;
        let clause = OpenClause::new(token, content, self.opened);

        match level {
            ClauseLevel::Top => {
                self.flush_subsub();
                self.flush_sub();
                self.flush_top();
                self.close_preamble();
                self.top = Some(clause);
            }
            ClauseLevel::Sub => {
                self.flush_subsub();
                self.flush_sub();
                self.sub = Some(clause);
            }
            ClauseLevel::SubSub => {
                self.flush_subsub();
                self.subsub = Some(clause);
            }
        }

        tracing::debug!(level = level.as_str(), token, "Opened clause");
    }

    fn append(&mut self, line: &str) {
        if let Some(clause) = self.subsub.as_mut() {
            clause.push(line);
        } else if let Some(clause) = self.sub.as_mut() {
            clause.push(line);
        } else if let Some(clause) = self.top.as_mut() {
            clause.push(line);
        } else {
            self.preamble.push(line.to_string());
        }
    }

    fn flush_top(&mut self) {
        if let Some(top) = self.top.take() {
            let text = top.text();
            self.emitted
                .push((top.opened_at, ClauseRecord::new(top.token, text)));
        }
    }

    fn flush_sub(&mut self) {
        if let Some(sub) = self.sub.take() {
            let identifier = self.identifier(&[&sub.token]);
            let record = ClauseRecord::new(identifier, sub.text());
            self.emitted.push((sub.opened_at, record));
        }
    }

    fn flush_subsub(&mut self) {
        if let Some(subsub) = self.subsub.take() {
            let sub_token = self.sub.as_ref().map_or("", |sub| sub.token.as_str());
            let identifier = self.identifier(&[sub_token, &subsub.token]);
            let record = ClauseRecord::new(identifier, subsub.text());
            self.emitted.push((subsub.opened_at, record));
        }
    }

    /// Join the open TOP token with deeper tokens.
    fn identifier(&self, deeper: &[&str]) -> String {
        let top = self.top.as_ref().map(|top| top.token.as_str());
        top.into_iter()
            .chain(deeper.iter().copied())
            .collect::<Vec<_>>()
            .join(&self.options.separator)
    }

    /// Close the pre-clause buffer; it never reopens.
    fn close_preamble(&mut self) {
        if self.preamble_closed {
            return;
        }
        self.preamble_closed = true;

        let fragments = std::mem::take(&mut self.preamble);
        if fragments.is_empty() {
            return;
        }

        let text = fragments.join(" ");
        match self.options.preamble {
            PreamblePolicy::Record if !text.trim().is_empty() => {
                self.emitted
                    .push((PREAMBLE_KEY, ClauseRecord::new(PREAMBLE_IDENTIFIER, text)));
            }
            _ => {
                tracing::debug!(
                    paragraphs = fragments.len(),
                    "Dropped text before first clause"
                );
            }
        }
    }
}

impl Default for ClauseRecognizer {
    fn default() -> Self {
        Self::new(RecognizerOptions::default())
    }
}
