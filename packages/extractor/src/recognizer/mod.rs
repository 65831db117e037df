//! Clause recognition over a stream of paragraphs.
//!
//! Recognizes three nested marker levels and folds continuation paragraphs
//! into the deepest open clause:
//!
//! ```text
//! 1.2 Definitions          TOP     "1.2"
//! a) first item            SUB     "1.2 a)"
//! i) nested item           SUBSUB  "1.2 a) i)"
//! continuation text        appended to "1.2 a) i)"
//! ```
//!
//! Records are returned in the order their clauses were closed, which puts
//! children before their parent. Use [`ClauseOrder::ParentFirst`] for
//! document order.

mod options;
pub mod patterns;
mod state;

pub use options::{ClauseOrder, PreamblePolicy, RecognizerOptions};
pub use state::ClauseRecognizer;

use crate::types::ClauseRecord;

/// Recognize clauses with default options.
///
/// # Examples
/// ```
/// use clause_extractor::recognizer::recognize;
///
/// let records = recognize(["1.1 Scope", "more text", "1.2 Definitions"]);
/// assert_eq!(records[0].as_pair(), ("1.1", "Scope more text"));
/// assert_eq!(records[1].as_pair(), ("1.2", "Definitions"));
/// ```
pub fn recognize<I, S>(paragraphs: I) -> Vec<ClauseRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    recognize_with(paragraphs, &RecognizerOptions::default())
}

/// Recognize clauses with explicit options.
pub fn recognize_with<I, S>(paragraphs: I, options: &RecognizerOptions) -> Vec<ClauseRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut recognizer = ClauseRecognizer::new(options.clone());
    for paragraph in paragraphs {
        recognizer.feed(paragraph.as_ref());
    }
    recognizer.finish()
}
