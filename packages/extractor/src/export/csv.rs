//! Two-column CSV output.

use crate::config::{CLAUSE_NUMBER_HEADER, CONTENT_HEADER};
use crate::types::ClauseRecord;

/// Render records as CSV with a `Clause Number,Content` header row.
///
/// Rows end with `\n`. Fields containing a comma, a double quote or a line
/// break are quoted, with embedded quotes doubled.
///
/// # Examples
/// ```
/// use clause_extractor::export::csv::to_csv;
/// use clause_extractor::ClauseRecord;
///
/// let csv = to_csv(&[ClauseRecord::new("1", "Fees, charges")]);
/// assert_eq!(csv, "Clause Number,Content\n1,\"Fees, charges\"\n");
/// ```
#[must_use]
pub fn to_csv(records: &[ClauseRecord]) -> String {
    let mut out = String::new();
    push_row(&mut out, CLAUSE_NUMBER_HEADER, CONTENT_HEADER);
    for record in records {
        push_row(&mut out, &record.identifier, &record.text);
    }
    out
}

fn push_row(out: &mut String, identifier: &str, text: &str) {
    push_field(out, identifier);
    out.push(',');
    push_field(out, text);
    out.push('\n');
}

fn push_field(out: &mut String, field: &str) {
    if needs_quoting(field) {
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(field);
    }
}

fn needs_quoting(field: &str) -> bool {
    field.contains([',', '"', '\n', '\r'])
}
