//! YAML output of clause records.

use serde::Serialize;

use crate::error::Result;
use crate::types::ClauseRecord;

/// Full document representation for YAML serialization.
#[derive(Debug, Serialize)]
struct YamlClauses<'a> {
    clauses: &'a [ClauseRecord],
}

/// Generate a YAML document listing the records in order.
pub fn to_yaml(records: &[ClauseRecord]) -> Result<String> {
    let document = YamlClauses { clauses: records };
    let yaml = serde_yaml_ng::to_string(&document)?;

    // Add document start marker and clean up trailing whitespace
    let lines: Vec<&str> = yaml.lines().map(str::trim_end).collect();
    Ok(format!("---\n{}\n", lines.join("\n")))
}
