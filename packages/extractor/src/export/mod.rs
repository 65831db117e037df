//! Tabular output of clause records.

pub mod csv;
pub mod yaml;

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::DEFAULT_OUTPUT_STEM;
use crate::error::Result;
use crate::types::ClauseRecord;

/// Output formats for extracted clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Comma-separated values with a header row.
    #[default]
    Csv,

    /// YAML document with a `clauses` sequence.
    Yaml,
}

impl OutputFormat {
    /// File extension for this format.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Yaml => "yaml",
        }
    }

    /// Default output file name for this format (e.g. `clauses.csv`).
    #[must_use]
    pub fn default_file_name(&self) -> String {
        format!("{DEFAULT_OUTPUT_STEM}.{}", self.extension())
    }
}

/// Render records in the given format.
pub fn render(records: &[ClauseRecord], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Csv => Ok(csv::to_csv(records)),
        OutputFormat::Yaml => yaml::to_yaml(records),
    }
}

/// Save records to a file.
///
/// Uses atomic write pattern: writes to temp file, syncs to disk, then renames.
/// This ensures partial writes don't corrupt an existing export on crash.
///
/// # Returns
/// Path to the saved file
pub fn save_records(records: &[ClauseRecord], format: OutputFormat, path: &Path) -> Result<PathBuf> {
    let content = render(records, format)?;

    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| format.default_file_name());
    let temp_file = path.with_file_name(format!(".{file_name}.tmp"));

    // Write to temp file first, then sync and rename for atomicity
    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&temp_file, path)?;

    tracing::debug!(path = %path.display(), records = records.len(), "Saved clauses");
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_records() -> Vec<ClauseRecord> {
        vec![
            ClauseRecord::new("1 a)", "first"),
            ClauseRecord::new("1", "Intro, with comma"),
        ]
    }

    #[test]
    fn test_output_format_extension() {
        assert_eq!(OutputFormat::Csv.extension(), "csv");
        assert_eq!(OutputFormat::Yaml.extension(), "yaml");
        assert_eq!(OutputFormat::default().default_file_name(), "clauses.csv");
    }

    #[test]
    fn test_render_csv() {
        let csv = render(&sample_records(), OutputFormat::Csv).unwrap();
        assert_eq!(
            csv,
            "Clause Number,Content\n1 a),first\n1,\"Intro, with comma\"\n"
        );
    }

    #[test]
    fn test_save_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out").join("clauses.csv");

        let saved = save_records(&sample_records(), OutputFormat::Csv, &path).unwrap();

        assert_eq!(saved, path);
        let content = fs::read_to_string(&saved).unwrap();
        assert!(content.starts_with("Clause Number,Content\n"));
        assert!(!dir.path().join("out").join(".clauses.csv.tmp").exists());
    }

    #[test]
    fn test_save_records_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("clauses.yaml");
        fs::write(&path, "stale").unwrap();

        save_records(&sample_records(), OutputFormat::Yaml, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("---\n"));
        assert!(content.contains("Intro, with comma"));
    }
}
