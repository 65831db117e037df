//! Command-line interface for the clause extractor.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{validate_output_path, DEFAULT_MAX_PART_SIZE, DEFAULT_SEPARATOR};
use crate::document::LoadOptions;
use crate::error::Result;
use crate::export::{save_records, OutputFormat};
use crate::extractor::{extract_clauses, ExtractOptions, Extraction};
use crate::recognizer::{ClauseOrder, PreamblePolicy, RecognizerOptions};

/// Clause Extractor - Turn numbered document clauses into a table.
#[derive(Parser)]
#[command(name = "clause-extractor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract clauses from a document and save them as a table.
    Extract {
        /// Input document (.docx, .txt or .md)
        input: PathBuf,

        /// Output file (default: clauses.<format> in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,

        #[command(flatten)]
        recognition: RecognitionArgs,
    },

    /// Print the clauses of a document as `identifier: text` lines.
    List {
        /// Input document (.docx, .txt or .md)
        input: PathBuf,

        #[command(flatten)]
        recognition: RecognitionArgs,
    },
}

/// Options shared by all subcommands.
#[derive(Args, Debug, Clone)]
pub struct RecognitionArgs {
    /// Record order: emission (children before parent) or parent-first
    #[arg(long, value_enum, default_value_t = ClauseOrder::Emission)]
    pub order: ClauseOrder,

    /// Keep text before the first clause as a "preamble" record
    #[arg(long)]
    pub keep_preamble: bool,

    /// Separator between level tokens in clause identifiers
    #[arg(long, default_value = DEFAULT_SEPARATOR)]
    pub separator: String,

    /// Maximum decompressed size of a document part in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_PART_SIZE)]
    pub max_size: u64,
}

impl RecognitionArgs {
    /// Build extraction options from the command-line flags.
    #[must_use]
    pub fn to_options(&self) -> ExtractOptions {
        let preamble = if self.keep_preamble {
            PreamblePolicy::Record
        } else {
            PreamblePolicy::Drop
        };

        ExtractOptions {
            load: LoadOptions::default().with_max_part_size(self.max_size),
            recognizer: RecognizerOptions::new()
                .with_separator(self.separator.clone())
                .with_order(self.order)
                .with_preamble(preamble),
        }
    }
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            input,
            output,
            format,
            recognition,
        } => extract_command(&input, output.as_deref(), format, &recognition.to_options()),
        Commands::List { input, recognition } => {
            list_command(&input, &recognition.to_options())
        }
    }
}

/// Execute the extract command.
fn extract_command(
    input: &Path,
    output: Option<&Path>,
    format: OutputFormat,
    options: &ExtractOptions,
) -> Result<()> {
    let output_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(format.default_file_name()));

    // Validate output location before reading the document
    validate_output_path(&output_path)?;

    println!(
        "{} {}",
        style("Extracting clauses from").bold(),
        style(input.display()).cyan()
    );
    println!();

    let extraction = run_with_spinner(input, options)?;

    println!("  Paragraphs: {}", extraction.paragraph_count);
    println!("  Clauses: {}", style(extraction.records.len()).green());

    if extraction.is_empty() {
        println!();
        println!(
            "{} No clauses found in the document; nothing written.",
            style("Warning:").yellow().bold()
        );
        return Ok(());
    }

    let saved = save_records(&extraction.records, format, &output_path)?;

    println!();
    println!("{} {}", style("Saved to:").green().bold(), saved.display());

    Ok(())
}

/// Execute the list command.
fn list_command(input: &Path, options: &ExtractOptions) -> Result<()> {
    let extraction = extract_clauses(input, options)?;

    if extraction.is_empty() {
        eprintln!(
            "{} No clauses found in the document.",
            style("Warning:").yellow().bold()
        );
        return Ok(());
    }

    for record in &extraction.records {
        println!("{}: {}", style(&record.identifier).cyan(), record.text);
    }

    Ok(())
}

/// Run the extraction behind a progress spinner.
fn run_with_spinner(input: &Path, options: &ExtractOptions) -> Result<Extraction> {
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Reading document...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = extract_clauses(input, options);
    pb.finish_and_clear();
    result
}
