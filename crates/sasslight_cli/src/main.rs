//! sasslight: tokenize Sass sources and print their scope classification.
//!
//! Usage:
//!   sasslight [options] [file...]
//!
//! Each token is printed with its scope name, character offset, length, and
//! line:column position. `--format json` emits the same records as a JSON
//! array for downstream tooling.

use clap::Parser as ClapParser;
use serde::Serialize;
use std::path::Path;
use std::process;
use std::time::Instant;

use sasslight_core::LineMap;
use sasslight_scanner::{ScanError, Scanner, Scope};

#[derive(ClapParser, Debug)]
#[command(name = "sasslight", about = "sasslight - a Sass scope tokenizer written in Rust")]
struct Cli {
    /// Sass files to tokenize.
    #[arg(value_name = "FILE")]
    files: Vec<String>,

    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    format: Format,

    /// Character offset to start scanning at.
    #[arg(long, default_value_t = 0)]
    start: usize,

    /// Number of characters to scan; defaults to the rest of the file.
    #[arg(long)]
    length: Option<usize>,

    /// Skip whitespace tokens in the output.
    #[arg(short = 's', long = "skip-whitespace")]
    skip_whitespace: bool,

    /// Print a per-file token count summary.
    #[arg(long)]
    summary: bool,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

/// One output record per token.
#[derive(Debug, Serialize)]
struct TokenRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    scope: Option<&'static str>,
    offset: u32,
    length: u32,
    line: u32,
    column: u32,
    text: String,
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";
const GRAY: &str = "\x1b[90m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.files.is_empty() {
        print_error("No input files given.");
        process::exit(1);
    }

    let start = Instant::now();
    let mut failed = false;

    for file in &cli.files {
        if let Err(e) = tokenize_file(&cli, file) {
            print_error(&format!("{file}: {e}"));
            failed = true;
        }
    }

    if cli.summary {
        let elapsed = start.elapsed();
        eprintln!(
            "{}Tokenized {} file{} in {:.2?}.{}",
            GRAY,
            cli.files.len(),
            if cli.files.len() == 1 { "" } else { "s" },
            elapsed,
            RESET
        );
    }

    if failed {
        process::exit(1);
    }
}

fn tokenize_file(cli: &Cli, file: &str) -> Result<(), TokenizeError> {
    let text = std::fs::read_to_string(Path::new(file))?;
    let chars: Vec<char> = text.chars().collect();
    let length = cli.length.unwrap_or_else(|| chars.len().saturating_sub(cli.start));

    let tokens = Scanner::scan_all(&text, cli.start, length)?;
    tracing::debug!(file, tokens = tokens.len(), "scanned");
    let line_map = LineMap::new(&text);

    let mut records = Vec::with_capacity(tokens.len());
    for token in &tokens {
        if cli.skip_whitespace && token.scope == Scope::Whitespace {
            continue;
        }
        let at = line_map.line_and_column_of(token.offset());
        records.push(TokenRecord {
            scope: token.scope.scope(),
            offset: token.offset(),
            length: token.len(),
            line: at.line,
            column: at.column,
            text: chars[token.span.to_range()].iter().collect(),
        });
    }

    match cli.format {
        Format::Text => print_text(file, &records, cli.files.len() > 1),
        Format::Json => print_json(&records)?,
    }

    if cli.summary {
        eprintln!("{GRAY}{file}: {} token{}{RESET}", records.len(), if records.len() == 1 { "" } else { "s" });
    }

    Ok(())
}

fn print_text(file: &str, records: &[TokenRecord], with_header: bool) {
    if with_header {
        println!("{CYAN}{file}{RESET}");
    }
    for record in records {
        let scope = record.scope.unwrap_or("-");
        println!(
            "{:>5}:{:<4} {:>5}+{:<3} {} {}",
            record.line + 1,
            record.column + 1,
            record.offset,
            record.length,
            scope,
            preview(&record.text)
        );
    }
}

fn print_json(records: &[TokenRecord]) -> Result<(), TokenizeError> {
    let out = serde_json::to_string_pretty(records)?;
    println!("{out}");
    Ok(())
}

/// Token text with line breaks flattened for one-line display.
fn preview(text: &str) -> String {
    if text.contains('\n') || text.contains('\r') {
        text.replace('\r', "\\r").replace('\n', "\\n")
    } else {
        text.to_string()
    }
}

fn print_error(msg: &str) {
    eprintln!("{BOLD}{RED}error{RESET}: {msg}");
}

#[derive(Debug, thiserror::Error)]
enum TokenizeError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Scan(#[from] ScanError),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
