//! Command-line interface for invoice-extract.

use std::path::PathBuf;

use clap::Parser;

use crate::extract::Extractor;
use crate::report::{self, OutputFormat};

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 2;

/// Invoice ingestion field extractor.
///
/// Reads an invoice document and emits the extracted fields as a structured
/// JSON record on stdout. Extraction is currently a placeholder stage: the
/// document path is accepted but never opened, and every invocation emits the
/// same fixed sample record, so downstream consumers can integrate against
/// the output contract before real extraction lands.
#[derive(Parser)]
#[command(name = "invoice-extract")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the invoice document (accepted but not read)
    pub path: Option<PathBuf>,

    /// Output format: json or pretty
    #[arg(short, long, default_value = "json")]
    pub format: String,

    /// Write the JSON record to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Run the extraction and write the record in the requested format.
pub fn run_extract(cli: &Cli) -> anyhow::Result<i32> {
    let format: OutputFormat = match cli.format.parse() {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_ERROR);
        }
    };

    let extractor = Extractor::new();
    let invoice = extractor.extract(cli.path.as_deref());

    // --output always writes the wire form, independent of --format
    if let Some(out) = &cli.output {
        report::write_json_file(&invoice, out)?;
        return Ok(EXIT_SUCCESS);
    }

    match format {
        OutputFormat::Json => report::write_json(&invoice)?,
        OutputFormat::Pretty => report::write_pretty(&invoice, cli.path.as_deref()),
    }

    Ok(EXIT_SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["invoice-extract"]).unwrap();
        assert!(cli.path.is_none());
        assert_eq!(cli.format, "json");
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_parse_with_path() {
        let cli = Cli::try_parse_from(["invoice-extract", "scan.pdf"]).unwrap();
        assert_eq!(cli.path, Some(PathBuf::from("scan.pdf")));
    }

    #[test]
    fn test_unknown_format_exits_with_error_code() {
        let cli = Cli::try_parse_from(["invoice-extract", "--format", "xml"]).unwrap();
        let code = run_extract(&cli).unwrap();
        assert_eq!(code, EXIT_ERROR);
    }

    #[test]
    fn test_output_file_gets_wire_form() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("invoice.json");

        let cli = Cli::try_parse_from([
            "invoice-extract",
            "/nonexistent/file.pdf",
            "--output",
            out.to_str().unwrap(),
        ])
        .unwrap();

        let code = run_extract(&cli).unwrap();
        assert_eq!(code, EXIT_SUCCESS);

        let written = std::fs::read_to_string(&out).unwrap();
        assert!(written.ends_with('\n'));
        let parsed: crate::invoice::Invoice =
            serde_json::from_str(written.trim_end()).unwrap();
        assert_eq!(parsed, crate::invoice::Invoice::sample());
    }

    #[test]
    fn test_output_file_write_failure_is_an_error() {
        let cli = Cli::try_parse_from([
            "invoice-extract",
            "--output",
            "/nonexistent-dir/invoice.json",
        ])
        .unwrap();

        assert!(run_extract(&cli).is_err());
    }
}
