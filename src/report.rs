//! Output formatting for extracted invoice records.
//!
//! Supports two output formats:
//! - JSON: the record on a single line, for programmatic consumption (default)
//! - Pretty: colored terminal output for human readability

use std::path::Path;

use colored::*;
use thiserror::Error;

use crate::invoice::Invoice;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Pretty,
}

/// Error returned when an output format string is not recognized.
#[derive(Error, Debug)]
#[error("unknown format {0:?}, must be 'json' or 'pretty'")]
pub struct ParseFormatError(String);

impl std::str::FromStr for OutputFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "pretty" => Ok(OutputFormat::Pretty),
            _ => Err(ParseFormatError(s.to_string())),
        }
    }
}

// =============================================================================
// JSON Format
// =============================================================================

/// Serialize the record to its single-line wire form.
pub fn render_json(invoice: &Invoice) -> anyhow::Result<String> {
    Ok(serde_json::to_string(invoice)?)
}

/// Write the record to stdout in JSON format.
pub fn write_json(invoice: &Invoice) -> anyhow::Result<()> {
    println!("{}", render_json(invoice)?);
    Ok(())
}

/// Write the record to a file in JSON format (same bytes stdout would get).
pub fn write_json_file(invoice: &Invoice, path: &Path) -> anyhow::Result<()> {
    let mut json = render_json(invoice)?;
    json.push('\n');
    std::fs::write(path, json)?;
    Ok(())
}

// =============================================================================
// Pretty Format
// =============================================================================

/// Write the record to stdout in pretty (human-readable) format.
pub fn write_pretty(invoice: &Invoice, source: Option<&Path>) {
    // Header
    println!();
    print!("  ");
    print!("{}", "invoice-extract".cyan().bold());
    println!(" v{}", env!("CARGO_PKG_VERSION"));
    println!();

    // Source document
    print!("  {}", "Document: ".dimmed());
    match source {
        Some(p) => println!("{}", p.display()),
        None => println!("{}", "(none)".dimmed()),
    }
    println!();

    // Invoice header fields
    write_field("Invoice", &invoice.number);
    write_field("Vendor", &invoice.vendor);
    write_field("Date", &invoice.date);
    println!();

    // Line items
    println!("  {} ({}):", "Items".bold(), invoice.item_count());
    for item in &invoice.items {
        let code = item.hsn_sac.as_deref().unwrap_or("-");
        println!(
            "    {:<24} {:>5} x {:>6}  {:>8}  {}",
            item.name,
            item.quantity,
            item.unit_price,
            item.line_total,
            format!("hsn/sac: {}", code).dimmed()
        );
    }
    println!();

    // Total
    print!("  {}", "Total: ".dimmed());
    println!("{}", invoice.total.to_string().bold());
    println!();
}

fn write_field(label: &str, value: &str) {
    println!("  {}{}", format!("{:<9}", format!("{}:", label)).dimmed(), value);
}
