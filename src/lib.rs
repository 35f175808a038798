//! Invoice-extract - invoice ingestion field extractor.
//!
//! Emits structured invoice records as JSON for the ingestion pipeline.
//! The extraction core is a placeholder: it accepts a document path without
//! reading it and returns a fixed sample record, which pins down the output
//! contract for downstream consumers while real extraction is out of tree.
//!
//! # Architecture
//!
//! - `invoice`: the invoice record types and the fixed sample record
//! - `extract`: the placeholder extractor (document path in, record out)
//! - `report`: output formatting (single-line JSON, pretty terminal)
//! - `cli`: clap command-line surface and exit codes

pub mod cli;
pub mod extract;
pub mod invoice;
pub mod report;

pub use extract::Extractor;
pub use invoice::{Invoice, LineItem};
pub use report::OutputFormat;
