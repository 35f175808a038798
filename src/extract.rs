//! Invoice field extraction.
//!
//! The extractor is a placeholder: it accepts a document path so callers can
//! integrate against the final interface, but it does not open the file.
//! Every call returns the fixed sample record, which makes the output contract
//! testable end to end while real extraction is still out of tree.

use std::path::Path;

use tracing::debug;

use crate::invoice::Invoice;

/// Placeholder field extractor for invoice documents.
#[derive(Debug, Default)]
pub struct Extractor;

impl Extractor {
    pub fn new() -> Self {
        Extractor
    }

    /// Extract structured fields from the document at `path`.
    ///
    /// Total over all inputs: the path is recorded for diagnostics and
    /// otherwise ignored, so a missing argument, a nonexistent file, and a
    /// real document all produce the same record.
    pub fn extract(&self, path: Option<&Path>) -> Invoice {
        match path {
            Some(p) => debug!(path = %p.display(), "extracting invoice fields"),
            None => debug!("extracting invoice fields (no document path)"),
        }

        Invoice::sample()
    }
}
