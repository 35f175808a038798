//! Invoice record types.
//!
//! These are the wire types consumed by the ingestion pipeline. Field names
//! are fixed by the downstream contract (`"Invoice Number"`, `"HSN/SAC Code"`,
//! etc.) and serialize in declaration order.

use serde::{Deserialize, Serialize};

/// A single invoice line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(rename = "Item Name")]
    pub name: String,
    /// Indian tax-classification code (Harmonized System of Nomenclature /
    /// Services Accounting Code). Not populated by the placeholder extractor.
    #[serde(rename = "HSN/SAC Code")]
    pub hsn_sac: Option<String>,
    #[serde(rename = "Quantity")]
    pub quantity: u32,
    #[serde(rename = "Unit Price")]
    pub unit_price: i64,
    #[serde(rename = "Line Total")]
    pub line_total: i64,
}

/// A structured invoice record.
///
/// No arithmetic invariant is enforced between `total` and the line totals,
/// or between `quantity * unit_price` and `line_total`. The record carries
/// whatever the extraction stage produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(rename = "Invoice Number")]
    pub number: String,
    #[serde(rename = "Vendor Name")]
    pub vendor: String,
    /// Invoice date in `DD-Mon-YYYY` form, as printed on the document.
    #[serde(rename = "Invoice Date")]
    pub date: String,
    #[serde(rename = "Total Amount")]
    pub total: i64,
    #[serde(rename = "Items")]
    pub items: Vec<LineItem>,
}

impl Invoice {
    /// The fixed sample record emitted by the placeholder extractor.
    pub fn sample() -> Self {
        Invoice {
            number: "INV-30215".to_string(),
            vendor: "Prime Industrial Suppliers".to_string(),
            date: "22-Nov-2025".to_string(),
            total: 26078,
            items: vec![
                LineItem {
                    name: "Aluminum Sheets 2mm".to_string(),
                    hsn_sac: None,
                    quantity: 50,
                    unit_price: 200,
                    line_total: 10000,
                },
                LineItem {
                    name: "Steel Rod 20mm".to_string(),
                    hsn_sac: None,
                    quantity: 30,
                    unit_price: 350,
                    line_total: 10500,
                },
                LineItem {
                    name: "Hex Bolts M10".to_string(),
                    hsn_sac: None,
                    quantity: 200,
                    unit_price: 8,
                    line_total: 1600,
                },
            ],
        }
    }

    /// Number of line items on the invoice.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}
