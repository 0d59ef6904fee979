use serde::Deserialize;

use larder_catalog::{CandidateItem, InvoiceMetadata};
use larder_extraction::{ExtractedLine, InvoiceExtraction};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct ProcessInvoiceRequest {
    /// The invoice image as a base64 data URL.
    pub file: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateInventoryRequest {
    pub items: Vec<CandidateItem>,
    #[serde(default)]
    pub metadata: Option<InvoiceMetadata>,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn line_to_candidate(line: &ExtractedLine) -> CandidateItem {
    CandidateItem {
        name: line.name.clone(),
        quantity: line.quantity,
        unit: line.unit.clone(),
        cost_per_unit: line.cost_per_unit,
        matched_inventory_id: None,
    }
}

pub fn extraction_to_json(
    extraction: &InvoiceExtraction,
    annotated: Vec<CandidateItem>,
) -> serde_json::Value {
    serde_json::json!({
        "items": annotated,
        "invoiceNumber": extraction.invoice_number,
        "date": extraction.date,
        "supplier": extraction.supplier,
    })
}
