use serde::{Deserialize, Serialize};

/// One line item the provider read off the invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedLine {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub cost_per_unit: f64,
}

/// The full provider output: line items plus source-document details.
///
/// `items` is required and strictly typed; the metadata strings default to
/// empty when the provider omits them. Unknown extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceExtraction {
    pub items: Vec<ExtractedLine>,
    #[serde(default)]
    pub invoice_number: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub supplier: String,
}
