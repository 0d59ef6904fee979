use crate::error::ExtractionError;
use crate::types::InvoiceExtraction;

/// Parse raw provider content into a schema-valid [`InvoiceExtraction`].
///
/// Providers routinely wrap their JSON in markdown code fences or
/// surrounding prose. The wrapping is stripped by slicing to the outermost
/// `{`..`}` object before the strict deserialize runs; absence of any such
/// object, or a schema mismatch inside it, is [`ExtractionError::Malformed`].
pub fn parse_extraction(raw: &str) -> Result<InvoiceExtraction, ExtractionError> {
    let body = strip_wrapping(raw)
        .ok_or_else(|| ExtractionError::Malformed("no JSON object in content".to_string()))?;
    serde_json::from_str(body).map_err(|e| ExtractionError::Malformed(e.to_string()))
}

fn strip_wrapping(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (start <= end).then(|| &raw[start..=end])
}
