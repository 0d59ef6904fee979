use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use larder_core::{DomainError, DomainResult, ItemId};

/// One catalog entry.
///
/// Created at catalog seed time or by a receipt that matched nothing;
/// mutated only by the receipt path; never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub current_stock: f64,
    pub min_stock: f64,
    pub cost_per_unit: f64,
    pub unit: String,
    pub category: String,
    pub supplier: String,
    pub last_restocked: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub location: String,
}

/// One line extracted from an invoice, not yet part of the catalog.
///
/// Transient: produced by the extraction boundary, annotated by the
/// reconciler, consumed once a receipt applies it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateItem {
    /// Name as extracted, with arbitrary casing and whitespace.
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub cost_per_unit: f64,
    /// Set by the reconciler when the candidate matches a catalog entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_inventory_id: Option<ItemId>,
}

impl CandidateItem {
    /// Check the candidate is well-formed enough to enter the catalog.
    ///
    /// Quantity and cost must be finite; cost must not be negative; the
    /// name must not be blank. Positivity of quantity is deliberately not
    /// required here; the stock floor is enforced at receipt time.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("candidate name cannot be empty"));
        }
        if !self.quantity.is_finite() {
            return Err(DomainError::validation("quantity must be a finite number"));
        }
        if !self.cost_per_unit.is_finite() {
            return Err(DomainError::validation("cost per unit must be a finite number"));
        }
        if self.cost_per_unit < 0.0 {
            return Err(DomainError::validation("cost per unit cannot be negative"));
        }
        Ok(())
    }
}

/// Source-document details carried alongside a candidate list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceMetadata {
    #[serde(default)]
    pub invoice_number: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub supplier: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, quantity: f64, cost_per_unit: f64) -> CandidateItem {
        CandidateItem {
            name: name.to_string(),
            quantity,
            unit: "kg".to_string(),
            cost_per_unit,
            matched_inventory_id: None,
        }
    }

    #[test]
    fn validate_accepts_ordinary_candidate() {
        assert!(candidate("Basmati Rice", 10.0, 2.5).validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_name() {
        let err = candidate("   ", 10.0, 2.5).validate().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn validate_rejects_non_finite_numbers() {
        assert!(candidate("Rice", f64::NAN, 2.5).validate().is_err());
        assert!(candidate("Rice", 10.0, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn validate_rejects_negative_cost() {
        let err = candidate("Rice", 10.0, -1.0).validate().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn candidate_json_uses_camel_case_and_optional_match() {
        let json = serde_json::to_value(candidate("Rice", 10.0, 2.5)).unwrap();
        assert_eq!(json["costPerUnit"], 2.5);
        assert!(json.get("matchedInventoryId").is_none());

        let parsed: CandidateItem = serde_json::from_str(
            r#"{"name":"Rice","quantity":10,"unit":"kg","costPerUnit":2.5}"#,
        )
        .unwrap();
        assert_eq!(parsed.matched_inventory_id, None);
    }
}
