use std::collections::HashMap;

use larder_core::{DomainError, DomainResult, ItemId};

use crate::item::{CandidateItem, InventoryItem};

/// Match extracted candidates against a catalog snapshot by name.
///
/// Each candidate's name is case-folded (internal whitespace is left as-is)
/// and looked up against the catalog; a hit sets `matched_inventory_id`, a
/// miss leaves it `None`. The catalog snapshot is never mutated.
///
/// A blank candidate name aborts the whole call before any annotation is
/// returned, so callers never see a partially reconciled batch.
pub fn annotate(
    candidates: Vec<CandidateItem>,
    catalog: &[InventoryItem],
) -> DomainResult<Vec<CandidateItem>> {
    // Fold the catalog into a name index once per invocation. On duplicate
    // names the first entry in catalog order wins, matching
    // `CatalogStore::find_by_name`.
    let mut index: HashMap<String, ItemId> = HashMap::with_capacity(catalog.len());
    for item in catalog {
        index.entry(item.name.to_lowercase()).or_insert(item.id);
    }

    let mut annotated = Vec::with_capacity(candidates.len());
    for mut candidate in candidates {
        if candidate.name.trim().is_empty() {
            return Err(DomainError::validation("candidate name cannot be empty"));
        }
        candidate.matched_inventory_id = index.get(&candidate.name.to_lowercase()).copied();
        annotated.push(candidate);
    }
    Ok(annotated)
}
