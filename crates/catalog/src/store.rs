use std::sync::RwLock;

use chrono::NaiveDate;

use larder_core::{DomainError, DomainResult, ItemId};

use crate::item::{CandidateItem, InventoryItem};

/// In-memory inventory catalog.
///
/// The authoritative item list, in insertion order. State lives only in
/// process memory and resets on restart. All mutation goes through
/// [`CatalogStore::apply_receipt`]; the lock serializes writers so the
/// store can sit behind a shared handle in a multi-threaded server.
#[derive(Debug, Default)]
pub struct CatalogStore {
    items: RwLock<Vec<InventoryItem>>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `items`, preserving their order.
    pub fn with_items(items: Vec<InventoryItem>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    /// Full catalog snapshot, insertion order.
    pub fn list_all(&self) -> DomainResult<Vec<InventoryItem>> {
        let items = self
            .items
            .read()
            .map_err(|_| DomainError::conflict("catalog lock poisoned"))?;
        Ok(items.clone())
    }

    /// Look one item up by identifier.
    pub fn get(&self, id: ItemId) -> DomainResult<Option<InventoryItem>> {
        let items = self
            .items
            .read()
            .map_err(|_| DomainError::conflict("catalog lock poisoned"))?;
        Ok(items.iter().find(|item| item.id == id).cloned())
    }

    /// Case-insensitive exact match on `name`.
    ///
    /// Duplicate names are not prevented; the first match in insertion
    /// order wins. The same policy applies in [`crate::reconcile::annotate`].
    pub fn find_by_name(&self, name: &str) -> DomainResult<Option<InventoryItem>> {
        let folded = name.to_lowercase();
        let items = self
            .items
            .read()
            .map_err(|_| DomainError::conflict("catalog lock poisoned"))?;
        Ok(items
            .iter()
            .find(|item| item.name.to_lowercase() == folded)
            .cloned())
    }

    /// Apply one approved candidate to the catalog.
    ///
    /// On a name match: stock is incremented by the candidate quantity, the
    /// cost overwritten, and `last_restocked` stamped with `received_on`.
    /// On a miss: a fresh item is appended with `min_stock` at 20% of the
    /// received quantity (floored). Stock never goes below zero; a receipt
    /// that would sink it is rejected before any mutation.
    pub fn apply_receipt(
        &self,
        candidate: &CandidateItem,
        received_on: NaiveDate,
    ) -> DomainResult<InventoryItem> {
        candidate.validate()?;

        let folded = candidate.name.to_lowercase();
        let mut items = self
            .items
            .write()
            .map_err(|_| DomainError::conflict("catalog lock poisoned"))?;

        if let Some(existing) = items.iter_mut().find(|item| item.name.to_lowercase() == folded) {
            let next_stock = existing.current_stock + candidate.quantity;
            if next_stock < 0.0 {
                return Err(DomainError::invariant("stock cannot go negative"));
            }
            existing.current_stock = next_stock;
            existing.cost_per_unit = candidate.cost_per_unit;
            existing.last_restocked = received_on;
            return Ok(existing.clone());
        }

        if candidate.quantity < 0.0 {
            return Err(DomainError::invariant("stock cannot go negative"));
        }

        let item = InventoryItem {
            id: ItemId::new(),
            name: candidate.name.clone(),
            current_stock: candidate.quantity,
            min_stock: (candidate.quantity * 0.2).floor(),
            cost_per_unit: candidate.cost_per_unit,
            unit: candidate.unit.clone(),
            category: "New Items".to_string(),
            supplier: "TBD".to_string(),
            last_restocked: received_on,
            expiry_date: None,
            description: Some("New item added from invoice".to_string()),
            location: "Main Storage".to_string(),
        };
        items.push(item.clone());
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::starter_catalog;

    fn candidate(name: &str, quantity: f64, cost_per_unit: f64) -> CandidateItem {
        CandidateItem {
            name: name.to_string(),
            quantity,
            unit: "kg".to_string(),
            cost_per_unit,
            matched_inventory_id: None,
        }
    }

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn find_by_name_is_case_insensitive() {
        let store = CatalogStore::with_items(starter_catalog());
        let hit = store.find_by_name("bAsMaTi RiCe").unwrap().unwrap();
        assert_eq!(hit.name, "Basmati Rice");
    }

    #[test]
    fn find_by_name_misses_cleanly() {
        let store = CatalogStore::with_items(starter_catalog());
        assert!(store.find_by_name("Dragon Fruit").unwrap().is_none());
    }

    #[test]
    fn duplicate_names_resolve_to_first_in_insertion_order() {
        let mut items = starter_catalog();
        let mut shadow = items[0].clone();
        shadow.id = ItemId::new();
        shadow.name = "BASMATI RICE".to_string();
        let first_id = items[0].id;
        items.push(shadow);

        let store = CatalogStore::with_items(items);
        let hit = store.find_by_name("basmati rice").unwrap().unwrap();
        assert_eq!(hit.id, first_id);
    }

    #[test]
    fn receipt_on_match_increments_stock_and_overwrites_cost() {
        let store = CatalogStore::with_items(starter_catalog());
        let before = store.find_by_name("Basmati Rice").unwrap().unwrap();
        assert_eq!(before.current_stock, 55.0);

        let updated = store
            .apply_receipt(&candidate("basmati rice", 10.0, 2.5), test_date())
            .unwrap();

        assert_eq!(updated.id, before.id);
        assert_eq!(updated.current_stock, 65.0);
        assert_eq!(updated.cost_per_unit, 2.5);
        assert_eq!(updated.last_restocked, test_date());
        // The matched entry keeps its identity and metadata.
        assert_eq!(updated.name, "Basmati Rice");
        assert_eq!(updated.category, before.category);
    }

    #[test]
    fn receipt_on_match_touches_no_other_item() {
        let store = CatalogStore::with_items(starter_catalog());
        let before = store.list_all().unwrap();

        store
            .apply_receipt(&candidate("basmati rice", 10.0, 2.5), test_date())
            .unwrap();

        let after = store.list_all().unwrap();
        assert_eq!(before.len(), after.len());
        for (b, a) in before.iter().zip(after.iter()) {
            if b.name == "Basmati Rice" {
                continue;
            }
            assert_eq!(b, a);
        }
    }

    #[test]
    fn receipt_on_miss_appends_new_item_with_derived_min_stock() {
        let store = CatalogStore::with_items(starter_catalog());
        let created = store
            .apply_receipt(&candidate("Truffle Oil", 5.0, 20.0), test_date())
            .unwrap();

        assert_eq!(created.current_stock, 5.0);
        assert_eq!(created.min_stock, 1.0);
        assert_eq!(created.category, "New Items");
        assert_eq!(created.supplier, "TBD");
        assert_eq!(created.location, "Main Storage");
        assert_eq!(created.last_restocked, test_date());

        let all = store.list_all().unwrap();
        assert_eq!(all.len(), starter_catalog().len() + 1);
        assert_eq!(all.last().unwrap().id, created.id);
        assert_eq!(store.get(created.id).unwrap().unwrap(), created);
    }

    #[test]
    fn receipt_rejects_non_finite_input_without_mutating() {
        let store = CatalogStore::with_items(starter_catalog());
        let err = store
            .apply_receipt(&candidate("Basmati Rice", f64::NAN, 2.5), test_date())
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(
            store.find_by_name("Basmati Rice").unwrap().unwrap().current_stock,
            55.0
        );
    }

    #[test]
    fn receipt_never_sinks_stock_below_zero() {
        let store = CatalogStore::with_items(starter_catalog());
        let err = store
            .apply_receipt(&candidate("Basmati Rice", -100.0, 2.5), test_date())
            .unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));

        let err = store
            .apply_receipt(&candidate("Brand New", -1.0, 2.5), test_date())
            .unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
    }

    #[test]
    fn negative_receipt_within_stock_is_a_correction() {
        let store = CatalogStore::with_items(starter_catalog());
        let updated = store
            .apply_receipt(&candidate("Basmati Rice", -5.0, 2.5), test_date())
            .unwrap();
        assert_eq!(updated.current_stock, 50.0);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: a matched receipt moves the matched item's stock by
            /// exactly the candidate quantity and no other item's stock.
            #[test]
            fn matched_receipt_conserves_other_stock(
                quantity in 0.0f64..10_000.0,
                cost in 0.0f64..1_000.0,
            ) {
                let store = CatalogStore::with_items(starter_catalog());
                let before = store.list_all().unwrap();

                let updated = store
                    .apply_receipt(&candidate("olive oil", quantity, cost), test_date())
                    .unwrap();

                prop_assert!((updated.current_stock - (30.0 + quantity)).abs() < 1e-9);

                let after = store.list_all().unwrap();
                prop_assert_eq!(before.len(), after.len());
                for (b, a) in before.iter().zip(after.iter()) {
                    if b.name != "Olive Oil" {
                        prop_assert_eq!(b.current_stock, a.current_stock);
                    }
                }
            }

            /// Property: an unmatched receipt appends exactly one item whose
            /// min_stock is floor(quantity * 0.2).
            #[test]
            fn unmatched_receipt_derives_min_stock(
                quantity in 0.0f64..10_000.0,
                cost in 0.0f64..1_000.0,
            ) {
                let store = CatalogStore::with_items(starter_catalog());
                let created = store
                    .apply_receipt(&candidate("Saffron Threads", quantity, cost), test_date())
                    .unwrap();

                prop_assert_eq!(created.min_stock, (quantity * 0.2).floor());
                prop_assert_eq!(
                    store.list_all().unwrap().len(),
                    starter_catalog().len() + 1
                );
            }
        }
    }
}
