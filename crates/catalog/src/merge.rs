use chrono::NaiveDate;

use larder_core::DomainError;

use crate::item::{CandidateItem, InventoryItem};
use crate::store::CatalogStore;

/// One candidate that could not be applied.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeFailure {
    /// Position of the candidate in the input batch.
    pub index: usize,
    pub name: String,
    pub error: DomainError,
}

/// Outcome of applying an approved batch.
///
/// There is no cross-item atomicity: items applied before a failure stay
/// applied. Failures carry enough identity for callers to report which
/// items were rejected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergeReport {
    /// Resulting items (updated or newly created), in input order.
    pub applied: Vec<InventoryItem>,
    pub failed: Vec<MergeFailure>,
}

impl MergeReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Apply each selected candidate to the store, in input order.
///
/// Deliberately not idempotent: each call represents a distinct physical
/// receipt of goods, so merging the same candidate twice increments stock
/// twice.
pub fn merge(
    selected: &[CandidateItem],
    store: &CatalogStore,
    received_on: NaiveDate,
) -> MergeReport {
    let mut report = MergeReport::default();

    for (index, candidate) in selected.iter().enumerate() {
        match store.apply_receipt(candidate, received_on) {
            Ok(item) => report.applied.push(item),
            Err(error) => {
                tracing::warn!(
                    index,
                    name = %candidate.name,
                    %error,
                    "receipt rejected"
                );
                report.failed.push(MergeFailure {
                    index,
                    name: candidate.name.clone(),
                    error,
                });
            }
        }
    }

    report
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
    fn merge_applies_matches_and_creates_in_input_order() {
        let store = CatalogStore::with_items(starter_catalog());
        let batch = vec![
            candidate("basmati rice", 10.0, 2.5),
            candidate("Truffle Oil", 5.0, 20.0),
        ];

        let report = merge(&batch, &store, test_date());

        assert!(report.is_clean());
        assert_eq!(report.applied.len(), 2);
        assert_eq!(report.applied[0].name, "Basmati Rice");
        assert_eq!(report.applied[0].current_stock, 65.0);
        assert_eq!(report.applied[0].cost_per_unit, 2.5);
        assert_eq!(report.applied[1].name, "Truffle Oil");
        assert_eq!(report.applied[1].min_stock, 1.0);
        assert_eq!(report.applied[1].category, "New Items");
    }

    #[test]
    fn merging_the_same_candidate_twice_doubles_the_increment() {
        let store = CatalogStore::with_items(starter_catalog());
        let batch = vec![candidate("basmati rice", 10.0, 2.5)];

        merge(&batch, &store, test_date());
        merge(&batch, &store, test_date());

        let item = store.find_by_name("Basmati Rice").unwrap().unwrap();
        assert_eq!(item.current_stock, 75.0);
    }

    #[test]
    fn failure_mid_batch_keeps_earlier_applications() {
        let store = CatalogStore::with_items(starter_catalog());
        let batch = vec![
            candidate("basmati rice", 10.0, 2.5),
            candidate("", 1.0, 1.0),
            candidate("Potatoes", 30.0, 1.1),
        ];

        let report = merge(&batch, &store, test_date());

        assert_eq!(report.applied.len(), 2);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].index, 1);
        assert!(matches!(report.failed[0].error, DomainError::Validation(_)));

        // The failure did not roll back the first item or block the third.
        assert_eq!(
            store.find_by_name("Basmati Rice").unwrap().unwrap().current_stock,
            65.0
        );
        assert_eq!(
            store.find_by_name("Potatoes").unwrap().unwrap().current_stock,
            100.0
        );
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 128,
                ..ProptestConfig::default()
            })]

            /// Property: applied + failed always partitions the input batch,
            /// and applied items come back in input order.
            #[test]
            fn report_partitions_the_batch(
                names in proptest::collection::vec("[a-z]{0,8}", 0..12),
            ) {
                let store = CatalogStore::with_items(starter_catalog());
                let batch: Vec<CandidateItem> =
                    names.iter().map(|n| candidate(n, 1.0, 1.0)).collect();

                let report = merge(&batch, &store, test_date());

                prop_assert_eq!(
                    report.applied.len() + report.failed.len(),
                    batch.len()
                );
                for failure in &report.failed {
                    prop_assert!(batch[failure.index].name.trim().is_empty());
                }
            }
        }
    }
}
