//! Catalog domain module.
//!
//! This crate contains the business rules for the inventory catalog,
//! implemented purely as deterministic domain logic (no IO, no HTTP,
//! no storage beyond process memory).

pub mod item;
pub mod merge;
pub mod reconcile;
pub mod seed;
pub mod store;

pub use item::{CandidateItem, InventoryItem, InvoiceMetadata};
pub use merge::{merge, MergeFailure, MergeReport};
pub use reconcile::annotate;
pub use seed::starter_catalog;
pub use store::CatalogStore;
