use axum::Router;

pub mod inventory;
pub mod invoices;
pub mod system;

/// Router for all catalog-backed endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/inventory", inventory::router())
        .nest("/invoices", invoices::router())
}
