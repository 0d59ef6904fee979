use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;

use larder_catalog::merge;
use larder_core::ItemId;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_inventory))
        .route("/update", post(update_inventory))
        .route("/:id", get(get_item))
}

pub async fn list_inventory(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.catalog().list_all() {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ItemId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid item id"),
    };

    match services.catalog().get(id) {
        Ok(Some(item)) => (StatusCode::OK, Json(item)).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "item not found"),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_inventory(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::UpdateInventoryRequest>,
) -> axum::response::Response {
    if let Some(metadata) = &body.metadata {
        tracing::info!(
            invoice_number = %metadata.invoice_number,
            supplier = %metadata.supplier,
            items = body.items.len(),
            "applying approved invoice items"
        );
    }

    let report = merge(&body.items, services.catalog(), Utc::now().date_naive());

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "success": report.is_clean(),
            "applied": report.applied.len(),
            "failed": report.failed.len(),
        })),
    )
        .into_response()
}
