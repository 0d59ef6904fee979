use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};

use larder_catalog::annotate;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/process", post(process_invoice))
}

/// Run one uploaded invoice through extraction and reconciliation.
///
/// The catalog is read, never written, on this path; approved updates come
/// back later through `/inventory/update`.
pub async fn process_invoice(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::ProcessInvoiceRequest>,
) -> axum::response::Response {
    if body.file.trim().is_empty() {
        return errors::json_error(StatusCode::BAD_REQUEST, "missing_file", "no file provided");
    }

    let extraction = match services.extractor().extract(&body.file).await {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(error = %e, "invoice extraction failed");
            return errors::extraction_error_to_response(e);
        }
    };

    let catalog = match services.catalog().list_all() {
        Ok(c) => c,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let candidates = extraction.items.iter().map(dto::line_to_candidate).collect();
    let annotated = match annotate(candidates, &catalog) {
        Ok(a) => a,
        Err(e) => return errors::domain_error_to_response(e),
    };

    (
        StatusCode::OK,
        Json(dto::extraction_to_json(&extraction, annotated)),
    )
        .into_response()
}
