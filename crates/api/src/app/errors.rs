use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use larder_core::DomainError;
use larder_extraction::ExtractionError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        DomainError::InvariantViolation(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "invariant_violation", msg)
        }
        DomainError::Conflict(msg) => json_error(StatusCode::CONFLICT, "conflict", msg),
    }
}

/// All extraction failures surface as a generic processing failure; the
/// distinction that matters to callers is configured-but-broken (502)
/// versus never-configured (503).
pub fn extraction_error_to_response(err: ExtractionError) -> axum::response::Response {
    match err {
        ExtractionError::NotConfigured => json_error(
            StatusCode::SERVICE_UNAVAILABLE,
            "extraction_unavailable",
            "invoice extraction is not configured",
        ),
        other => json_error(StatusCode::BAD_GATEWAY, "extraction_failed", other.to_string()),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
