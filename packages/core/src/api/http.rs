// HTTP слой (axum)

use crate::api::ConverterAPI;
use crate::convert::NumberKind;
use crate::protocol::messages::{ConvertRequest, ConvertResponse, TypesResponse};
use crate::utils::error::ServiceError;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;
use tracing::{info, warn};

/// Собрать роутер со всеми эндпоинтами
pub fn router(api: Arc<ConverterAPI>) -> Router {
    Router::new()
        .route("/api/convert", post(convert))
        .route("/api/types", get(types))
        .route("/health", get(health))
        .with_state(api)
}

/// POST /api/convert
///
/// Отказ JSON экстрактора тоже отдается как 400 с телом `{"error"}`
pub async fn convert(
    State(api): State<Arc<ConverterAPI>>,
    payload: Result<Json<ConvertRequest>, JsonRejection>,
) -> Result<Json<ConvertResponse>, ServiceError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(
            target: "converter::http",
            status = %rejection.status(),
            error = %rejection.body_text(),
            "Request body rejected"
        );
        ServiceError::InvalidBody(rejection.body_text())
    })?;

    match api.convert(&request) {
        Ok(response) => {
            info!(
                target: "converter::http",
                input_type = %response.input_type,
                output_type = %response.output_type,
                "Conversion succeeded"
            );
            Ok(Json(response))
        }
        Err(err) => {
            warn!(
                target: "converter::http",
                input_type = ?request.input_type,
                output_type = ?request.output_type,
                error = %err,
                "Conversion rejected"
            );
            Err(err)
        }
    }
}

/// GET /api/types
pub async fn types() -> Json<TypesResponse> {
    Json(TypesResponse {
        types: NumberKind::ALL.iter().map(|kind| kind.to_string()).collect(),
    })
}

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}
