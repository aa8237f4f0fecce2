// Типы ошибок сервиса

use crate::error::ConvertError;
use crate::protocol::messages::ErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Invalid input type: {0}")]
    InvalidInputType(String),

    #[error("Invalid output type: {0}")]
    InvalidOutputType(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Input exceeds {max} characters")]
    InputTooLong { max: usize },

    #[error(transparent)]
    Conversion(#[from] ConvertError),
}

impl ServiceError {
    pub fn status(&self) -> StatusCode {
        // Все ошибки вызваны содержимым запроса
        StatusCode::BAD_REQUEST
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
