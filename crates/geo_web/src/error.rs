use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use geo_core::Error;
use serde::Serialize;
use tracing::error;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// A failed request, tagged with the operation it came from.
#[derive(Debug)]
pub enum ApiError {
    News(Error),
    Analysis(Error),
}

impl ApiError {
    fn status_and_body(&self) -> (StatusCode, ErrorBody) {
        let body = |error: &str, details: Option<String>| ErrorBody {
            error: error.to_string(),
            details,
        };

        match self {
            ApiError::News(Error::Configuration(message))
            | ApiError::Analysis(Error::Configuration(message)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, body(message, None))
            }
            ApiError::Analysis(e) if e.is_client_error() => (
                StatusCode::BAD_REQUEST,
                body("Title and content are required", None),
            ),
            ApiError::News(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                body("Failed to fetch news", Some(e.to_string())),
            ),
            ApiError::Analysis(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                body("Failed to analyze article", None),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        match &self {
            ApiError::News(e) | ApiError::Analysis(e) if status.is_server_error() => {
                error!("❌ Request failed: {}", e)
            }
            _ => {}
        }
        (status, Json(body)).into_response()
    }
}
