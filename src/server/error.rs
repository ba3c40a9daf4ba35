use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Errors the http layer itself can produce. The api routes never return these,
/// store trouble is absorbed by the data service.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    NotFound(String),
    #[error("request took longer than the configured {0} second timeout")]
    RequestTimeout(u64),
    #[error("unhandled internal error: {0}")]
    InternalServerErrorWithContext(String),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::RequestTimeout(_) => StatusCode::REQUEST_TIMEOUT,
            Error::InternalServerErrorWithContext(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "errors": {
                "message": vec![self.to_string()],
            }
        }));

        (self.status(), body).into_response()
    }
}
