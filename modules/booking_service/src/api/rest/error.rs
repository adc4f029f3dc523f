//! HTTP error mapping to RFC-9457 Problem Details

use crate::contract::BookingError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::any::Any;

/// RFC-9457 Problem Details for HTTP API errors
#[derive(Debug, Serialize)]
pub struct Problem {
    /// A URI reference that identifies the problem type
    #[serde(rename = "type")]
    pub type_uri: String,

    /// A short, human-readable summary of the problem type
    pub title: String,

    /// The HTTP status code
    pub status: u16,

    /// A human-readable explanation specific to this occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Problem {
    /// Create a new Problem Details response
    pub fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            type_uri: format!("https://httpstatuses.io/{}", status.as_u16()),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
        }
    }

    /// Add detail message
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

impl From<BookingError> for Problem {
    fn from(error: BookingError) -> Self {
        map_domain_error(error)
    }
}

/// Map domain errors to HTTP Problem Details
pub fn map_domain_error(error: BookingError) -> Problem {
    match error {
        BookingError::NotFound { resource, id } => {
            Problem::new(StatusCode::NOT_FOUND, format!("{resource} Not Found"))
                .with_detail(format!("{resource} with id '{id}' was not found"))
        }

        BookingError::Validation { message } => {
            Problem::new(StatusCode::BAD_REQUEST, "Validation Error").with_detail(message)
        }

        err @ BookingError::CreateFailed { .. } => {
            Problem::new(StatusCode::INTERNAL_SERVER_ERROR, "Operation Failed")
                .with_detail(err.to_string())
        }

        BookingError::Internal => {
            Problem::new(StatusCode::INTERNAL_SERVER_ERROR, "Operation Failed")
                .with_detail("The operation could not be completed")
        }
    }
}

/// Problem returned for any path that does not name a resource
pub fn route_not_found() -> Problem {
    Problem::new(StatusCode::NOT_FOUND, "Not Found")
        .with_detail("The requested resource does not exist")
}

/// Fallback for unmatched routes
pub async fn not_found() -> Problem {
    route_not_found()
}

/// Turn a handler panic into a generic 500 response
pub fn panic_response(_panic: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!("request handler panicked");
    Problem::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
        .with_detail("An unexpected error occurred")
        .into_response()
}
