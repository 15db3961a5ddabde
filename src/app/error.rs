use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::core::contact::{ContactError, ContactRejection};
use crate::utils::error::DashboardError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    InvalidContact(#[from] ContactRejection),

    #[error("Sorry, there was an error processing your message.")]
    ContactProcessing(#[source] DashboardError),

    #[error("Endpoint not found")]
    NotFound,

    #[error("Internal server error")]
    Internal,
}

impl From<ContactError> for ApiError {
    fn from(err: ContactError) -> Self {
        match err {
            ContactError::Rejected(rejection) => ApiError::InvalidContact(rejection),
            ContactError::Processing(source) => ApiError::ContactProcessing(source),
        }
    }
}

/// JSON error envelope. `code` is only set for the generic 404/500 bodies.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidContact(_) => StatusCode::BAD_REQUEST,
            ApiError::ContactProcessing(_) | ApiError::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let code = match self {
            ApiError::NotFound | ApiError::Internal => Some(status.as_u16()),
            ApiError::InvalidContact(_) => None,
            ApiError::ContactProcessing(ref source) => {
                tracing::error!(
                    "Contact form error: {} (Category: {:?})",
                    source,
                    source.category()
                );
                None
            }
        };

        let body = ErrorBody {
            status: "error",
            message: self.to_string(),
            code,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::InvalidContact(ContactRejection::InvalidEmail).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Internal.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        let err = ApiError::from(ContactRejection::MissingField("email"));
        assert_eq!(err.to_string(), "Field 'email' is required");

        let err = ApiError::from(ContactError::Processing(DashboardError::ValidationError {
            message: "field 'name' must be a string, got number".to_string(),
        }));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.to_string(),
            "Sorry, there was an error processing your message."
        );
    }
}
