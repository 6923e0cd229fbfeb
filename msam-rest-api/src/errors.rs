//! REST API error type and its HTTP mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use msam_interfaces::StorageError;
use thiserror::Error;

use crate::models::ExceptionBody;

/// Errors that escape a handler instead of being folded into a channel response
#[derive(Error, Debug)]
pub enum RestError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

impl RestError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let body = ExceptionBody {
            exception: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_maps_to_500() {
        let err = RestError::from(StorageError::Connection {
            message: "refused".to_string(),
        });

        assert_eq!(err.to_string(), "Connection error: refused");
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
