//! Response bodies of the channel endpoints

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// `{"message": "..."}` acknowledgement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Acknowledgement of a successful write
    pub fn saved() -> Self {
        Self::new("saved")
    }

    /// Acknowledgement of a completed delete
    pub fn done() -> Self {
        Self::new("done")
    }
}

/// `{"exception": "..."}` error payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionBody {
    pub exception: String,
}

/// Result of a channel operation as it goes over the wire.
///
/// Serialized untagged: a success is the bare payload (an array or a
/// message object), a failure is an [`ExceptionBody`]. Both are sent with
/// `200 OK`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChannelResponse<T> {
    Ok(T),
    Err(ExceptionBody),
}

impl<T> ChannelResponse<T> {
    pub fn exception(message: impl ToString) -> Self {
        ChannelResponse::Err(ExceptionBody {
            exception: message.to_string(),
        })
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, ChannelResponse::Ok(_))
    }

    /// The error message, if this is an error payload
    pub fn exception_message(&self) -> Option<&str> {
        match self {
            ChannelResponse::Ok(_) => None,
            ChannelResponse::Err(body) => Some(&body.exception),
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for ChannelResponse<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(payload) => ChannelResponse::Ok(payload),
            Err(err) => ChannelResponse::exception(err),
        }
    }
}

impl<T: Serialize> IntoResponse for ChannelResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
