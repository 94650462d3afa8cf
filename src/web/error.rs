// src/web/error.rs
use rocket::http::Status;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use rocket::Request;
use serde::Serialize;
use tracing::error;

#[derive(Serialize)]
pub struct MessageBody {
    pub message: String,
}

/// The service's flat error taxonomy, rendered as `{"message": ...}` with
/// the matching status code. Store and IO failures collapse into
/// `Internal`; their details are logged, not returned to the client.
#[derive(Debug)]
pub enum ApiError {
    Validation(String),
    NotFound(String),
    Unauthorized(String),
    Forbidden(String),
    Internal(anyhow::Error),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        Self::Internal(err.into())
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        let (status, message) = match self {
            ApiError::Validation(message) => (Status::BadRequest, message),
            ApiError::NotFound(message) => (Status::NotFound, message),
            ApiError::Unauthorized(message) => (Status::Unauthorized, message),
            ApiError::Forbidden(message) => (Status::Forbidden, message),
            ApiError::Internal(err) => {
                error!("Internal error handling {}: {:#}", req.uri(), err);
                (Status::InternalServerError, "Server error".to_string())
            }
        };

        let body = Json(MessageBody { message });
        let mut response = body.respond_to(req)?;
        response.set_status(status);
        Ok(response)
    }
}
