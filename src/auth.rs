// src/auth.rs
//! Employer authentication for the review endpoints.
//!
//! Session auth lives outside this service; employer-only operations
//! (application status changes, job deletion) are gated by a shared API
//! key instead. No header -> 401, wrong key -> 403.

use crate::web::types::ServerConfig;
use rocket::http::Status;
use rocket::request::{FromRequest, Outcome};
use rocket::{Request, State};
use tracing::warn;

#[derive(Debug)]
pub enum AuthError {
    MissingKey,
    InvalidKey,
    MissingConfig,
}

/// Request guard proving the caller holds the employer API key.
/// Accepts `Authorization: Bearer <key>` or `X-Api-Key: <key>`.
pub struct EmployerAuth;

impl EmployerAuth {
    fn presented_key<'r>(req: &'r Request<'_>) -> Option<&'r str> {
        if let Some(header) = req.headers().get_one("Authorization") {
            return header.strip_prefix("Bearer ");
        }
        req.headers().get_one("X-Api-Key")
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for EmployerAuth {
    type Error = AuthError;

    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let config = match req.guard::<&State<ServerConfig>>().await {
            Outcome::Success(config) => config,
            Outcome::Error((status, _)) => {
                return Outcome::Error((status, AuthError::MissingConfig))
            }
            Outcome::Forward(f) => return Outcome::Forward(f),
        };

        match Self::presented_key(req) {
            None => {
                warn!("Employer endpoint called without credentials");
                Outcome::Error((Status::Unauthorized, AuthError::MissingKey))
            }
            Some(key) if key == config.employer_api_key => Outcome::Success(EmployerAuth),
            Some(_) => {
                warn!("Employer endpoint called with an invalid key");
                Outcome::Error((Status::Forbidden, AuthError::InvalidKey))
            }
        }
    }
}
