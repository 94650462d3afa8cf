// src/web/handlers/system_handlers.rs
use rocket::serde::json::Json;

use crate::web::types::HealthResponse;

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        message: "Backend API is running".to_string(),
    })
}
