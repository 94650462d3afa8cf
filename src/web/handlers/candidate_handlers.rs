// src/web/handlers/candidate_handlers.rs
use rocket::form::Form;
use rocket::response::status::Created;
use rocket::serde::json::Json;
use rocket::State;
use tracing::info;

use crate::database::DatabaseConfig;
use crate::scoring::mock_resume_profile;
use crate::store::{Candidate, CandidateRepository};
use crate::web::error::ApiError;
use crate::web::handlers::upload::store_upload;
use crate::web::types::{
    CreateCandidateRequest, ResumeUploadForm, ResumeUploadResponse, ServerConfig,
};

pub async fn list_candidates_handler(
    db: &State<DatabaseConfig>,
) -> Result<Json<Vec<Candidate>>, ApiError> {
    let pool = db.pool()?;
    let candidates = CandidateRepository::new(pool).list().await?;

    Ok(Json(candidates))
}

pub async fn get_candidate_handler(
    id: &str,
    db: &State<DatabaseConfig>,
) -> Result<Json<Candidate>, ApiError> {
    let pool = db.pool()?;
    let candidate = CandidateRepository::new(pool)
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Candidate not found"))?;

    Ok(Json(candidate))
}

pub async fn create_candidate_handler(
    request: Json<CreateCandidateRequest>,
    db: &State<DatabaseConfig>,
) -> Result<Created<Json<Candidate>>, ApiError> {
    let name = request.name.as_deref().filter(|n| !n.is_empty());
    let email = request.email.as_deref().filter(|e| !e.is_empty());

    let (name, email) = match (name, email) {
        (Some(name), Some(email)) => (name, email),
        _ => return Err(ApiError::validation("Name and email are required")),
    };

    let pool = db.pool()?;
    let candidate = CandidateRepository::new(pool)
        .create(name, email, request.phone.as_deref())
        .await?;

    let location = format!("/candidates/{}", candidate.id);
    Ok(Created::new(location).body(Json(candidate)))
}

pub async fn upload_resume_handler(
    id: &str,
    mut upload: Form<ResumeUploadForm<'_>>,
    config: &State<ServerConfig>,
    db: &State<DatabaseConfig>,
) -> Result<Json<ResumeUploadResponse>, ApiError> {
    let pool = db.pool()?;
    let repository = CandidateRepository::new(pool);

    // Nothing may be written to disk for an unknown candidate
    if repository.get_by_id(id).await?.is_none() {
        return Err(ApiError::not_found("Candidate not found"));
    }

    let file = upload
        .resume
        .as_mut()
        .ok_or_else(|| ApiError::validation("No file uploaded"))?;

    let resume_url = store_upload(file, &config.uploads_dir).await?;
    let profile = mock_resume_profile();

    let candidate = repository
        .attach_resume(id, &resume_url, &profile)
        .await?
        .ok_or_else(|| ApiError::not_found("Candidate not found"))?;

    info!("Attached resume {} to candidate {}", resume_url, id);

    Ok(Json(ResumeUploadResponse {
        message: "Resume uploaded successfully".to_string(),
        candidate,
    }))
}
