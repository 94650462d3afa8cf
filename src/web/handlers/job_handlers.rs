// src/web/handlers/job_handlers.rs
use rocket::response::status::Created;
use rocket::serde::json::Json;
use rocket::State;

use crate::auth::EmployerAuth;
use crate::database::DatabaseConfig;
use crate::store::{Job, JobRepository, NewJob};
use crate::web::error::ApiError;
use crate::web::types::{CreateJobRequest, MessageResponse};

pub async fn list_jobs_handler(db: &State<DatabaseConfig>) -> Result<Json<Vec<Job>>, ApiError> {
    let pool = db.pool()?;
    let jobs = JobRepository::new(pool).list().await?;

    Ok(Json(jobs))
}

pub async fn get_job_handler(
    id: &str,
    db: &State<DatabaseConfig>,
) -> Result<Json<Job>, ApiError> {
    let pool = db.pool()?;
    let job = JobRepository::new(pool)
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Job not found"))?;

    Ok(Json(job))
}

pub async fn create_job_handler(
    request: Json<CreateJobRequest>,
    db: &State<DatabaseConfig>,
) -> Result<Created<Json<Job>>, ApiError> {
    let request = request.into_inner();
    let title = request.title.filter(|t| !t.is_empty());
    let description = request.description.filter(|d| !d.is_empty());

    let (title, description) = match (title, description) {
        (Some(title), Some(description)) => (title, description),
        _ => return Err(ApiError::validation("Title and description are required")),
    };

    let pool = db.pool()?;
    let job = JobRepository::new(pool)
        .create(NewJob {
            title,
            description,
            company_id: request.company_id,
            department: request.department,
            required_skills: request.required_skills.unwrap_or_default(),
        })
        .await?;

    let location = format!("/jobs/{}", job.id);
    Ok(Created::new(location).body(Json(job)))
}

pub async fn delete_job_handler(
    id: &str,
    _auth: EmployerAuth,
    db: &State<DatabaseConfig>,
) -> Result<Json<MessageResponse>, ApiError> {
    let pool = db.pool()?;
    let deleted = JobRepository::new(pool).delete(id).await?;

    if !deleted {
        return Err(ApiError::not_found("Job not found"));
    }

    Ok(Json(MessageResponse {
        message: "Job deleted successfully".to_string(),
    }))
}
