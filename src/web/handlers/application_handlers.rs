// src/web/handlers/application_handlers.rs
use rocket::response::status::Created;
use rocket::serde::json::Json;
use rocket::State;

use crate::auth::EmployerAuth;
use crate::database::DatabaseConfig;
use crate::matching::match_skills;
use crate::store::{
    Application, ApplicationFilter, ApplicationRepository, ApplicationSort, ApplicationStatus,
    CandidateRepository, JobRepository,
};
use crate::web::error::ApiError;
use crate::web::types::{
    ApplicationPageResponse, CreateApplicationRequest, Pagination, StatusUpdatedResponse,
    UpdateApplicationStatusRequest,
};

const DEFAULT_PAGE_SIZE: i64 = 12;
const MAX_PAGE_SIZE: i64 = 100;

pub async fn list_applications_handler(
    page: Option<i64>,
    limit: Option<i64>,
    status: Option<&str>,
    job_id: Option<&str>,
    sort_by: Option<&str>,
    db: &State<DatabaseConfig>,
) -> Result<Json<ApplicationPageResponse>, ApiError> {
    let page = page.unwrap_or(1).max(1);
    let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
    let offset = (page - 1) * limit;

    let status = match status {
        Some(value) => Some(
            ApplicationStatus::parse(value).ok_or_else(|| ApiError::validation("Invalid status"))?,
        ),
        None => None,
    };
    let filter = ApplicationFilter {
        status,
        job_id: job_id.map(|j| j.to_string()),
    };
    let sort = ApplicationSort::parse(sort_by);

    let pool = db.pool()?;
    let repository = ApplicationRepository::new(pool);

    let total_items = repository.count(&filter).await?;
    let applications = repository.list_page(&filter, sort, limit, offset).await?;
    let total_pages = (total_items + limit - 1) / limit;

    Ok(Json(ApplicationPageResponse {
        applications,
        pagination: Pagination {
            page,
            limit,
            total_items,
            total_pages,
        },
    }))
}

pub async fn get_application_handler(
    id: &str,
    db: &State<DatabaseConfig>,
) -> Result<Json<Application>, ApiError> {
    let pool = db.pool()?;
    let application = ApplicationRepository::new(pool)
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Application not found"))?;

    Ok(Json(application))
}

pub async fn create_application_handler(
    request: Json<CreateApplicationRequest>,
    db: &State<DatabaseConfig>,
) -> Result<Created<Json<Application>>, ApiError> {
    let job_id = request.job_id.as_deref().filter(|j| !j.is_empty());
    let candidate_id = request.candidate_id.as_deref().filter(|c| !c.is_empty());

    let (job_id, candidate_id) = match (job_id, candidate_id) {
        (Some(job_id), Some(candidate_id)) => (job_id, candidate_id),
        _ => return Err(ApiError::validation("Job ID and Candidate ID are required")),
    };

    let pool = db.pool()?;

    let job = JobRepository::new(pool)
        .get_by_id(job_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Job not found"))?;
    let candidate = CandidateRepository::new(pool)
        .get_by_id(candidate_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Candidate not found"))?;

    let repository = ApplicationRepository::new(pool);
    if repository.exists_for(job_id, candidate_id).await? {
        return Err(ApiError::validation(
            "You have already applied for this job",
        ));
    }

    // Match the job's required skills against whatever the candidate's
    // parsed resume carries; a candidate without a resume gets no score.
    let candidate_skills = candidate
        .resume_parsed
        .as_ref()
        .map(|profile| profile.skills.clone())
        .unwrap_or_default();
    let skill_match = match_skills(&job.required_skills, &candidate_skills);

    let application = repository
        .create(
            job_id,
            candidate_id,
            request.cover_letter.as_deref(),
            candidate.resume_url.as_deref(),
            skill_match,
        )
        .await?;

    let location = format!("/applications/{}", application.id);
    Ok(Created::new(location).body(Json(application)))
}

pub async fn update_application_status_handler(
    id: &str,
    request: Json<UpdateApplicationStatusRequest>,
    _auth: EmployerAuth,
    db: &State<DatabaseConfig>,
) -> Result<Json<StatusUpdatedResponse>, ApiError> {
    let status = request
        .status
        .as_deref()
        .and_then(ApplicationStatus::parse)
        .ok_or_else(|| ApiError::validation("Invalid status"))?;

    let pool = db.pool()?;
    let application = ApplicationRepository::new(pool)
        .update_status(id, status)
        .await?
        .ok_or_else(|| ApiError::not_found("Application not found"))?;

    Ok(Json(StatusUpdatedResponse {
        message: "Application status updated successfully".to_string(),
        application_id: application.id,
        status: application.status.as_str().to_string(),
    }))
}
