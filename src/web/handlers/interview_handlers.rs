// src/web/handlers/interview_handlers.rs
use rocket::response::status::Created;
use rocket::serde::json::Json;
use rocket::State;
use tracing::info;

use crate::database::DatabaseConfig;
use crate::question_bank::INTERVIEW_SCRIPT;
use crate::scoring::draw_scorecard;
use crate::store::{
    Assessment, AssessmentRepository, CandidateRepository, Interview, InterviewRepository,
    JobRepository, Question, QuestionRepository,
};
use crate::web::error::ApiError;
use crate::web::types::{
    CreateInterviewRequest, InterviewCompletedResponse, InterviewCreatedResponse,
};

pub async fn list_interviews_handler(
    db: &State<DatabaseConfig>,
) -> Result<Json<Vec<Interview>>, ApiError> {
    let pool = db.pool()?;
    let interviews = InterviewRepository::new(pool).list().await?;

    Ok(Json(interviews))
}

pub async fn get_interview_handler(
    id: &str,
    db: &State<DatabaseConfig>,
) -> Result<Json<Interview>, ApiError> {
    let pool = db.pool()?;
    let interview = InterviewRepository::new(pool)
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Interview not found"))?;

    Ok(Json(interview))
}

pub async fn create_interview_handler(
    request: Json<CreateInterviewRequest>,
    db: &State<DatabaseConfig>,
) -> Result<Created<Json<InterviewCreatedResponse>>, ApiError> {
    let job_id = request.job_id.as_deref().filter(|j| !j.is_empty());
    let candidate_id = request.candidate_id.as_deref().filter(|c| !c.is_empty());

    let (job_id, candidate_id) = match (job_id, candidate_id) {
        (Some(job_id), Some(candidate_id)) => (job_id, candidate_id),
        _ => return Err(ApiError::validation("Job ID and Candidate ID are required")),
    };

    let pool = db.pool()?;

    // Both references must exist before anything is written, so a failed
    // creation leaves no interview and no question rows behind.
    if JobRepository::new(pool).get_by_id(job_id).await?.is_none() {
        return Err(ApiError::not_found("Job not found"));
    }
    if CandidateRepository::new(pool)
        .get_by_id(candidate_id)
        .await?
        .is_none()
    {
        return Err(ApiError::not_found("Candidate not found"));
    }

    let interview = InterviewRepository::new(pool)
        .create(job_id, candidate_id)
        .await?;
    let questions = QuestionRepository::new(pool)
        .create_batch(&interview.id, &INTERVIEW_SCRIPT)
        .await?;

    let location = format!("/interviews/{}", interview.id);
    Ok(Created::new(location).body(Json(InterviewCreatedResponse {
        interview,
        questions,
    })))
}

pub async fn list_interview_questions_handler(
    id: &str,
    db: &State<DatabaseConfig>,
) -> Result<Json<Vec<Question>>, ApiError> {
    let pool = db.pool()?;
    let questions = QuestionRepository::new(pool).list_for_interview(id).await?;

    if questions.is_empty() {
        return Err(ApiError::not_found("No questions found for this interview"));
    }

    Ok(Json(questions))
}

pub async fn complete_interview_handler(
    id: &str,
    db: &State<DatabaseConfig>,
) -> Result<Json<InterviewCompletedResponse>, ApiError> {
    let pool = db.pool()?;

    let interview = InterviewRepository::new(pool)
        .complete(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Interview not found"))?;

    // The freshly drawn scorecard is discarded when an assessment already
    // exists; completion stays idempotent either way.
    let scores = draw_scorecard();
    let assessment = AssessmentRepository::new(pool)
        .create_if_absent(id, &scores)
        .await?;

    info!("Interview {} completed", id);

    Ok(Json(InterviewCompletedResponse {
        interview,
        assessment,
    }))
}

pub async fn get_interview_assessment_handler(
    id: &str,
    db: &State<DatabaseConfig>,
) -> Result<Json<Assessment>, ApiError> {
    let pool = db.pool()?;
    let assessment = AssessmentRepository::new(pool)
        .get_for_interview(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Assessment not found for this interview"))?;

    Ok(Json(assessment))
}
