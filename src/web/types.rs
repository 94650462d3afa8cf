// src/web/types.rs
use rocket::form::FromForm;
use rocket::fs::TempFile;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::store::{Application, Assessment, Candidate, Interview, Question, Response};

/// Shared server state managed by Rocket
pub struct ServerConfig {
    pub uploads_dir: PathBuf,
    pub employer_api_key: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub message: String,
}

// Create payloads use Option fields so that a missing required field is a
// 400 with a field-specific message, not a body-level deserialization error.

#[derive(Deserialize)]
pub struct CreateCandidateRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateJobRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub company_id: Option<String>,
    pub department: Option<String>,
    pub required_skills: Option<Vec<String>>,
}

#[derive(Deserialize)]
pub struct CreateInterviewRequest {
    pub job_id: Option<String>,
    pub candidate_id: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateApplicationRequest {
    pub job_id: Option<String>,
    pub candidate_id: Option<String>,
    pub cover_letter: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateApplicationStatusRequest {
    pub status: Option<String>,
}

#[derive(FromForm)]
pub struct ResumeUploadForm<'f> {
    pub resume: Option<TempFile<'f>>,
}

#[derive(FromForm)]
pub struct AudioUploadForm<'f> {
    pub audio: Option<TempFile<'f>>,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct ResumeUploadResponse {
    pub message: String,
    pub candidate: Candidate,
}

#[derive(Serialize)]
pub struct InterviewCreatedResponse {
    pub interview: Interview,
    pub questions: Vec<Question>,
}

#[derive(Serialize)]
pub struct InterviewCompletedResponse {
    pub interview: Interview,
    pub assessment: Assessment,
}

#[derive(Serialize)]
pub struct ResponseRecordedResponse {
    pub message: String,
    pub response: Response,
}

#[derive(Serialize)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total_items: i64,
    pub total_pages: i64,
}

#[derive(Serialize)]
pub struct ApplicationPageResponse {
    pub applications: Vec<Application>,
    pub pagination: Pagination,
}

#[derive(Serialize)]
pub struct StatusUpdatedResponse {
    pub message: String,
    pub application_id: String,
    pub status: String,
}
