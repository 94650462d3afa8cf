// src/web/mod.rs
pub mod error;
pub mod handlers;
pub mod types;

pub use types::ServerConfig;

use crate::auth::EmployerAuth;
use crate::database::DatabaseConfig;
use crate::store::{
    Application, Assessment, Candidate, Interview, Job, Question, Response as StoredResponse,
};
use anyhow::Result;
use error::{ApiError, MessageBody};
use rocket::data::{Limits, ToByteUnit};
use rocket::fairing::{Fairing, Info, Kind};
use rocket::figment::Figment;
use rocket::form::Form;
use rocket::fs::FileServer;
use rocket::http::{Header, Status};
use rocket::response::status::Created;
use rocket::serde::json::Json;
use rocket::{catch, catchers, delete, get, options, patch, post, routes};
use rocket::{Build, Request, Response, Rocket, State};
use std::path::{Path, PathBuf};
use tracing::info;
use types::*;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, PATCH, DELETE, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
        response.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
    }
}

#[get("/health")]
pub async fn health() -> Json<HealthResponse> {
    handlers::system_handlers::health_handler().await
}

#[get("/candidates")]
pub async fn list_candidates(
    db: &State<DatabaseConfig>,
) -> Result<Json<Vec<Candidate>>, ApiError> {
    handlers::candidate_handlers::list_candidates_handler(db).await
}

#[get("/candidates/<id>")]
pub async fn get_candidate(
    id: &str,
    db: &State<DatabaseConfig>,
) -> Result<Json<Candidate>, ApiError> {
    handlers::candidate_handlers::get_candidate_handler(id, db).await
}

#[post("/candidates", data = "<request>")]
pub async fn create_candidate(
    request: Json<CreateCandidateRequest>,
    db: &State<DatabaseConfig>,
) -> Result<Created<Json<Candidate>>, ApiError> {
    handlers::candidate_handlers::create_candidate_handler(request, db).await
}

#[post("/candidates/<id>/resume", data = "<upload>")]
pub async fn upload_resume(
    id: &str,
    upload: Form<ResumeUploadForm<'_>>,
    config: &State<ServerConfig>,
    db: &State<DatabaseConfig>,
) -> Result<Json<ResumeUploadResponse>, ApiError> {
    handlers::candidate_handlers::upload_resume_handler(id, upload, config, db).await
}

#[get("/jobs")]
pub async fn list_jobs(db: &State<DatabaseConfig>) -> Result<Json<Vec<Job>>, ApiError> {
    handlers::job_handlers::list_jobs_handler(db).await
}

#[get("/jobs/<id>")]
pub async fn get_job(id: &str, db: &State<DatabaseConfig>) -> Result<Json<Job>, ApiError> {
    handlers::job_handlers::get_job_handler(id, db).await
}

#[post("/jobs", data = "<request>")]
pub async fn create_job(
    request: Json<CreateJobRequest>,
    db: &State<DatabaseConfig>,
) -> Result<Created<Json<Job>>, ApiError> {
    handlers::job_handlers::create_job_handler(request, db).await
}

#[delete("/jobs/<id>")]
pub async fn delete_job(
    id: &str,
    auth: EmployerAuth,
    db: &State<DatabaseConfig>,
) -> Result<Json<MessageResponse>, ApiError> {
    handlers::job_handlers::delete_job_handler(id, auth, db).await
}

#[get("/interviews")]
pub async fn list_interviews(
    db: &State<DatabaseConfig>,
) -> Result<Json<Vec<Interview>>, ApiError> {
    handlers::interview_handlers::list_interviews_handler(db).await
}

#[get("/interviews/<id>")]
pub async fn get_interview(
    id: &str,
    db: &State<DatabaseConfig>,
) -> Result<Json<Interview>, ApiError> {
    handlers::interview_handlers::get_interview_handler(id, db).await
}

#[post("/interviews", data = "<request>")]
pub async fn create_interview(
    request: Json<CreateInterviewRequest>,
    db: &State<DatabaseConfig>,
) -> Result<Created<Json<InterviewCreatedResponse>>, ApiError> {
    handlers::interview_handlers::create_interview_handler(request, db).await
}

#[get("/interviews/<id>/questions")]
pub async fn list_interview_questions(
    id: &str,
    db: &State<DatabaseConfig>,
) -> Result<Json<Vec<Question>>, ApiError> {
    handlers::interview_handlers::list_interview_questions_handler(id, db).await
}

#[post("/interviews/<id>/complete")]
pub async fn complete_interview(
    id: &str,
    db: &State<DatabaseConfig>,
) -> Result<Json<InterviewCompletedResponse>, ApiError> {
    handlers::interview_handlers::complete_interview_handler(id, db).await
}

#[get("/interviews/<id>/assessment")]
pub async fn get_interview_assessment(
    id: &str,
    db: &State<DatabaseConfig>,
) -> Result<Json<Assessment>, ApiError> {
    handlers::interview_handlers::get_interview_assessment_handler(id, db).await
}

#[post("/responses/<question_id>", data = "<upload>")]
pub async fn record_response(
    question_id: &str,
    upload: Form<AudioUploadForm<'_>>,
    config: &State<ServerConfig>,
    db: &State<DatabaseConfig>,
) -> Result<Json<ResponseRecordedResponse>, ApiError> {
    handlers::response_handlers::record_response_handler(question_id, upload, config, db).await
}

#[get("/questions/<question_id>/responses")]
pub async fn list_question_responses(
    question_id: &str,
    db: &State<DatabaseConfig>,
) -> Result<Json<Vec<StoredResponse>>, ApiError> {
    handlers::response_handlers::list_question_responses_handler(question_id, db).await
}

#[get("/applications?<page>&<limit>&<status>&<job_id>&<sort_by>")]
pub async fn list_applications(
    page: Option<i64>,
    limit: Option<i64>,
    status: Option<&str>,
    job_id: Option<&str>,
    sort_by: Option<&str>,
    db: &State<DatabaseConfig>,
) -> Result<Json<ApplicationPageResponse>, ApiError> {
    handlers::application_handlers::list_applications_handler(
        page, limit, status, job_id, sort_by, db,
    )
    .await
}

#[get("/applications/<id>")]
pub async fn get_application(
    id: &str,
    db: &State<DatabaseConfig>,
) -> Result<Json<Application>, ApiError> {
    handlers::application_handlers::get_application_handler(id, db).await
}

#[post("/applications", data = "<request>")]
pub async fn create_application(
    request: Json<CreateApplicationRequest>,
    db: &State<DatabaseConfig>,
) -> Result<Created<Json<Application>>, ApiError> {
    handlers::application_handlers::create_application_handler(request, db).await
}

#[patch("/applications/<id>/status", data = "<request>")]
pub async fn update_application_status(
    id: &str,
    request: Json<UpdateApplicationStatusRequest>,
    auth: EmployerAuth,
    db: &State<DatabaseConfig>,
) -> Result<Json<StatusUpdatedResponse>, ApiError> {
    handlers::application_handlers::update_application_status_handler(id, request, auth, db).await
}

#[options("/<_..>")]
pub async fn all_options() -> Status {
    Status::Ok
}

// Error catchers

#[catch(400)]
pub fn bad_request() -> Json<MessageBody> {
    Json(MessageBody {
        message: "Invalid request".to_string(),
    })
}

#[catch(401)]
pub fn unauthorized() -> Json<MessageBody> {
    Json(MessageBody {
        message: "Authentication required".to_string(),
    })
}

#[catch(403)]
pub fn forbidden() -> Json<MessageBody> {
    Json(MessageBody {
        message: "Not authorized".to_string(),
    })
}

#[catch(404)]
pub fn not_found() -> Json<MessageBody> {
    Json(MessageBody {
        message: "Resource not found".to_string(),
    })
}

#[catch(422)]
pub fn unprocessable() -> Json<MessageBody> {
    Json(MessageBody {
        message: "Invalid request body".to_string(),
    })
}

#[catch(500)]
pub fn internal_error() -> Json<MessageBody> {
    Json(MessageBody {
        message: "Server error".to_string(),
    })
}

/// Base Rocket configuration: raised upload limits and a temp dir on the
/// same filesystem as the uploads directory so persisting is a rename.
pub fn base_figment(uploads_dir: &Path) -> Figment {
    let limits = Limits::default()
        .limit("file", 10.mebibytes())
        .limit("data-form", 12.mebibytes());

    rocket::Config::figment()
        .merge(("limits", limits))
        .merge(("temp_dir", uploads_dir))
}

/// Assemble the Rocket instance. The database pool must already be
/// initialized and migrated.
pub fn build_rocket(
    figment: Figment,
    server_config: ServerConfig,
    db_config: DatabaseConfig,
) -> Rocket<Build> {
    std::fs::create_dir_all(&server_config.uploads_dir).ok();
    let uploads_dir = server_config.uploads_dir.clone();

    rocket::custom(figment)
        .attach(Cors)
        .manage(server_config)
        .manage(db_config)
        .register(
            "/",
            catchers![
                bad_request,
                unauthorized,
                forbidden,
                not_found,
                unprocessable,
                internal_error
            ],
        )
        .mount(
            "/",
            routes![
                health,
                list_candidates,
                get_candidate,
                create_candidate,
                upload_resume,
                list_jobs,
                get_job,
                create_job,
                delete_job,
                list_interviews,
                get_interview,
                create_interview,
                list_interview_questions,
                complete_interview,
                get_interview_assessment,
                record_response,
                list_question_responses,
                list_applications,
                get_application,
                create_application,
                update_application_status,
                all_options,
            ],
        )
        .mount("/uploads", FileServer::from(uploads_dir))
}

// Main server start function
pub async fn start_web_server(
    port: u16,
    database_path: PathBuf,
    uploads_dir: PathBuf,
    employer_api_key: String,
) -> Result<()> {
    let mut db_config = DatabaseConfig::new(database_path);
    db_config.init_pool().await?;
    db_config.migrate().await?;

    crate::utils::ensure_dir_exists(&uploads_dir).await?;

    let server_config = ServerConfig {
        uploads_dir: uploads_dir.clone(),
        employer_api_key,
    };

    info!("Starting Voxhire API server");
    info!("Database: {}", db_config.database_path.display());
    info!("Uploads: {}", uploads_dir.display());
    info!("Server: http://0.0.0.0:{}", port);

    let figment = base_figment(&uploads_dir)
        .merge(("port", port))
        .merge(("address", "0.0.0.0"));

    build_rocket(figment, server_config, db_config)
        .launch()
        .await?;

    Ok(())
}
