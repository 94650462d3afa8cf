// src/web/handlers/response_handlers.rs
use rocket::form::Form;
use rocket::serde::json::Json;
use rocket::State;

use crate::database::DatabaseConfig;
use crate::scoring::MOCK_TRANSCRIPTION;
use crate::store::{QuestionRepository, Response, ResponseRepository};
use crate::web::error::ApiError;
use crate::web::handlers::upload::store_upload;
use crate::web::types::{AudioUploadForm, ResponseRecordedResponse, ServerConfig};

pub async fn record_response_handler(
    question_id: &str,
    mut upload: Form<AudioUploadForm<'_>>,
    config: &State<ServerConfig>,
    db: &State<DatabaseConfig>,
) -> Result<Json<ResponseRecordedResponse>, ApiError> {
    let pool = db.pool()?;

    if QuestionRepository::new(pool)
        .get_by_id(question_id)
        .await?
        .is_none()
    {
        return Err(ApiError::not_found("Question not found"));
    }

    let file = upload
        .audio
        .as_mut()
        .ok_or_else(|| ApiError::validation("No audio file uploaded"))?;

    let audio_url = store_upload(file, &config.uploads_dir).await?;

    let response = ResponseRepository::new(pool)
        .create(question_id, &audio_url, MOCK_TRANSCRIPTION)
        .await?;

    Ok(Json(ResponseRecordedResponse {
        message: "Response recorded successfully".to_string(),
        response,
    }))
}

pub async fn list_question_responses_handler(
    question_id: &str,
    db: &State<DatabaseConfig>,
) -> Result<Json<Vec<Response>>, ApiError> {
    let pool = db.pool()?;

    if QuestionRepository::new(pool)
        .get_by_id(question_id)
        .await?
        .is_none()
    {
        return Err(ApiError::not_found("Question not found"));
    }

    let responses = ResponseRepository::new(pool)
        .list_for_question(question_id)
        .await?;

    Ok(Json(responses))
}
