// src/store/responses.rs
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Response {
    pub id: String,
    pub question_id: String,
    pub audio_url: String,
    pub transcription: String,
    pub created_at: DateTime<Utc>,
}

pub struct ResponseRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ResponseRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Responses recorded against one question, oldest first.
    /// A question can accumulate several submissions.
    pub async fn list_for_question(&self, question_id: &str) -> Result<Vec<Response>> {
        let responses = sqlx::query_as::<_, Response>(
            r#"
            SELECT id, question_id, audio_url, transcription, created_at
            FROM responses
            WHERE question_id = ?
            ORDER BY created_at ASC
            "#,
        )
        .bind(question_id)
        .fetch_all(self.pool)
        .await?;

        Ok(responses)
    }

    pub async fn create(
        &self,
        question_id: &str,
        audio_url: &str,
        transcription: &str,
    ) -> Result<Response> {
        let now = Utc::now();
        let id = Uuid::new_v4().to_string();

        sqlx::query(
            r#"
            INSERT INTO responses (id, question_id, audio_url, transcription, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(question_id)
        .bind(audio_url)
        .bind(transcription)
        .bind(now)
        .execute(self.pool)
        .await?;

        let response = Response {
            id,
            question_id: question_id.to_string(),
            audio_url: audio_url.to_string(),
            transcription: transcription.to_string(),
            created_at: now,
        };

        info!(
            "Recorded response {} for question {}",
            response.id, question_id
        );
        Ok(response)
    }
}
