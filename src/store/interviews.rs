// src/store/interviews.rs
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InterviewStatus {
    Pending,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Interview {
    pub id: String,
    pub job_id: String,
    pub candidate_id: String,
    pub status: InterviewStatus,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

pub struct InterviewRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> InterviewRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Interview>> {
        let interviews = sqlx::query_as::<_, Interview>(
            r#"
            SELECT id, job_id, candidate_id, status, created_at, completed_at
            FROM interviews
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(interviews)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Interview>> {
        let interview = sqlx::query_as::<_, Interview>(
            r#"
            SELECT id, job_id, candidate_id, status, created_at, completed_at
            FROM interviews
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(interview)
    }

    pub async fn create(&self, job_id: &str, candidate_id: &str) -> Result<Interview> {
        let now = Utc::now();
        let id = Uuid::new_v4().to_string();

        sqlx::query(
            r#"
            INSERT INTO interviews (id, job_id, candidate_id, status, created_at, completed_at)
            VALUES (?, ?, ?, ?, ?, NULL)
            "#,
        )
        .bind(&id)
        .bind(job_id)
        .bind(candidate_id)
        .bind(InterviewStatus::Pending)
        .bind(now)
        .execute(self.pool)
        .await?;

        let interview = Interview {
            id,
            job_id: job_id.to_string(),
            candidate_id: candidate_id.to_string(),
            status: InterviewStatus::Pending,
            created_at: now,
            completed_at: None,
        };

        info!(
            "Created interview {} (job {}, candidate {})",
            interview.id, job_id, candidate_id
        );
        Ok(interview)
    }

    /// Mark an interview completed. Repeating the call leaves the original
    /// completion timestamp in place, so the transition is idempotent.
    /// Returns None if the id is unknown.
    pub async fn complete(&self, id: &str) -> Result<Option<Interview>> {
        let result = sqlx::query(
            r#"
            UPDATE interviews
            SET status = ?, completed_at = COALESCE(completed_at, ?)
            WHERE id = ?
            "#,
        )
        .bind(InterviewStatus::Completed)
        .bind(Utc::now())
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        info!("Interview {} marked completed", id);
        self.get_by_id(id).await
    }
}
