// src/store/candidates.rs
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

/// Structured data attached to a candidate after a resume upload.
/// The content is a fixed fixture; no real parsing happens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeProfile {
    pub skills: Vec<String>,
    pub education: String,
    pub experience: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub resume_url: Option<String>,
    pub resume_parsed: Option<Json<ResumeProfile>>,
    pub created_at: DateTime<Utc>,
}

pub struct CandidateRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CandidateRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Candidate>> {
        let candidates = sqlx::query_as::<_, Candidate>(
            r#"
            SELECT id, name, email, phone, resume_url, resume_parsed, created_at
            FROM candidates
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(candidates)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Candidate>> {
        let candidate = sqlx::query_as::<_, Candidate>(
            r#"
            SELECT id, name, email, phone, resume_url, resume_parsed, created_at
            FROM candidates
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(candidate)
    }

    pub async fn create(
        &self,
        name: &str,
        email: &str,
        phone: Option<&str>,
    ) -> Result<Candidate> {
        let now = Utc::now();
        let id = Uuid::new_v4().to_string();

        sqlx::query(
            r#"
            INSERT INTO candidates (id, name, email, phone, resume_url, resume_parsed, created_at)
            VALUES (?, ?, ?, ?, NULL, NULL, ?)
            "#,
        )
        .bind(&id)
        .bind(name)
        .bind(email)
        .bind(phone)
        .bind(now)
        .execute(self.pool)
        .await?;

        let candidate = Candidate {
            id,
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.map(|p| p.to_string()),
            resume_url: None,
            resume_parsed: None,
            created_at: now,
        };

        info!("Created candidate {} ({})", candidate.id, email);
        Ok(candidate)
    }

    /// Attach an uploaded resume and its parsed profile to a candidate.
    /// Returns the updated candidate, or None if the id is unknown.
    pub async fn attach_resume(
        &self,
        id: &str,
        resume_url: &str,
        profile: &ResumeProfile,
    ) -> Result<Option<Candidate>> {
        let result = sqlx::query(
            r#"
            UPDATE candidates
            SET resume_url = ?, resume_parsed = ?
            WHERE id = ?
            "#,
        )
        .bind(resume_url)
        .bind(Json(profile))
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_by_id(id).await
    }
}
