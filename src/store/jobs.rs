// src/store/jobs.rs
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Job {
    pub id: String,
    pub company_id: String,
    pub title: String,
    pub description: String,
    pub department: Option<String>,
    pub required_skills: Json<Vec<String>>,
    pub created_at: DateTime<Utc>,
}

/// Fields accepted when posting a job. Missing company_id falls back to
/// the shared default company, missing skills to an empty list.
pub struct NewJob {
    pub title: String,
    pub description: String,
    pub company_id: Option<String>,
    pub department: Option<String>,
    pub required_skills: Vec<String>,
}

pub struct JobRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> JobRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Job>> {
        let jobs = sqlx::query_as::<_, Job>(
            r#"
            SELECT id, company_id, title, description, department, required_skills, created_at
            FROM jobs
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(jobs)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Job>> {
        let job = sqlx::query_as::<_, Job>(
            r#"
            SELECT id, company_id, title, description, department, required_skills, created_at
            FROM jobs
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(job)
    }

    pub async fn create(&self, new_job: NewJob) -> Result<Job> {
        let now = Utc::now();
        let id = Uuid::new_v4().to_string();
        let company_id = new_job
            .company_id
            .unwrap_or_else(|| "default".to_string());
        let required_skills = Json(new_job.required_skills);

        sqlx::query(
            r#"
            INSERT INTO jobs (id, company_id, title, description, department, required_skills, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&company_id)
        .bind(&new_job.title)
        .bind(&new_job.description)
        .bind(&new_job.department)
        .bind(&required_skills)
        .bind(now)
        .execute(self.pool)
        .await?;

        let job = Job {
            id,
            company_id,
            title: new_job.title,
            description: new_job.description,
            department: new_job.department,
            required_skills,
            created_at: now,
        };

        info!("Created job {} ({})", job.id, job.title);
        Ok(job)
    }

    pub async fn delete(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            info!("Deleted job {}", id);
        }

        Ok(deleted)
    }
}
