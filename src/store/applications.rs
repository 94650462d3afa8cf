// src/store/applications.rs
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

use crate::matching::SkillMatch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Reviewing,
    Interviewing,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    /// Employer-facing status strings; transitions are free-form, so any
    /// recognized value is acceptable from any current state.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "reviewing" => Some(Self::Reviewing),
            "interviewing" => Some(Self::Interviewing),
            "accepted" => Some(Self::Accepted),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Reviewing => "reviewing",
            Self::Interviewing => "interviewing",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Application {
    pub id: String,
    pub job_id: String,
    pub candidate_id: String,
    pub status: ApplicationStatus,
    pub match_score: Option<i64>,
    pub skills_matched: Json<Vec<String>>,
    pub skills_missing: Json<Vec<String>>,
    pub cover_letter: Option<String>,
    pub resume_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default, Clone)]
pub struct ApplicationFilter {
    pub status: Option<ApplicationStatus>,
    pub job_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationSort {
    Newest,
    Oldest,
    MatchHigh,
    MatchLow,
}

impl ApplicationSort {
    /// Unrecognized sort keys fall back to newest-first, matching the
    /// original listing behavior.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("oldest") => Self::Oldest,
            Some("match-high") => Self::MatchHigh,
            Some("match-low") => Self::MatchLow,
            _ => Self::Newest,
        }
    }

    fn order_clause(self) -> &'static str {
        match self {
            Self::Newest => " ORDER BY created_at DESC",
            Self::Oldest => " ORDER BY created_at ASC",
            Self::MatchHigh => " ORDER BY match_score DESC",
            Self::MatchLow => " ORDER BY match_score ASC",
        }
    }
}

const APPLICATION_COLUMNS: &str = "id, job_id, candidate_id, status, match_score, \
     skills_matched, skills_missing, cover_letter, resume_url, created_at";

pub struct ApplicationRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ApplicationRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Application>> {
        let sql = format!(
            "SELECT {} FROM applications WHERE id = ?",
            APPLICATION_COLUMNS
        );
        let application = sqlx::query_as::<_, Application>(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(application)
    }

    pub async fn exists_for(&self, job_id: &str, candidate_id: &str) -> Result<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM applications WHERE job_id = ? AND candidate_id = ?",
        )
        .bind(job_id)
        .bind(candidate_id)
        .fetch_one(self.pool)
        .await?;

        Ok(count > 0)
    }

    /// One page of applications under the given filter and sort order
    pub async fn list_page(
        &self,
        filter: &ApplicationFilter,
        sort: ApplicationSort,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Application>> {
        let mut sql = format!(
            "SELECT {} FROM applications WHERE 1 = 1",
            APPLICATION_COLUMNS
        );
        if filter.status.is_some() {
            sql.push_str(" AND status = ?");
        }
        if filter.job_id.is_some() {
            sql.push_str(" AND job_id = ?");
        }
        sql.push_str(sort.order_clause());
        sql.push_str(" LIMIT ? OFFSET ?");

        let mut query = sqlx::query_as::<_, Application>(&sql);
        if let Some(status) = filter.status {
            query = query.bind(status);
        }
        if let Some(job_id) = &filter.job_id {
            query = query.bind(job_id);
        }
        let applications = query
            .bind(limit)
            .bind(offset)
            .fetch_all(self.pool)
            .await?;

        Ok(applications)
    }

    /// Total row count for the same filter, used for the pagination sidecar
    pub async fn count(&self, filter: &ApplicationFilter) -> Result<i64> {
        let mut sql = String::from("SELECT COUNT(*) FROM applications WHERE 1 = 1");
        if filter.status.is_some() {
            sql.push_str(" AND status = ?");
        }
        if filter.job_id.is_some() {
            sql.push_str(" AND job_id = ?");
        }

        let mut query = sqlx::query_scalar::<_, i64>(&sql);
        if let Some(status) = filter.status {
            query = query.bind(status);
        }
        if let Some(job_id) = &filter.job_id {
            query = query.bind(job_id);
        }

        Ok(query.fetch_one(self.pool).await?)
    }

    pub async fn create(
        &self,
        job_id: &str,
        candidate_id: &str,
        cover_letter: Option<&str>,
        resume_url: Option<&str>,
        skill_match: SkillMatch,
    ) -> Result<Application> {
        let now = Utc::now();
        let id = Uuid::new_v4().to_string();
        let skills_matched = Json(skill_match.matched);
        let skills_missing = Json(skill_match.missing);

        sqlx::query(
            r#"
            INSERT INTO applications (id, job_id, candidate_id, status, match_score,
                                      skills_matched, skills_missing, cover_letter, resume_url, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(job_id)
        .bind(candidate_id)
        .bind(ApplicationStatus::Pending)
        .bind(skill_match.score)
        .bind(&skills_matched)
        .bind(&skills_missing)
        .bind(cover_letter)
        .bind(resume_url)
        .bind(now)
        .execute(self.pool)
        .await?;

        let application = Application {
            id,
            job_id: job_id.to_string(),
            candidate_id: candidate_id.to_string(),
            status: ApplicationStatus::Pending,
            match_score: skill_match.score,
            skills_matched,
            skills_missing,
            cover_letter: cover_letter.map(|c| c.to_string()),
            resume_url: resume_url.map(|r| r.to_string()),
            created_at: now,
        };

        info!(
            "Created application {} (job {}, candidate {})",
            application.id, job_id, candidate_id
        );
        Ok(application)
    }

    /// Returns the updated application, or None if the id is unknown
    pub async fn update_status(
        &self,
        id: &str,
        status: ApplicationStatus,
    ) -> Result<Option<Application>> {
        let result = sqlx::query("UPDATE applications SET status = ? WHERE id = ?")
            .bind(status)
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        info!("Application {} status set to {:?}", id, status);
        self.get_by_id(id).await
    }
}
