// src/store/assessments.rs
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

use crate::scoring::Scorecard;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Assessment {
    pub id: String,
    pub interview_id: String,
    pub empathy_score: i64,
    pub collaboration_score: i64,
    pub confidence_score: i64,
    pub english_proficiency: i64,
    pub professionalism: i64,
    pub created_at: DateTime<Utc>,
}

pub struct AssessmentRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> AssessmentRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_for_interview(&self, interview_id: &str) -> Result<Option<Assessment>> {
        let assessment = sqlx::query_as::<_, Assessment>(
            r#"
            SELECT id, interview_id, empathy_score, collaboration_score, confidence_score,
                   english_proficiency, professionalism, created_at
            FROM assessments
            WHERE interview_id = ?
            "#,
        )
        .bind(interview_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(assessment)
    }

    /// Insert a scorecard for an interview unless one already exists, and
    /// return whichever row survives. Two concurrent completion calls both
    /// end up with the same assessment: the UNIQUE(interview_id) constraint
    /// makes the insert a no-op for the loser.
    pub async fn create_if_absent(
        &self,
        interview_id: &str,
        scores: &Scorecard,
    ) -> Result<Assessment> {
        let now = Utc::now();
        let id = Uuid::new_v4().to_string();

        let result = sqlx::query(
            r#"
            INSERT INTO assessments (id, interview_id, empathy_score, collaboration_score,
                                     confidence_score, english_proficiency, professionalism, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT (interview_id) DO NOTHING
            "#,
        )
        .bind(&id)
        .bind(interview_id)
        .bind(scores.empathy)
        .bind(scores.collaboration)
        .bind(scores.confidence)
        .bind(scores.english)
        .bind(scores.professionalism)
        .bind(now)
        .execute(self.pool)
        .await?;

        if result.rows_affected() > 0 {
            info!("Created assessment {} for interview {}", id, interview_id);
        }

        let assessment = self.get_for_interview(interview_id).await?.ok_or_else(|| {
            anyhow::anyhow!("Assessment missing after insert for interview {interview_id}")
        })?;

        Ok(assessment)
    }
}
