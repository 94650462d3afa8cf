// src/store/questions.rs
use anyhow::Result;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::question_bank::QuestionTemplate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Technical,
    Behavioral,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    pub id: String,
    pub interview_id: String,
    pub text: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub skill_assessed: String,
    pub order_index: i64,
}

pub struct QuestionRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> QuestionRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Question>> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, interview_id, text, type, skill_assessed, order_index
            FROM questions
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(question)
    }

    /// Questions of one interview in answer order
    pub async fn list_for_interview(&self, interview_id: &str) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, interview_id, text, type, skill_assessed, order_index
            FROM questions
            WHERE interview_id = ?
            ORDER BY order_index ASC
            "#,
        )
        .bind(interview_id)
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    /// Insert the interview script for a freshly created interview,
    /// order_index following the template position.
    pub async fn create_batch(
        &self,
        interview_id: &str,
        templates: &[QuestionTemplate],
    ) -> Result<Vec<Question>> {
        let mut questions = Vec::with_capacity(templates.len());

        for (index, template) in templates.iter().enumerate() {
            let question = Question {
                id: Uuid::new_v4().to_string(),
                interview_id: interview_id.to_string(),
                text: template.text.to_string(),
                kind: template.kind,
                skill_assessed: template.skill_assessed.to_string(),
                order_index: index as i64,
            };

            sqlx::query(
                r#"
                INSERT INTO questions (id, interview_id, text, type, skill_assessed, order_index)
                VALUES (?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&question.id)
            .bind(&question.interview_id)
            .bind(&question.text)
            .bind(question.kind)
            .bind(&question.skill_assessed)
            .bind(question.order_index)
            .execute(self.pool)
            .await?;

            questions.push(question);
        }

        Ok(questions)
    }
}
