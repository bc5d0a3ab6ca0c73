//! Repository for the `questions` table.
//!
//! Every listing is ordered by id so that page `p` of a query is exactly
//! `rows[(p - 1) * PAGE_SIZE .. p * PAGE_SIZE]` of the full result set.

use fsnd_core::types::DbId;
use sqlx::PgPool;

use crate::models::question::{CreateQuestion, Question};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, question, answer, category, difficulty";

/// Provides create/list/search/delete for trivia questions.
pub struct QuestionRepo;

impl QuestionRepo {
    /// Insert a new question, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateQuestion) -> Result<Question, sqlx::Error> {
        let query = format!(
            "INSERT INTO questions (question, answer, category, difficulty)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(input.category)
            .bind(input.difficulty)
            .fetch_one(pool)
            .await
    }

    /// Total number of questions, unfiltered.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions")
            .fetch_one(pool)
            .await
    }

    /// One page of all questions.
    pub async fn list_page(
        pool: &PgPool,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM questions ORDER BY id ASC LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// One page of the questions in a category.
    pub async fn list_page_in_category(
        pool: &PgPool,
        category: DbId,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM questions
             WHERE category = $1
             ORDER BY id ASC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(category)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Number of questions whose text matches an `ILIKE` pattern.
    pub async fn search_count(pool: &PgPool, pattern: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions WHERE question ILIKE $1")
            .bind(pattern)
            .fetch_one(pool)
            .await
    }

    /// One page of the questions whose text matches an `ILIKE` pattern.
    pub async fn search_page(
        pool: &PgPool,
        pattern: &str,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM questions
             WHERE question ILIKE $1
             ORDER BY id ASC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(pattern)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Every question eligible for a quiz round, optionally limited to a category.
    pub async fn list_for_quiz(
        pool: &PgPool,
        category: Option<DbId>,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM questions
             WHERE ($1::BIGINT IS NULL OR category = $1)
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(category)
            .fetch_all(pool)
            .await
    }

    /// Permanently delete a question by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
