//! Trivia questions.

use fsnd_core::quiz::QuizCandidate;
use fsnd_core::trivia::CreateRequest;
use fsnd_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `questions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Question {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    pub category: Option<DbId>,
    pub difficulty: Option<i32>,
}

impl QuizCandidate for Question {
    fn question_id(&self) -> DbId {
        self.id
    }
}

/// Insert DTO. Built from a validated [`CreateRequest`].
#[derive(Debug, Clone)]
pub struct CreateQuestion {
    pub question: String,
    pub answer: String,
    pub category: Option<DbId>,
    pub difficulty: Option<i32>,
}

impl From<CreateRequest> for CreateQuestion {
    fn from(req: CreateRequest) -> Self {
        Self {
            question: req.question,
            answer: req.answer,
            category: req.category,
            difficulty: req.difficulty,
        }
    }
}
