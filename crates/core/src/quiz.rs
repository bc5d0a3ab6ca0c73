//! Quiz question selection.
//!
//! A quiz pool is every question in the chosen category (or in all
//! categories) minus the questions already served in this game. One question
//! is drawn uniformly at random from the pool.

use std::collections::HashSet;

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Deserialize;

use crate::error::CoreError;
use crate::types::DbId;

/// Category id the client sends to mean "any category".
pub const ANY_CATEGORY: DbId = 0;

/// `POST /quizzes` body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<DbId>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

/// The category selector sent by the quiz UI. Only `id` is significant.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategory {
    #[serde(default, deserialize_with = "crate::trivia::lenient_id")]
    pub id: Option<DbId>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl QuizRequest {
    /// The requested category, or `None` for "any category".
    pub fn category(&self) -> Option<DbId> {
        self.quiz_category
            .as_ref()
            .and_then(|c| c.id)
            .filter(|&id| id != ANY_CATEGORY)
    }

    pub fn previous(&self) -> HashSet<DbId> {
        self.previous_questions.iter().copied().collect()
    }
}

/// Anything that can be served as a quiz question.
pub trait QuizCandidate {
    fn question_id(&self) -> DbId;
}

/// Pick one candidate not in `previous`, uniformly at random.
///
/// `category` is only used to describe the failure when the pool is empty.
pub fn select_question<'a, T, R>(
    candidates: &'a [T],
    previous: &HashSet<DbId>,
    category: Option<DbId>,
    rng: &mut R,
) -> Result<&'a T, CoreError>
where
    T: QuizCandidate,
    R: Rng + ?Sized,
{
    let pool: Vec<&T> = candidates
        .iter()
        .filter(|c| !previous.contains(&c.question_id()))
        .collect();

    pool.choose(rng)
        .copied()
        .ok_or(CoreError::QuizExhausted { category })
}
