//! Handlers for the trivia API.
//!
//! Listings are paginated ten questions at a time. `POST /questions` either
//! searches or creates depending on the body; `POST /quizzes` draws a random
//! unplayed question.

use std::collections::BTreeMap;

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use fsnd_core::error::CoreError;
use fsnd_core::pagination::paginate;
use fsnd_core::quiz::{select_question, QuizRequest};
use fsnd_core::trivia::{substring_pattern, QuestionSubmission};
use fsnd_core::types::DbId;
use fsnd_db::models::category::Category;
use fsnd_db::models::question::{CreateQuestion, Question};
use fsnd_db::repositories::{CategoryRepo, QuestionRepo};
use serde::Serialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::query::PageParams;
use crate::response::Success;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response bodies
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct CategoryPage {
    categories: Vec<Category>,
    total_categories: usize,
}

#[derive(Serialize)]
struct QuestionPage {
    questions: Vec<Question>,
    total_questions: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    categories: Option<BTreeMap<DbId, String>>,
    current_category: Option<DbId>,
}

#[derive(Serialize)]
struct Deleted {
    deleted: DbId,
    #[serde(flatten)]
    page: QuestionPage,
}

#[derive(Serialize)]
struct Created {}

#[derive(Serialize)]
struct QuizQuestion {
    question: Question,
}

/// `{id: type}` lookup the frontend uses to label questions.
fn category_map(categories: Vec<Category>) -> BTreeMap<DbId, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// GET /categories?page=
///
/// One page of categories, plus the total number of categories.
pub async fn list_categories(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let page = params.page_request()?;
    let categories = CategoryRepo::list(&state.pool).await?;
    let slice = paginate(&categories, page)?.to_vec();

    Ok(Success::json(CategoryPage {
        categories: slice,
        total_categories: categories.len(),
    }))
}

/// GET /categories/{id}/questions?page=
///
/// Questions in one category. An empty page (including a category with no
/// questions at all) is a 404.
pub async fn category_questions(
    State(state): State<AppState>,
    AppPath(category_id): AppPath<DbId>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let page = params.page_request()?;
    let rows = QuestionRepo::list_page_in_category(
        &state.pool,
        category_id,
        page.offset(),
        page.limit(),
    )
    .await?;
    let questions = page.require_rows(rows)?;
    let total_questions = QuestionRepo::count(&state.pool).await?;

    Ok(Success::json(QuestionPage {
        questions,
        total_questions,
        categories: None,
        current_category: Some(category_id),
    }))
}

// ---------------------------------------------------------------------------
// Questions
// ---------------------------------------------------------------------------

/// GET /questions?page=
pub async fn list_questions(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let page = params.page_request()?;
    let rows = QuestionRepo::list_page(&state.pool, page.offset(), page.limit()).await?;
    let questions = page.require_rows(rows)?;
    let total_questions = QuestionRepo::count(&state.pool).await?;
    let categories = CategoryRepo::list(&state.pool).await?;

    Ok(Success::json(QuestionPage {
        questions,
        total_questions,
        categories: Some(category_map(categories)),
        current_category: None,
    }))
}

/// POST /questions?page=
///
/// A body with a `searchTerm` key searches question text; any other body
/// creates a question.
pub async fn submit_question(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
    AppJson(body): AppJson<Value>,
) -> AppResult<axum::response::Response> {
    match QuestionSubmission::try_from(body)? {
        QuestionSubmission::Search(search) => {
            let page = params.page_request()?;
            let pattern = substring_pattern(&search.term);
            let matches = QuestionRepo::search_count(&state.pool, &pattern).await?;

            let questions = if matches == 0 {
                Vec::new()
            } else {
                let rows =
                    QuestionRepo::search_page(&state.pool, &pattern, page.offset(), page.limit())
                        .await?;
                page.require_rows(rows)?
            };
            let total_questions = QuestionRepo::count(&state.pool).await?;

            tracing::debug!(term = %search.term, matches, "Question search");

            Ok(Success::json(QuestionPage {
                questions,
                total_questions,
                categories: None,
                current_category: None,
            })
            .into_response())
        }
        QuestionSubmission::Create(create) => {
            let question =
                QuestionRepo::create(&state.pool, &CreateQuestion::from(create)).await?;

            tracing::info!(question_id = question.id, category = ?question.category, "Question created");

            Ok(Success::json(Created {}).into_response())
        }
    }
}

/// DELETE /questions/{id}?page=
///
/// A missing or unparseable id is a 422. The response carries the requested
/// page of what remains, which may be empty.
pub async fn delete_question(
    State(state): State<AppState>,
    AppPath(raw_id): AppPath<String>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let question_id: DbId = raw_id
        .parse()
        .map_err(|_| AppError::Unprocessable(format!("invalid question id '{raw_id}'")))?;
    let page = params.page_request()?;

    if !QuestionRepo::delete(&state.pool, question_id).await? {
        return Err(AppError::Unprocessable(format!(
            "question {question_id} does not exist"
        )));
    }

    tracing::info!(question_id, "Question deleted");

    let questions = QuestionRepo::list_page(&state.pool, page.offset(), page.limit()).await?;
    let total_questions = QuestionRepo::count(&state.pool).await?;
    let categories = CategoryRepo::list(&state.pool).await?;

    Ok(Success::json(Deleted {
        deleted: question_id,
        page: QuestionPage {
            questions,
            total_questions,
            categories: Some(category_map(categories)),
            current_category: None,
        },
    }))
}

// ---------------------------------------------------------------------------
// Quizzes
// ---------------------------------------------------------------------------

/// POST /quizzes
///
/// Draw one question uniformly at random from the chosen category (or all
/// categories when the id is 0 or absent), skipping `previous_questions`.
pub async fn next_quiz_question(
    State(state): State<AppState>,
    AppJson(request): AppJson<QuizRequest>,
) -> AppResult<impl IntoResponse> {
    let category = request.category();
    if let Some(id) = category {
        if !CategoryRepo::exists(&state.pool, id).await? {
            return Err(CoreError::InvalidCategory(id).into());
        }
    }

    let candidates = QuestionRepo::list_for_quiz(&state.pool, category).await?;
    let previous = request.previous();
    let question = {
        let mut rng = rand::rng();
        select_question(&candidates, &previous, category, &mut rng)?.clone()
    };

    tracing::debug!(
        question_id = question.id,
        ?category,
        played = previous.len(),
        "Quiz question drawn"
    );

    Ok(Success::json(QuizQuestion { question }))
}
