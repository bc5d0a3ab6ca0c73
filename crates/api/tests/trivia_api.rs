//! HTTP-level integration tests for the trivia API.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json};
use fsnd_db::models::question::CreateQuestion;
use fsnd_db::repositories::QuestionRepo;
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Insert `n` questions in `category`, returning their ids in insertion order.
async fn seed_questions(pool: &PgPool, n: usize, category: i64) -> Vec<i64> {
    let mut ids = Vec::with_capacity(n);
    for i in 0..n {
        let q = QuestionRepo::create(
            pool,
            &CreateQuestion {
                question: format!("Question number {i}?"),
                answer: format!("Answer {i}"),
                category: Some(category),
                difficulty: Some(1 + (i as i32 % 5)),
            },
        )
        .await
        .unwrap();
        ids.push(q.id);
    }
    ids
}

fn ids(json: &serde_json::Value) -> Vec<i64> {
    json["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// Listing and pagination
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_questions_are_paginated_by_ten(pool: PgPool) {
    let all = seed_questions(&pool, 23, 1).await;

    let json = body_json(get(common::build_test_app(pool.clone()), "/questions").await).await;
    assert_eq!(json["success"], true);
    assert_eq!(ids(&json), all[0..10].to_vec());
    assert_eq!(json["total_questions"], 23);
    assert_eq!(json["categories"]["1"], "Science");
    assert!(json["current_category"].is_null());

    let json =
        body_json(get(common::build_test_app(pool.clone()), "/questions?page=3").await).await;
    assert_eq!(ids(&json), all[20..23].to_vec());

    let response = get(common::build_test_app(pool), "/questions?page=4").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_garbage_page_means_first_page(pool: PgPool) {
    let all = seed_questions(&pool, 3, 2).await;

    let json = body_json(get(common::build_test_app(pool), "/questions?page=abc").await).await;

    assert_eq!(ids(&json), all);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_categories(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/categories").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["total_categories"], 6);
    assert_eq!(json["categories"][0]["id"], 1);
    assert_eq!(json["categories"][0]["type"], "Science");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_category_questions(pool: PgPool) {
    seed_questions(&pool, 2, 1).await;
    let art = seed_questions(&pool, 3, 2).await;

    let json = body_json(
        get(common::build_test_app(pool.clone()), "/categories/2/questions").await,
    )
    .await;
    assert_eq!(ids(&json), art);
    assert_eq!(json["total_questions"], 5);
    assert_eq!(json["current_category"], 2);

    let response = get(common::build_test_app(pool), "/categories/5/questions").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Create and search
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_question_with_only_required_fields(pool: PgPool) {
    let body = json!({ "question": "What is the heaviest organ?", "answer": "The liver" });

    let response = post_json(common::build_test_app(pool.clone()), "/questions", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "success": true }));
    assert_eq!(QuestionRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_question_with_string_category(pool: PgPool) {
    let body = json!({
        "question": "Who discovered penicillin?",
        "answer": "Alexander Fleming",
        "category": "1",
        "difficulty": "3"
    });

    let response = post_json(common::build_test_app(pool.clone()), "/questions", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let created = QuestionRepo::list_for_quiz(&pool, Some(1)).await.unwrap();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].difficulty, Some(3));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_question_in_unknown_category_is_422(pool: PgPool) {
    let body = json!({ "question": "q", "answer": "a", "category": 999 });

    let response = post_json(common::build_test_app(pool), "/questions", body).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_is_case_insensitive(pool: PgPool) {
    seed_questions(&pool, 2, 1).await;
    QuestionRepo::create(
        &pool,
        &CreateQuestion {
            question: "What movie earned Tom Hanks his third straight Oscar nomination?".into(),
            answer: "Apollo 13".into(),
            category: Some(5),
            difficulty: Some(4),
        },
    )
    .await
    .unwrap();

    let response = post_json(
        common::build_test_app(pool),
        "/questions",
        json!({ "searchTerm": "tom hanks" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["questions"].as_array().unwrap().len(), 1);
    assert_eq!(json["questions"][0]["answer"], "Apollo 13");
    assert_eq!(json["total_questions"], 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_keeps_spaces_around_term(pool: PgPool) {
    for text in ["Which special offer ends today?", "Which of these is a mammal?"] {
        QuestionRepo::create(
            &pool,
            &CreateQuestion {
                question: text.into(),
                answer: "a".into(),
                category: Some(1),
                difficulty: Some(1),
            },
        )
        .await
        .unwrap();
    }

    let response = post_json(
        common::build_test_app(pool),
        "/questions",
        json!({ "searchTerm": " of " }),
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(json["questions"].as_array().unwrap().len(), 1);
    assert_eq!(json["questions"][0]["question"], "Which of these is a mammal?");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_without_matches_is_empty_success(pool: PgPool) {
    seed_questions(&pool, 4, 1).await;

    let response = post_json(
        common::build_test_app(pool),
        "/questions",
        json!({ "searchTerm": "xyzzy" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert!(json["questions"].as_array().unwrap().is_empty());
    assert_eq!(json["total_questions"], 4);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_question(pool: PgPool) {
    let all = seed_questions(&pool, 3, 3).await;

    let response = delete(
        common::build_test_app(pool.clone()),
        &format!("/questions/{}", all[1]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["deleted"], all[1]);
    assert_eq!(ids(&json), vec![all[0], all[2]]);
    assert_eq!(json["total_questions"], 2);

    let again = delete(common::build_test_app(pool), &format!("/questions/{}", all[1])).await;
    assert_eq!(again.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// ---------------------------------------------------------------------------
// Quizzes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_quiz_skips_previous_questions(pool: PgPool) {
    let science = seed_questions(&pool, 2, 1).await;
    seed_questions(&pool, 3, 2).await;

    let body = json!({
        "previous_questions": [science[0]],
        "quiz_category": { "id": 1, "type": "Science" }
    });
    let response = post_json(common::build_test_app(pool), "/quizzes", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["question"]["id"], science[1]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_quiz_any_category(pool: PgPool) {
    let history = seed_questions(&pool, 1, 4).await;

    let body = json!({ "previous_questions": [], "quiz_category": { "id": 0, "type": "click" } });
    let response = post_json(common::build_test_app(pool), "/quizzes", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["question"]["id"], history[0]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_quiz_unknown_category_is_422(pool: PgPool) {
    seed_questions(&pool, 1, 1).await;

    let body = json!({ "previous_questions": [], "quiz_category": { "id": 999 } });
    let response = post_json(common::build_test_app(pool), "/quizzes", body).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_quiz_exhausted_is_422(pool: PgPool) {
    let sports = seed_questions(&pool, 1, 6).await;

    let body = json!({ "previous_questions": sports, "quiz_category": { "id": 6 } });
    let response = post_json(common::build_test_app(pool), "/quizzes", body).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
