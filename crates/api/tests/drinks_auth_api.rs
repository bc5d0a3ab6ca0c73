//! Authorization on the drinks endpoints.
//!
//! Every case here is decided by the token or the body alone, so no database
//! is needed.

mod common;

use axum::body::Body;
use axum::http::header::AUTHORIZATION;
use axum::http::{Method, Request, StatusCode};
use common::{
    body_json, build_offline_app, delete, delete_auth, expired_token, get, get_auth,
    patch_json_auth, post_json_auth, token_with, BARISTA, MANAGER,
};
use fsnd_api::auth::jwt::{issue_token, AuthConfig, Claims};
use serde_json::json;

async fn assert_auth_failure(
    response: axum::http::Response<Body>,
    status: StatusCode,
    message: &str,
) {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], status.as_u16());
    assert_eq!(json["message"], message);
}

#[tokio::test]
async fn missing_header_is_401() {
    let response = get(build_offline_app(), "/drinks-detail").await;

    assert_auth_failure(
        response,
        StatusCode::UNAUTHORIZED,
        "Authorization header is expected.",
    )
    .await;
}

#[tokio::test]
async fn non_bearer_header_is_401() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/drinks-detail")
        .header(AUTHORIZATION, "Basic dXNlcjpwYXNz")
        .body(Body::empty())
        .unwrap();

    let response = common::send(build_offline_app(), request).await;

    assert_auth_failure(
        response,
        StatusCode::UNAUTHORIZED,
        "Authorization header must start with \"Bearer\".",
    )
    .await;
}

#[tokio::test]
async fn expired_token_is_401() {
    let response = get_auth(build_offline_app(), "/drinks-detail", &expired_token()).await;

    assert_auth_failure(response, StatusCode::UNAUTHORIZED, "Token expired.").await;
}

#[tokio::test]
async fn token_signed_elsewhere_is_401() {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: None,
        aud: Some(common::TEST_AUDIENCE.into()),
        exp: now + 600,
        iat: Some(now),
        permissions: Some(vec!["delete:drinks".to_string()]),
    };
    let foreign = AuthConfig {
        secret: "some-other-secret".to_string(),
        audience: None,
    };
    let token = issue_token(&claims, &foreign).unwrap();

    let response = delete_auth(build_offline_app(), "/drinks/1", &token).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn token_with_audience_list_is_authenticated() {
    let now = chrono::Utc::now().timestamp();
    let payload = json!({
        "sub": "auth0|barista",
        "aud": [common::TEST_AUDIENCE, "https://fsnd.auth0.com/userinfo"],
        "exp": now + 600,
        "iat": now,
        "permissions": ["get:drinks-detail"],
    });
    let token = jsonwebtoken::encode(
        &jsonwebtoken::Header::new(jsonwebtoken::Algorithm::HS256),
        &payload,
        &jsonwebtoken::EncodingKey::from_secret(common::TEST_SECRET.as_bytes()),
    )
    .unwrap();

    let body = json!({ "title": "Mocha", "recipe": [] });
    let response = post_json_auth(build_offline_app(), "/drinks", body, &token).await;

    // Authenticated, but a barista may not create drinks.
    assert_auth_failure(
        response,
        StatusCode::FORBIDDEN,
        "Permission post:drinks not found.",
    )
    .await;
}

#[tokio::test]
async fn token_without_permissions_claim_is_400() {
    let response = get_auth(build_offline_app(), "/drinks-detail", &token_with(None)).await;

    assert_auth_failure(
        response,
        StatusCode::BAD_REQUEST,
        "Permissions not included in JWT.",
    )
    .await;
}

#[tokio::test]
async fn barista_cannot_create_drinks() {
    let body = json!({ "title": "Water", "recipe": [{ "name": "Water", "color": "blue", "parts": 1 }] });

    let response =
        post_json_auth(build_offline_app(), "/drinks", body, &token_with(Some(BARISTA))).await;

    assert_auth_failure(
        response,
        StatusCode::FORBIDDEN,
        "Permission post:drinks not found.",
    )
    .await;
}

#[tokio::test]
async fn barista_cannot_delete_drinks() {
    let response =
        delete_auth(build_offline_app(), "/drinks/1", &token_with(Some(BARISTA))).await;

    assert_auth_failure(
        response,
        StatusCode::FORBIDDEN,
        "Permission delete:drinks not found.",
    )
    .await;
}

#[tokio::test]
async fn anonymous_delete_is_401() {
    let response = delete(build_offline_app(), "/drinks/1").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn manager_posting_drink_without_title_is_422() {
    let body = json!({ "recipe": [{ "name": "Water", "color": "blue", "parts": 1 }] });

    let response =
        post_json_auth(build_offline_app(), "/drinks", body, &token_with(Some(MANAGER))).await;

    assert_auth_failure(response, StatusCode::UNPROCESSABLE_ENTITY, "unprocessable").await;
}

#[tokio::test]
async fn manager_patching_with_empty_recipe_is_422() {
    let body = json!({ "title": "Matcha Shake", "recipe": [] });

    let response =
        patch_json_auth(build_offline_app(), "/drinks/1", body, &token_with(Some(MANAGER))).await;

    assert_auth_failure(response, StatusCode::UNPROCESSABLE_ENTITY, "unprocessable").await;
}
