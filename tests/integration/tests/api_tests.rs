//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with the blog schema
//! - Environment variable: DATABASE_URL
//!
//! The moderation endpoint is a local stub started per test server.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;

/// Register a fresh user and return (auth, register payload)
async fn register(server: &TestServer) -> (AuthResponse, RegisterRequest) {
    let request = RegisterRequest::unique();
    let response = server
        .post("/api/v1/auth/register", &request)
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    (auth, request)
}

/// Register a user and create a post with their token
async fn register_with_post(server: &TestServer) -> (AuthResponse, PostResponse) {
    let (auth, _) = register(server).await;
    let response = server
        .post_auth("/api/v1/posts", &auth.access_token, &PostPayload::unique())
        .await
        .unwrap();
    let post: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    (auth, post)
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_and_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, request) = register(&server).await;

    assert_eq!(auth.user.username, request.username);
    assert_eq!(auth.token_type, "Bearer");
    assert!(!auth.access_token.is_empty());

    let response = server
        .post("/api/v1/auth/login", &LoginRequest::from_register(&request))
        .await
        .unwrap();
    let login: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(login.user.id, auth.user.id);
}

#[tokio::test]
async fn test_register_duplicate_username() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, request) = register(&server).await;

    let response = server
        .post("/api/v1/auth/register", &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_login_wrong_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, request) = register(&server).await;

    let mut login = LoginRequest::from_register(&request);
    login.password = "WrongPass123!".to_string();

    let response = server.post("/api/v1/auth/login", &login).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_refresh_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, _) = register(&server).await;

    let response = server
        .post_auth("/api/v1/auth/refresh", &auth.access_token, &())
        .await
        .unwrap();
    let refreshed: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(refreshed.user.id, auth.user.id);
}

// ============================================================================
// Post Tests
// ============================================================================

#[tokio::test]
async fn test_post_crud() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, post) = register_with_post(&server).await;

    // Read it back
    let response = server.get(&format!("/api/v1/posts/{}", post.id)).await.unwrap();
    let fetched: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.title, post.title);

    // Update it
    let response = server
        .put_auth(
            &format!("/api/v1/posts/{}", post.id),
            &auth.access_token,
            &serde_json::json!({"title": "Renamed"}),
        )
        .await
        .unwrap();
    let updated: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.content, post.content);

    // Delete it
    let response = server
        .delete_auth(&format!("/api/v1/posts/{}", post.id), &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get(&format!("/api/v1/posts/{}", post.id)).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_post_mutation_requires_ownership() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, post) = register_with_post(&server).await;
    let (intruder, _) = register(&server).await;

    let response = server
        .put_auth(
            &format!("/api/v1/posts/{}", post.id),
            &intruder.access_token,
            &serde_json::json!({"title": "Defaced"}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/v1/posts/{}", post.id), &intruder.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Comment Gate Tests
// ============================================================================

#[tokio::test]
async fn test_friendly_comment_is_published() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, post) = register_with_post(&server).await;

    let response = server
        .post_auth(
            &format!("/api/v1/posts/{}/comments", post.id),
            &auth.access_token,
            &CommentPayload::friendly(),
        )
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(comment.content, CommentPayload::friendly().content);

    // The comment shows up in the public listing
    let response = server
        .get(&format!("/api/v1/posts/{}/comments", post.id))
        .await
        .unwrap();
    let comments: Vec<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].id, comment.id);
}

#[tokio::test]
async fn test_hostile_comment_is_rejected_and_not_listed() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, post) = register_with_post(&server).await;

    let response = server
        .post_auth(
            &format!("/api/v1/posts/{}/comments", post.id),
            &auth.access_token,
            &CommentPayload::hostile(),
        )
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
    assert_eq!(body.error.code, "CONTENT_FLAGGED");
    // The rejection does not leak the audit record
    assert!(!body.error.message.contains("harassment"));

    let response = server
        .get(&format!("/api/v1/posts/{}/comments", post.id))
        .await
        .unwrap();
    let comments: Vec<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(comments.is_empty());
}

#[tokio::test]
async fn test_comment_requires_authentication() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, post) = register_with_post(&server).await;

    let response = server
        .post(
            &format!("/api/v1/posts/{}/comments", post.id),
            &CommentPayload::friendly(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_flagged_comment_edit_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, post) = register_with_post(&server).await;

    let response = server
        .post_auth(
            &format!("/api/v1/posts/{}/comments", post.id),
            &auth.access_token,
            &CommentPayload::friendly(),
        )
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .put_auth(
            &format!("/api/v1/posts/{}/comments/{}", post.id, comment.id),
            &auth.access_token,
            &CommentPayload::hostile(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();

    // Content untouched
    let response = server
        .get(&format!("/api/v1/posts/{}/comments", post.id))
        .await
        .unwrap();
    let comments: Vec<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(comments[0].content, CommentPayload::friendly().content);
}

#[tokio::test]
async fn test_comment_mutation_requires_ownership() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, post) = register_with_post(&server).await;
    let (intruder, _) = register(&server).await;

    let response = server
        .post_auth(
            &format!("/api/v1/posts/{}/comments", post.id),
            &auth.access_token,
            &CommentPayload::friendly(),
        )
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(
            &format!("/api/v1/posts/{}/comments/{}", post.id, comment.id),
            &intruder.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Daily Breakdown Tests
// ============================================================================

#[tokio::test]
async fn test_breakdown_requires_both_dates() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .get("/api/v1/comments-daily-breakdown?date_from=2024-05-17")
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
    assert_eq!(body.error.code, "INVALID_DATE_RANGE");
}

#[tokio::test]
async fn test_breakdown_rejects_malformed_dates() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .get("/api/v1/comments-daily-breakdown?date_from=17-05-2024&date_to=2024-05-18")
        .await
        .unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_breakdown_empty_range_has_zero_totals() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // A far-future range nothing can fall into
    let response = server
        .get("/api/v1/comments-daily-breakdown?date_from=2099-01-01&date_to=2099-01-31")
        .await
        .unwrap();
    let report: BreakdownResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(report.total_comments_amount, 0);
    assert_eq!(report.total_blocked_comments_amount, 0);
    assert_eq!(report.comments, serde_json::json!({}));
    assert_eq!(report.blocked_comments, serde_json::json!({}));
}

#[tokio::test]
async fn test_breakdown_is_idempotent() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, post) = register_with_post(&server).await;

    // One published and one blocked comment in the store
    server
        .post_auth(
            &format!("/api/v1/posts/{}/comments", post.id),
            &auth.access_token,
            &CommentPayload::friendly(),
        )
        .await
        .unwrap();
    server
        .post_auth(
            &format!("/api/v1/posts/{}/comments", post.id),
            &auth.access_token,
            &CommentPayload::hostile(),
        )
        .await
        .unwrap();

    let path = "/api/v1/comments-daily-breakdown?date_from=2020-01-01&date_to=2020-01-31";
    let first: BreakdownResponse =
        assert_json(server.get(path).await.unwrap(), StatusCode::OK).await.unwrap();
    let second: BreakdownResponse =
        assert_json(server.get(path).await.unwrap(), StatusCode::OK).await.unwrap();

    assert_eq!(first.total_comments_amount, second.total_comments_amount);
    assert_eq!(
        first.total_blocked_comments_amount,
        second.total_blocked_comments_amount
    );
    assert_eq!(first.comments, second.comments);
}
