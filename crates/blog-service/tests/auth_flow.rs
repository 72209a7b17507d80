//! Registration, login, and account lifecycle
//!
//! Run with: cargo test -p blog-service --test auth_flow

mod common;

use blog_service::{AuthService, LoginRequest, RegisterRequest, UserService};
use common::harness;

fn register_request(username: &str) -> RegisterRequest {
    RegisterRequest {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password: "CorrectHorse1".to_string(),
    }
}

#[tokio::test]
async fn register_returns_token_and_creates_profile() {
    let h = harness();
    let service = AuthService::new(&h.ctx);

    let auth = service.register(register_request("alice")).await.unwrap();

    assert!(!auth.access_token.is_empty());
    assert_eq!(auth.token_type, "Bearer");
    assert_eq!(auth.user.username, "alice");

    // An empty profile exists right after registration
    let user_id = auth.user.id.parse::<i64>().map(blog_core::Snowflake::new).unwrap();
    let profile = UserService::new(&h.ctx).get_profile(user_id).await.unwrap();
    assert!(profile.bio.is_none());
}

#[tokio::test]
async fn register_rejects_weak_password() {
    let h = harness();
    let mut request = register_request("alice");
    request.password = "alllowercase".to_string();

    let err = AuthService::new(&h.ctx).register(request).await.unwrap_err();
    assert_eq!(err.status_code(), 422);
}

#[tokio::test]
async fn register_rejects_duplicate_username() {
    let h = harness();
    let service = AuthService::new(&h.ctx);

    service.register(register_request("alice")).await.unwrap();
    let err = service.register(register_request("alice")).await.unwrap_err();

    assert_eq!(err.status_code(), 409);
}

#[tokio::test]
async fn login_roundtrip() {
    let h = harness();
    let service = AuthService::new(&h.ctx);
    service.register(register_request("alice")).await.unwrap();

    let auth = service
        .login(LoginRequest {
            username: "alice".to_string(),
            password: "CorrectHorse1".to_string(),
        })
        .await
        .unwrap();

    assert!(!auth.access_token.is_empty());

    // The issued token resolves back to the same user
    let claims = h.ctx.jwt_service().validate_token(&auth.access_token).unwrap();
    assert_eq!(claims.sub, auth.user.id);
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let h = harness();
    let service = AuthService::new(&h.ctx);
    service.register(register_request("alice")).await.unwrap();

    let err = service
        .login(LoginRequest {
            username: "alice".to_string(),
            password: "WrongHorse1".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 401);
}

#[tokio::test]
async fn login_with_unknown_user_is_unauthorized() {
    let h = harness();

    let err = AuthService::new(&h.ctx)
        .login(LoginRequest {
            username: "nobody".to_string(),
            password: "CorrectHorse1".to_string(),
        })
        .await
        .unwrap_err();

    // Same signal as a bad password; existence is not leaked
    assert_eq!(err.status_code(), 401);
}

#[tokio::test]
async fn refresh_reissues_a_valid_token() {
    let h = harness();
    let service = AuthService::new(&h.ctx);
    let auth = service.register(register_request("alice")).await.unwrap();
    let user_id = auth.user.id.parse::<i64>().map(blog_core::Snowflake::new).unwrap();

    let refreshed = service.refresh_token(user_id).await.unwrap();

    let claims = h
        .ctx
        .jwt_service()
        .validate_token(&refreshed.access_token)
        .unwrap();
    assert_eq!(claims.user_id().unwrap(), user_id);
}

#[tokio::test]
async fn delete_account_removes_user_and_profile() {
    let h = harness();
    let service = AuthService::new(&h.ctx);
    let auth = service.register(register_request("alice")).await.unwrap();
    let user_id = auth.user.id.parse::<i64>().map(blog_core::Snowflake::new).unwrap();

    let users = UserService::new(&h.ctx);
    let username = users.delete_account(user_id).await.unwrap();
    assert_eq!(username, "alice");

    let err = users.get_profile(user_id).await.unwrap_err();
    assert_eq!(err.status_code(), 404);

    let err = service.refresh_token(user_id).await.unwrap_err();
    assert_eq!(err.status_code(), 404);
}
