//! Authentication API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use backoffice_server::application::dto::EmployeeLoginResponse;
use backoffice_server::domain::{EmployeeRepository, EmployeeStatus, NewEmployee};
use backoffice_server::shared::jwt;

use crate::common::{TestApp, ADMIN_USERNAME, DEFAULT_PASSWORD, TEST_SECRET};

#[tokio::test]
async fn test_login_returns_token_for_employee() {
    let app = TestApp::new();

    let response = app.login(ADMIN_USERNAME, DEFAULT_PASSWORD).await;

    assert_eq!(response.status, StatusCode::OK);
    let envelope = response.envelope::<EmployeeLoginResponse>();
    assert_eq!(envelope.code, 1);
    let data = envelope.data.unwrap();
    assert_eq!(data.user_name, ADMIN_USERNAME);
    assert_eq!(data.name, "Administrator");

    let claims = jwt::parse_token(TEST_SECRET, &data.token).unwrap();
    assert_eq!(claims.emp_id, data.id);
}

#[tokio::test]
async fn test_login_response_uses_user_name_field() {
    let app = TestApp::new();

    let response = app.login(ADMIN_USERNAME, DEFAULT_PASSWORD).await;

    assert!(response.body["data"].get("userName").is_some());
    assert!(response.body["data"].get("token").is_some());
}

#[tokio::test]
async fn test_login_unknown_username_reports_account_not_found() {
    let app = TestApp::new();

    for password in [DEFAULT_PASSWORD, "whatever"] {
        let response = app.login("nobody", password).await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(
            response.body,
            json!({"code": 0, "msg": "account not found", "data": null})
        );
    }
}

#[tokio::test]
async fn test_login_wrong_password_reports_password_error() {
    let app = TestApp::new();

    let response = app.login(ADMIN_USERNAME, "wrong").await;

    assert_eq!(response.body["code"], 0);
    assert_eq!(response.body["msg"], "password error");
}

#[tokio::test]
async fn test_disabled_account_with_wrong_password_reports_password_error() {
    let app = TestApp::new();
    let token = app.admin_token().await;
    let id = app.create_employee(&token, "u1", "N").await;
    let disabled = app
        .post_json(&format!("/admin/employee/status/0?id={id}"), json!({}), Some(&token))
        .await;
    assert_eq!(disabled.body["code"], 1);

    let response = app.login("u1", "wrong").await;

    assert_eq!(response.body["msg"], "password error");
}

#[tokio::test]
async fn test_disabled_account_with_correct_password_is_locked() {
    let app = TestApp::new();
    let token = app.admin_token().await;
    let id = app.create_employee(&token, "u1", "N").await;
    app.post_json(&format!("/admin/employee/status/0?id={id}"), json!({}), Some(&token))
        .await;

    let response = app.login("u1", DEFAULT_PASSWORD).await;

    assert_eq!(response.body["code"], 0);
    assert_eq!(response.body["msg"], "account locked");
}

#[tokio::test]
async fn test_reenabled_account_can_log_in() {
    let app = TestApp::new();
    let token = app.admin_token().await;
    let id = app.create_employee(&token, "u1", "N").await;
    app.post_json(&format!("/admin/employee/status/0?id={id}"), json!({}), Some(&token))
        .await;
    app.post_json(&format!("/admin/employee/status/1?id={id}"), json!({}), Some(&token))
        .await;

    let response = app.login("u1", DEFAULT_PASSWORD).await;

    assert_eq!(response.body["code"], 1);
}

#[tokio::test]
async fn test_logout_is_a_no_op_success() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let response = app
        .post_json("/admin/employee/logout", json!({}), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["code"], 1);

    // Tokens are stateless and stay usable after logout
    let still_valid = app.get("/admin/employee/page", Some(&token)).await;
    assert_eq!(still_valid.status, StatusCode::OK);
}

#[tokio::test]
async fn test_protected_endpoint_requires_token() {
    let app = TestApp::new();

    let response = app.get("/admin/employee/page", None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["code"], 0);
}

#[tokio::test]
async fn test_invalid_token_is_rejected() {
    let app = TestApp::new();

    let response = app.get("/admin/employee/page", Some("not-a-token")).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let app = TestApp::new();
    let expired = jwt::create_token(TEST_SECRET, -120_000, 1).unwrap();

    let response = app.get("/admin/employee/page", Some(&expired)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["msg"], "Token expired");
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let app = TestApp::new();
    let forged = jwt::create_token("some-other-secret-key-of-enough-length", 60_000, 1).unwrap();

    let response = app.get("/admin/employee/1", Some(&forged)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_accepts_stored_md5_hex_digest() {
    let app = TestApp::new();
    let now = chrono::Utc::now();
    app.repo
        .insert(&NewEmployee {
            username: "legacy".into(),
            name: "Legacy".into(),
            password: "e10adc3949ba59abbe56e057f20f883e".into(),
            phone: None,
            sex: None,
            id_number: None,
            status: EmployeeStatus::Enabled,
            create_time: now,
            update_time: now,
            create_user: None,
            update_user: None,
        })
        .await
        .unwrap();

    let response = app.login("legacy", DEFAULT_PASSWORD).await;

    assert_eq!(response.body["code"], 1);
    assert_eq!(response.body["data"]["userName"], "legacy");
}

#[tokio::test]
async fn test_login_malformed_body_is_enveloped() {
    let app = TestApp::new();

    let response = app
        .send("POST", "/admin/employee/login", Some("username=admin".into()), None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], 0);
    assert!(response.body["msg"].is_string());
}

#[tokio::test]
async fn test_admin_responses_carry_security_headers() {
    let app = TestApp::new();

    let ok = app.login(ADMIN_USERNAME, DEFAULT_PASSWORD).await;
    let rejected = app.get("/admin/employee/page", None).await;

    for response in [ok, rejected] {
        assert_eq!(response.headers["x-content-type-options"], "nosniff");
        assert_eq!(response.headers["x-frame-options"], "DENY");
        assert_eq!(response.headers["cache-control"], "no-store");
        // Test settings are not production
        assert!(response.headers.get("strict-transport-security").is_none());
    }
}
