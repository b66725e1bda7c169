//! Employee API Tests

use axum::http::StatusCode;
use fake::{faker::name::en::FirstName, Fake};
use pretty_assertions::assert_eq;
use serde_json::json;

use backoffice_server::application::dto::EmployeePageResponse;
use backoffice_server::domain::services::hash_password;
use backoffice_server::domain::{Employee, EmployeeRepository, EmployeeStatus, MASKED_PASSWORD};

use crate::common::{TestApp, DEFAULT_PASSWORD};

// Admin id in the seeded store
const ADMIN_ID: i64 = 1;

#[tokio::test]
async fn test_create_employee_applies_defaults() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let response = app
        .post_json(
            "/admin/employee",
            json!({ "username": "u1", "name": "N", "phone": "13800000000", "sex": "1", "idNumber": "110101199001011234" }),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({"code": 1, "msg": null, "data": null}));

    let stored = app.repo.find_by_username("u1").await.unwrap().unwrap();
    assert_eq!(stored.status, EmployeeStatus::Enabled);
    assert_eq!(stored.password, hash_password(DEFAULT_PASSWORD));
    assert_eq!(stored.id_number.as_deref(), Some("110101199001011234"));
    assert_eq!(stored.create_user, Some(ADMIN_ID));
    assert_eq!(stored.update_user, Some(ADMIN_ID));
    assert_eq!(stored.create_time, stored.update_time);
}

#[tokio::test]
async fn test_create_employee_duplicate_username() {
    let app = TestApp::new();
    let token = app.admin_token().await;
    app.create_employee(&token, "u1", "N").await;

    let response = app
        .post_json(
            "/admin/employee",
            json!({ "username": "u1", "name": "Other" }),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["code"], 0);
    assert_eq!(response.body["msg"], "username u1 already exists");
    assert_eq!(app.repo.len(), 2);
}

#[tokio::test]
async fn test_create_employee_rejects_empty_name() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let response = app
        .post_json(
            "/admin/employee",
            json!({ "username": "u1", "name": "" }),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], 0);
}

#[tokio::test]
async fn test_page_query_returns_total_and_slice() {
    let app = TestApp::new();
    let token = app.admin_token().await;
    for i in 0..4 {
        let name: String = FirstName().fake();
        app.create_employee(&token, &format!("user{i}"), &name).await;
    }

    let response = app
        .get("/admin/employee/page?page=1&pageSize=2", Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let page = response.envelope::<EmployeePageResponse>().data.unwrap();
    assert_eq!(page.total, 5);
    assert_eq!(page.records.len(), 2);
    // Newest first
    assert_eq!(page.records[0].username, "user3");
    assert!(page
        .records
        .iter()
        .all(|record| record.password == MASKED_PASSWORD));
}

#[tokio::test]
async fn test_page_query_past_the_end_is_empty() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let response = app
        .get("/admin/employee/page?page=9&pageSize=10", Some(&token))
        .await;

    let page = response.envelope::<EmployeePageResponse>().data.unwrap();
    assert_eq!(page.total, 1);
    assert!(page.records.is_empty());
}

#[tokio::test]
async fn test_page_query_filters_by_name_substring() {
    let app = TestApp::new();
    let token = app.admin_token().await;
    app.create_employee(&token, "zhang", "Zhang San").await;
    app.create_employee(&token, "li", "Li Si").await;
    app.create_employee(&token, "wang", "Wang Sanjin").await;

    let response = app
        .get("/admin/employee/page?name=San&page=1&pageSize=10", Some(&token))
        .await;

    let page = response.envelope::<EmployeePageResponse>().data.unwrap();
    assert_eq!(page.total, 2);
    let mut usernames: Vec<_> = page.records.iter().map(|r| r.username.as_str()).collect();
    usernames.sort();
    assert_eq!(usernames, vec!["wang", "zhang"]);
}

#[tokio::test]
async fn test_page_query_defaults_without_parameters() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let response = app.get("/admin/employee/page?name=", Some(&token)).await;

    let page = response.envelope::<EmployeePageResponse>().data.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.records[0].username, "admin");
}

#[tokio::test]
async fn test_status_change_disables_and_enables() {
    let app = TestApp::new();
    let token = app.admin_token().await;
    let id = app.create_employee(&token, "u1", "N").await;

    let response = app
        .post_json(&format!("/admin/employee/status/0?id={id}"), json!({}), Some(&token))
        .await;
    assert_eq!(response.body["code"], 1);
    let stored = app.repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.status, EmployeeStatus::Disabled);

    app.post_json(&format!("/admin/employee/status/1?id={id}"), json!({}), Some(&token))
        .await;
    let stored = app.repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.status, EmployeeStatus::Enabled);
}

#[tokio::test]
async fn test_status_change_unknown_id_is_success() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let response = app
        .post_json("/admin/employee/status/0?id=999", json!({}), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["code"], 1);
}

#[tokio::test]
async fn test_status_change_rejects_unknown_status() {
    let app = TestApp::new();
    let token = app.admin_token().await;
    let id = app.create_employee(&token, "u1", "N").await;

    let response = app
        .post_json(&format!("/admin/employee/status/2?id={id}"), json!({}), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let stored = app.repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.status, EmployeeStatus::Enabled);
}

#[tokio::test]
async fn test_get_by_id_masks_password() {
    let app = TestApp::new();
    let token = app.admin_token().await;
    let id = app.create_employee(&token, "u1", "N").await;

    let response = app.get(&format!("/admin/employee/{id}"), Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    let employee = response.envelope::<Employee>().data.unwrap();
    assert_eq!(employee.id, id);
    assert_eq!(employee.username, "u1");
    assert_eq!(employee.password, MASKED_PASSWORD);
    assert_eq!(employee.phone.as_deref(), Some("13800000000"));
}

#[tokio::test]
async fn test_get_by_id_unknown_returns_null_data() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let response = app.get("/admin/employee/999", Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({"code": 1, "msg": null, "data": null}));
}

#[tokio::test]
async fn test_update_changes_only_supplied_fields() {
    let app = TestApp::new();
    let token = app.admin_token().await;
    let id = app.create_employee(&token, "u1", "N").await;
    let before = app.repo.find_by_id(id).await.unwrap().unwrap();

    let response = app
        .put_json(
            "/admin/employee",
            json!({ "id": id, "name": "Renamed" }),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["code"], 1);

    let after = app.repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(after.name, "Renamed");
    assert_eq!(after.username, "u1");
    assert_eq!(after.phone, before.phone);
    assert_eq!(after.password, before.password);
    assert_eq!(after.update_user, Some(ADMIN_ID));
    assert!(after.update_time >= before.update_time);
}

#[tokio::test]
async fn test_update_stamps_acting_employee() {
    let app = TestApp::new();
    let admin = app.admin_token().await;
    let editor_id = app.create_employee(&admin, "editor", "Editor").await;
    let target_id = app.create_employee(&admin, "target", "Target").await;

    let editor_login = app.login("editor", DEFAULT_PASSWORD).await;
    let editor_token = editor_login.body["data"]["token"].as_str().unwrap().to_owned();

    app.put_json(
        "/admin/employee",
        json!({ "id": target_id, "phone": "13900000000" }),
        Some(&editor_token),
    )
    .await;

    let target = app.repo.find_by_id(target_id).await.unwrap().unwrap();
    assert_eq!(target.phone.as_deref(), Some("13900000000"));
    assert_eq!(target.create_user, Some(ADMIN_ID));
    assert_eq!(target.update_user, Some(editor_id));
}

#[tokio::test]
async fn test_update_to_taken_username_fails() {
    let app = TestApp::new();
    let token = app.admin_token().await;
    let id = app.create_employee(&token, "u1", "N").await;

    let response = app
        .put_json(
            "/admin/employee",
            json!({ "id": id, "username": "admin" }),
            Some(&token),
        )
        .await;

    assert_eq!(response.body["code"], 0);
    assert_eq!(response.body["msg"], "username admin already exists");
}

#[tokio::test]
async fn test_update_unknown_id_is_success() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let response = app
        .put_json(
            "/admin/employee",
            json!({ "id": 999, "name": "Ghost" }),
            Some(&token),
        )
        .await;

    assert_eq!(response.body["code"], 1);
    assert_eq!(app.repo.len(), 1);
}

#[tokio::test]
async fn test_page_query_non_numeric_page_is_enveloped() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let response = app.get("/admin/employee/page?page=abc", Some(&token)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], 0);
    assert!(response.body["msg"].is_string());
    assert!(response.body["data"].is_null());
}

#[tokio::test]
async fn test_get_by_id_non_numeric_id_is_enveloped() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let response = app.get("/admin/employee/abc", Some(&token)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], 0);
    assert!(response.body["msg"].is_string());
}

#[tokio::test]
async fn test_status_change_without_id_is_enveloped() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let response = app
        .post_json("/admin/employee/status/1", json!({}), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], 0);
}

#[tokio::test]
async fn test_status_change_non_numeric_status_is_enveloped() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let response = app
        .post_json("/admin/employee/status/on?id=1", json!({}), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], 0);
}

#[tokio::test]
async fn test_create_employee_malformed_body_is_enveloped() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let response = app
        .send(
            "POST",
            "/admin/employee",
            Some(r#"{"username": "u1", "name": "#.into()),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], 0);
    assert!(response.body["msg"].is_string());
    assert_eq!(app.repo.len(), 1);
}

#[tokio::test]
async fn test_update_missing_id_is_enveloped() {
    let app = TestApp::new();
    let token = app.admin_token().await;

    let response = app
        .put_json("/admin/employee", json!({ "name": "NoId" }), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], 0);
}
