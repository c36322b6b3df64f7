//! HTTP-level tests for the dashboard endpoint.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, get, post_json, put_json};
use inkflow_db::store::InMemoryProjectStore;
use serde_json::json;

#[tokio::test]
async fn empty_store_reports_zero_stats() {
    let app = common::build_test_app();
    let response = get(app, "/api/dashboard").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["projects"], json!([]));
    assert_eq!(
        json["stats"],
        json!({
            "totalBooks": 0,
            "completedBooks": 0,
            "inProgressBooks": 0,
            "totalUsers": 0
        })
    );
}

#[tokio::test]
async fn demo_data_stats() {
    let app = common::build_test_app_with(Arc::new(InMemoryProjectStore::with_demo_data()));
    let json = body_json(get(app, "/api/dashboard").await).await;

    assert_eq!(json["projects"].as_array().unwrap().len(), 2);
    assert_eq!(json["stats"]["totalBooks"], 2);
    assert_eq!(json["stats"]["completedBooks"], 1);
    assert_eq!(json["stats"]["inProgressBooks"], 1);
}

#[tokio::test]
async fn drafts_count_only_toward_total() {
    let app = common::build_test_app();
    for status in ["Draft", "In Progress", "Completed"] {
        let created = body_json(post_json(app.clone(), "/api/projects", json!({})).await).await;
        let id = created["id"].as_i64().unwrap();
        put_json(
            app.clone(),
            &format!("/api/projects/{id}"),
            json!({"status": status}),
        )
        .await;
    }

    let json = body_json(get(app, "/api/dashboard").await).await;
    assert_eq!(json["stats"]["totalBooks"], 3);
    assert_eq!(json["stats"]["completedBooks"], 1);
    assert_eq!(json["stats"]["inProgressBooks"], 1);
}

#[tokio::test]
async fn dashboard_is_owner_scoped() {
    let app = common::build_test_app();
    post_json(app.clone(), "/api/projects?userId=5", json!({"title": "a"})).await;
    post_json(app.clone(), "/api/projects", json!({"title": "b"})).await;

    let json = body_json(get(app.clone(), "/api/dashboard?userId=5").await).await;
    assert_eq!(json["stats"]["totalBooks"], 1);

    let json = body_json(get(app, "/api/dashboard").await).await;
    assert_eq!(json["stats"]["totalBooks"], 2);
}
