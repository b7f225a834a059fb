use axum::http::StatusCode;
use serde_json::json;

use cndr_core::{Page, User};

use super::{call, get, post_json, test_app};

#[tokio::test]
async fn test_create_then_fetch_user() {
    let app = test_app();

    let (status, body) = call(
        &app,
        post_json(
            "/users",
            &json!({ "name": "Test User", "email": "test@example.com" }),
        ),
    )
    .await
    .expect("Create failed");

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    let created: User = serde_json::from_value(body["data"].clone()).expect("Bad user payload");
    assert_eq!(created.name, "Test User");
    assert_eq!(created.email, "test@example.com");

    let (status, body) = call(&app, get(&format!("/users/{}", created.id)))
        .await
        .expect("Fetch failed");

    assert_eq!(status, StatusCode::OK);
    let fetched: User = serde_json::from_value(body["data"].clone()).expect("Bad user payload");
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_unknown_user_is_not_found() {
    let app = test_app();

    for uri in [
        "/users/00000000-0000-0000-0000-000000000000",
        "/users/not-a-uuid",
    ] {
        let (status, body) = call(&app, get(uri)).await.expect("Request failed");
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "success": false, "error": "User not found" }));
    }
}

#[tokio::test]
async fn test_list_users_paginates() {
    let app = test_app();

    for i in 0..3 {
        let (status, _) = call(
            &app,
            post_json(
                "/users",
                &json!({ "name": format!("user-{i}"), "email": format!("u{i}@example.com") }),
            ),
        )
        .await
        .expect("Create failed");
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = call(&app, get("/users")).await.expect("List failed");
    assert_eq!(status, StatusCode::OK);
    let page: Page<User> = serde_json::from_value(body["data"].clone()).expect("Bad page");
    assert_eq!(page.total, 3);
    assert_eq!(page.items.len(), 3);
    assert_eq!((page.page, page.limit), (1, 10));

    let (_, body) = call(&app, get("/users?page=2&limit=2")).await.expect("List failed");
    let page: Page<User> = serde_json::from_value(body["data"].clone()).expect("Bad page");
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.total, 3);
}

#[tokio::test]
async fn test_list_users_rejects_bad_pagination() {
    let app = test_app();

    for uri in ["/users?page=0", "/users?limit=0", "/users?page=abc"] {
        let (status, body) = call(&app, get(uri)).await.expect("Request failed");
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["success"], false);
        assert!(body["error"].is_string());
    }
}

#[tokio::test]
async fn test_create_user_validates_body() {
    let app = test_app();

    let (status, body) = call(&app, post_json("/users", &json!({ "name": "", "email": "x@y" })))
        .await
        .expect("Request failed");
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "name and email are required");

    let (status, body) = call(&app, post_json("/users", &json!({ "name": "only name" })))
        .await
        .expect("Request failed");
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}
