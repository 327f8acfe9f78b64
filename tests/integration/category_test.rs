//! Integration tests for category CRUD and the deletion guard.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_category_derives_slug() {
    let app = helpers::TestApp::new();
    let token = app.login().await;

    let created = app.create_category(&token, "  Office Chairs ").await;

    assert_eq!(created["name"], "Office Chairs");
    assert_eq!(created["slug"], "office-chairs");
    assert_eq!(created["description"], "");
}

#[tokio::test]
async fn test_category_name_length() {
    let app = helpers::TestApp::new();
    let token = app.login().await;

    let short = app
        .request("POST", "/api/categories", Some(json!({ "name": "A" })), Some(&token))
        .await;
    assert_eq!(short.status, StatusCode::BAD_REQUEST);
    assert_eq!(short.body["details"]["errors"][0]["field"], "name");

    let empty = app
        .request("POST", "/api/categories", Some(json!({ "name": "" })), Some(&token))
        .await;
    assert_eq!(empty.status, StatusCode::BAD_REQUEST);

    let two = app
        .request("POST", "/api/categories", Some(json!({ "name": "AB" })), Some(&token))
        .await;
    assert_eq!(two.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_duplicate_name_conflicts() {
    let app = helpers::TestApp::new();
    let token = app.login().await;

    app.create_category(&token, "Storage").await;
    let again = app
        .request(
            "POST",
            "/api/categories",
            Some(json!({ "name": "Storage" })),
            Some(&token),
        )
        .await;

    assert_eq!(again.status, StatusCode::CONFLICT);
    assert_eq!(again.body["error"], "CONFLICT");
}

#[tokio::test]
async fn test_list_sorted_by_name() {
    let app = helpers::TestApp::new();
    let token = app.login().await;

    for name in ["Tools", "Lighting", "Desks"] {
        app.create_category(&token, name).await;
    }

    let list = app
        .request("GET", "/api/categories?limit=2", None, Some(&token))
        .await;
    assert_eq!(list.status, StatusCode::OK);
    assert_eq!(list.body["total"], 3);
    assert_eq!(list.body["totalPages"], 2);
    assert_eq!(list.body["data"][0]["name"], "Desks");
    assert_eq!(list.body["data"][1]["name"], "Lighting");
}

#[tokio::test]
async fn test_update_renames_and_reslugs() {
    let app = helpers::TestApp::new();
    let token = app.login().await;

    let created = app.create_category(&token, "Lamps").await;
    let id = created["id"].as_str().expect("id");

    let updated = app
        .request(
            "PUT",
            &format!("/api/categories/{id}"),
            Some(json!({ "name": "Desk Lamps", "description": "Task lighting" })),
            Some(&token),
        )
        .await;

    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["slug"], "desk-lamps");
    assert_eq!(updated.body["description"], "Task lighting");
}

#[tokio::test]
async fn test_delete_referenced_category_is_rejected() {
    let app = helpers::TestApp::new();
    let token = app.login().await;

    let category = app.create_category(&token, "Seating").await;
    let id = category["id"].as_str().expect("id");
    for name in ["Stool", "Bench"] {
        app.create_product(
            &token,
            json!({ "name": name, "price": 30, "stock": 8, "category": id }),
        )
        .await;
    }

    let path = format!("/api/categories/{id}");
    let response = app.request("DELETE", &path, None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(
        response.body["message"],
        "Cannot delete category. It is used by 2 product(s)."
    );

    let still_there = app.request("GET", &path, None, Some(&token)).await;
    assert_eq!(still_there.status, StatusCode::OK);
    assert_eq!(still_there.body["name"], "Seating");
}

#[tokio::test]
async fn test_delete_unreferenced_category() {
    let app = helpers::TestApp::new();
    let token = app.login().await;

    let category = app.create_category(&token, "Clearance").await;
    let path = format!("/api/categories/{}", category["id"].as_str().expect("id"));

    let response = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Category deleted successfully");

    let gone = app.request("GET", &path, None, Some(&token)).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);

    let again = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}
