//! Integration tests for product CRUD, validation and the list query.

mod helpers;

use http::StatusCode;
use serde_json::{Value, json};

fn names(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .expect("data array")
        .iter()
        .map(|p| p["name"].as_str().expect("name").to_string())
        .collect()
}

#[tokio::test]
async fn test_create_and_get_product() {
    let app = helpers::TestApp::new();
    let token = app.login().await;

    let created = app
        .create_product(
            &token,
            json!({
                "name": "Standing Desk",
                "price": "249.5",
                "stock": 7,
                "imageUrl": "https://cdn.example.com/desk.png",
            }),
        )
        .await;

    assert_eq!(created["name"], "Standing Desk");
    assert_eq!(created["price"], 249.5);
    assert_eq!(created["stock"], 7);
    assert_eq!(created["imageUrl"], "https://cdn.example.com/desk.png");
    assert!(created["category"].is_null());

    let id = created["id"].as_str().expect("id");
    let fetched = app
        .request("GET", &format!("/api/products/{id}"), None, Some(&token))
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["name"], "Standing Desk");
}

#[tokio::test]
async fn test_validation_rejects_bad_numbers() {
    let app = helpers::TestApp::new();
    let token = app.login().await;

    let cases = [
        (json!({ "name": "Lamp", "price": 0, "stock": 1 }), "price"),
        (json!({ "name": "Lamp", "price": -1, "stock": 1 }), "price"),
        (json!({ "name": "Lamp", "price": 5, "stock": -1 }), "stock"),
        (json!({ "name": "Lamp", "price": 5, "stock": 2.5 }), "stock"),
        (json!({ "name": "L", "price": 5, "stock": 1 }), "name"),
        (
            json!({ "name": "Lamp", "price": 5, "stock": 1, "imageUrl": "not a url" }),
            "imageUrl",
        ),
    ];

    for (body, field) in cases {
        let response = app
            .request("POST", "/api/products", Some(body.clone()), Some(&token))
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(response.body["error"], "VALIDATION_ERROR");
        let errors = response.body["details"]["errors"]
            .as_array()
            .expect("field errors");
        assert!(
            errors.iter().any(|e| e["field"] == field),
            "expected {field} error for {body}: {errors:?}"
        );
    }

    let list = app.request("GET", "/api/products", None, Some(&token)).await;
    assert_eq!(list.body["total"], 0);
}

#[tokio::test]
async fn test_malformed_json_is_a_validation_error() {
    let app = helpers::TestApp::new();
    let token = app.login().await;

    let response = app
        .request("POST", "/api/products", Some(json!([1, 2, 3])), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_update_and_delete_product() {
    let app = helpers::TestApp::new();
    let token = app.login().await;

    let created = app
        .create_product(&token, json!({ "name": "Chair", "price": 40, "stock": 3 }))
        .await;
    let id = created["id"].as_str().expect("id");
    let path = format!("/api/products/{id}");

    let updated = app
        .request(
            "PUT",
            &path,
            Some(json!({ "name": "Office Chair", "price": 45, "stock": 0 })),
            Some(&token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["name"], "Office Chair");
    assert_eq!(updated.body["stock"], 0);

    let deleted = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["message"], "Product deleted successfully");

    let gone = app.request("GET", &path, None, Some(&token)).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_and_malformed_ids() {
    let app = helpers::TestApp::new();
    let token = app.login().await;
    let missing = "/api/products/7d9f2c1e-8d6b-4b7a-9a51-2f7c3f0e1a22";

    let update = app
        .request(
            "PUT",
            missing,
            Some(json!({ "name": "Ghost", "price": 1, "stock": 1 })),
            Some(&token),
        )
        .await;
    assert_eq!(update.status, StatusCode::NOT_FOUND);

    let delete = app.request("DELETE", missing, None, Some(&token)).await;
    assert_eq!(delete.status, StatusCode::NOT_FOUND);

    let malformed = app
        .request("GET", "/api/products/not-a-uuid", None, Some(&token))
        .await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_pagination_metadata() {
    let app = helpers::TestApp::new();
    let token = app.login().await;

    for i in 1..=45 {
        app.create_product(
            &token,
            json!({ "name": format!("Item {i:02}"), "price": 1, "stock": 10 }),
        )
        .await;
    }

    let page = app
        .request("GET", "/api/products?page=3&limit=20", None, Some(&token))
        .await;
    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(page.body["total"], 45);
    assert_eq!(page.body["page"], 3);
    assert_eq!(page.body["totalPages"], 3);
    assert_eq!(
        names(&page.body),
        vec!["Item 41", "Item 42", "Item 43", "Item 44", "Item 45"]
    );

    let beyond = app
        .request("GET", "/api/products?page=9&limit=20", None, Some(&token))
        .await;
    assert_eq!(beyond.status, StatusCode::OK);
    assert!(names(&beyond.body).is_empty());

    let clamped = app
        .request("GET", "/api/products?limit=500", None, Some(&token))
        .await;
    assert_eq!(clamped.body["limit"], 100);
    assert_eq!(names(&clamped.body).len(), 45);
}

#[tokio::test]
async fn test_list_expands_category_name() {
    let app = helpers::TestApp::new();
    let token = app.login().await;

    let category = app.create_category(&token, "Lighting").await;
    let category_id = category["id"].as_str().expect("id");

    app.create_product(
        &token,
        json!({ "name": "Desk Lamp", "price": 20, "stock": 4, "category": category_id }),
    )
    .await;

    let list = app.request("GET", "/api/products", None, Some(&token)).await;
    let item = &list.body["data"][0];
    assert_eq!(item["category"]["id"], category_id);
    assert_eq!(item["category"]["name"], "Lighting");
}

#[tokio::test]
async fn test_table_view_filters_within_page() {
    let app = helpers::TestApp::new();
    let token = app.login().await;

    let rows = [("Bolt", 0), ("Nut", 3), ("Screw", 12), ("Washer", 2)];
    for (name, stock) in rows {
        app.create_product(&token, json!({ "name": name, "price": 1, "stock": stock }))
            .await;
    }

    let low = app
        .request("GET", "/api/products?stock=low&sort=stock-desc", None, Some(&token))
        .await;
    assert_eq!(names(&low.body), vec!["Nut", "Washer"]);
    assert_eq!(low.body["total"], 4);

    let out = app
        .request("GET", "/api/products?stock=out", None, Some(&token))
        .await;
    assert_eq!(names(&out.body), vec!["Bolt"]);

    let search = app
        .request("GET", "/api/products?search=SCR", None, Some(&token))
        .await;
    assert_eq!(names(&search.body), vec!["Screw"]);

    // Filtering runs after pagination: page 1 of size 2 only holds Bolt and Nut.
    let paged = app
        .request("GET", "/api/products?limit=2&stock=low", None, Some(&token))
        .await;
    assert_eq!(names(&paged.body), vec!["Nut"]);
    assert_eq!(paged.body["totalPages"], 2);

    let bad = app
        .request("GET", "/api/products?sort=random", None, Some(&token))
        .await;
    assert_eq!(bad.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_mutations_are_audited() {
    let app = helpers::TestApp::new();
    let token = app.login().await;

    let created = app
        .create_product(&token, json!({ "name": "Shelf", "price": 15, "stock": 9 }))
        .await;
    let id = created["id"].as_str().expect("id");
    app.request("DELETE", &format!("/api/products/{id}"), None, Some(&token))
        .await;

    let audit = app.request("GET", "/api/audit", None, Some(&token)).await;
    assert_eq!(audit.status, StatusCode::OK);
    assert_eq!(audit.body["total"], 2);

    let newest = &audit.body["data"][0];
    assert_eq!(newest["action"], "delete");
    assert_eq!(newest["resource"], "product");
    assert_eq!(newest["resourceId"], id);
    assert_eq!(newest["user"], "admin");
    assert_eq!(newest["meta"]["name"], "Shelf");

    let creates = app
        .request("GET", "/api/audit?action=create", None, Some(&token))
        .await;
    assert_eq!(creates.body["total"], 1);
}
