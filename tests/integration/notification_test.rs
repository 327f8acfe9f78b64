//! Integration tests for the notification feed and dashboard report.

mod helpers;

use http::StatusCode;
use serde_json::{Value, json};

async fn seed_three(app: &helpers::TestApp, token: &str) {
    for (name, stock) in [("Empty Bin", 0), ("Few Left", 3), ("Plenty", 10)] {
        app.create_product(token, json!({ "name": name, "price": 2, "stock": stock }))
            .await;
    }
}

fn field<'a>(notifications: &'a [Value], key: &str) -> Vec<&'a str> {
    notifications
        .iter()
        .map(|n| n[key].as_str().expect("string field"))
        .collect()
}

#[tokio::test]
async fn test_feed_in_emission_order() {
    let app = helpers::TestApp::new();
    let token = app.login().await;
    seed_three(&app, &token).await;

    let response = app
        .request("GET", "/api/notifications", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["count"], 4);

    let notifications = response.body["notifications"].as_array().expect("array");
    assert_eq!(
        field(notifications, "type"),
        vec!["low-stock", "low-stock", "uncategorized", "no-image"]
    );
    assert_eq!(
        field(notifications, "severity"),
        vec!["critical", "warning", "info", "info"]
    );
    assert_eq!(notifications[0]["productName"], "Empty Bin");
    assert_eq!(notifications[0]["stock"], 0);
    assert_eq!(notifications[2]["id"], "uncategorized");
    assert_eq!(notifications[2]["count"], 3);
    assert_eq!(notifications[3]["count"], 3);

    assert_eq!(response.body["summary"]["critical"], 1);
    assert_eq!(response.body["summary"]["warning"], 1);
    assert_eq!(response.body["summary"]["info"], 2);
}

#[tokio::test]
async fn test_sorted_view_orders_by_severity() {
    let app = helpers::TestApp::new();
    let token = app.login().await;

    for (name, stock) in [("Warn", 4), ("Crit", 0)] {
        app.create_product(
            &token,
            json!({
                "name": name,
                "price": 2,
                "stock": stock,
                "imageUrl": "https://cdn.example.com/x.png",
            }),
        )
        .await;
    }

    let response = app
        .request("GET", "/api/notifications?view=sorted", None, Some(&token))
        .await;
    let notifications = response.body["notifications"].as_array().expect("array");
    assert_eq!(
        field(notifications, "severity"),
        vec!["critical", "warning", "info"]
    );
    assert_eq!(notifications[0]["productName"], "Crit");
}

#[tokio::test]
async fn test_empty_catalog_has_no_notifications() {
    let app = helpers::TestApp::new();
    let token = app.login().await;

    let response = app
        .request("GET", "/api/notifications", None, Some(&token))
        .await;
    assert_eq!(response.body["count"], 0);
    assert_eq!(response.body["notifications"], json!([]));
}

#[tokio::test]
async fn test_threshold_comes_from_config() {
    let mut config = shelfdesk_core::config::AppConfig::default();
    config.catalog.low_stock_threshold = 2;
    let app = helpers::TestApp::with_config(config);
    let token = app.login().await;
    seed_three(&app, &token).await;

    let response = app
        .request("GET", "/api/notifications", None, Some(&token))
        .await;
    let notifications = response.body["notifications"].as_array().expect("array");
    let low: Vec<_> = notifications
        .iter()
        .filter(|n| n["type"] == "low-stock")
        .collect();
    assert_eq!(low.len(), 1);
}

#[tokio::test]
async fn test_dashboard_report() {
    let app = helpers::TestApp::new();
    let token = app.login().await;

    let category = app.create_category(&token, "Bins").await;
    app.create_product(
        &token,
        json!({ "name": "Big Bin", "price": 10, "stock": 4, "category": category["id"] }),
    )
    .await;
    seed_three(&app, &token).await;

    let response = app.request("GET", "/api/dashboard", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);

    let report = &response.body;
    assert_eq!(report["totalProducts"], 4);
    assert_eq!(report["totalStock"], 17);
    assert_eq!(report["inventoryValue"], 66.0);
    assert_eq!(report["outOfStock"], 1);
    assert_eq!(report["lowStock"], 2);
    assert_eq!(report["highestValueProduct"]["name"], "Big Bin");

    let buckets = report["inventoryByCategory"].as_array().expect("array");
    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0]["name"], "Bins");
    assert_eq!(buckets[1]["name"], "Uncategorized");
    assert_eq!(buckets[1]["count"], 3);
}
