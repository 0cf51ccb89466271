mod common;

use axum::http::StatusCode;

use common::{Factory, TestApp};

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let response = app.server.get("/").await;

    response.assert_status(StatusCode::OK);
    response.assert_text("Hello, API Console!");
}

#[tokio::test]
async fn test_menu() {
    let app = TestApp::new();

    let response = app.server.get("/api/console/menu").await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    let items = body["items"].as_array().unwrap();
    let keys: Vec<&str> = items.iter().map(|i| i["key"].as_str().unwrap()).collect();
    assert_eq!(
        keys,
        vec!["apis", "datasources", "permissions", "variables", "history", "clients"]
    );
    assert!(items[0]["implemented"].as_bool().unwrap());
    assert!(!items[1]["implemented"].as_bool().unwrap());
}

#[tokio::test]
async fn test_breadcrumb_defaults_to_apis() {
    let app = TestApp::new();

    let body: serde_json::Value = app.server.get("/api/console/breadcrumb").await.json();
    assert_eq!(body["items"], serde_json::json!(["Home", "API Management"]));
}

#[tokio::test]
async fn test_breadcrumb_selected_menu() {
    let app = TestApp::new();

    let body: serde_json::Value = app
        .server
        .get("/api/console/breadcrumb?menu=variables")
        .await
        .json();
    assert_eq!(body["items"], serde_json::json!(["Home", "Global Variables"]));
}

#[tokio::test]
async fn test_breadcrumb_unknown_menu() {
    let app = TestApp::new();

    let body: serde_json::Value = app
        .server
        .get("/api/console/breadcrumb?menu=billing")
        .await
        .json();
    assert_eq!(body["items"], serde_json::json!(["Home", "Unknown"]));
}

#[tokio::test]
async fn test_apis_section() {
    let app = TestApp::new();

    let response = app.server.get("/api/console/sections/apis").await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["title"].as_str().unwrap(), "API Management");
    assert_eq!(body["records_path"].as_str().unwrap(), "/api/apis");
    assert!(body.get("message").is_none());
}

#[tokio::test]
async fn test_placeholder_section_leaves_store_alone() {
    let app = TestApp::new();
    let factory = Factory::new(&app.state);
    factory.create_api("Orders API", "Checkout").await;

    let response = app.server.get("/api/console/sections/permissions").await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["title"].as_str().unwrap(), "Permissions");
    assert_eq!(
        body["message"].as_str().unwrap(),
        "This feature is coming soon..."
    );
    assert_eq!(body["breadcrumb"], serde_json::json!(["Home", "Permissions"]));
    assert!(!body["implemented"].as_bool().unwrap());

    let list: serde_json::Value = app.server.get("/api/apis").await.json();
    assert_eq!(list["total"].as_u64().unwrap(), 1);
}

#[tokio::test]
async fn test_unknown_section() {
    let app = TestApp::new();

    let response = app.server.get("/api/console/sections/billing").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_notifications_follow_mutations() {
    let app = TestApp::new();
    let factory = Factory::new(&app.state);

    let api = factory.create_api("Orders API", "Checkout").await;
    app.server
        .post(&format!("/api/apis/{}/publish", api.id))
        .await
        .assert_status(StatusCode::OK);

    let response = app.server.get("/api/notifications").await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["message"].as_str().unwrap(), "API published successfully");
    assert_eq!(data[0]["level"].as_str().unwrap(), "success");
    assert_eq!(data[0]["api_id"].as_str().unwrap(), api.id.to_string());
    assert_eq!(data[1]["message"].as_str().unwrap(), "API created successfully");

    let body: serde_json::Value = app.server.get("/api/notifications?limit=1").await.json();
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}
