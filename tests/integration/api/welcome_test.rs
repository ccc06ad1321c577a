//! Greeting and age-gate integration tests

use axum::http::StatusCode;

use crate::assert_message;
use crate::common::TestApp;

#[tokio::test]
async fn test_home() {
    let app = TestApp::new().await;
    let response = app.server.get("/").await;

    response.assert_status_ok();
    response.assert_text("Hello World!");
}

#[tokio::test]
async fn test_super_simple() {
    let app = TestApp::new().await;
    let response = app.server.get("/super-simple").await;

    assert_message!(response, StatusCode::OK, "Hello from the Planetary API.");
}

#[tokio::test]
async fn test_not_found_route() {
    let app = TestApp::new().await;
    let response = app.server.get("/not-found").await;

    assert_message!(response, StatusCode::NOT_FOUND, "That resource was not found");
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn test_unknown_route_uses_fallback() {
    let app = TestApp::new().await;
    let response = app.server.get("/no/such/route").await;

    assert_message!(response, StatusCode::NOT_FOUND, "That resource was not found");
}

#[tokio::test]
async fn test_parameters_old_enough() {
    let app = TestApp::new().await;
    let response = app
        .server
        .get("/parameters")
        .add_query_param("name", "Ada")
        .add_query_param("age", "36")
        .await;

    assert_message!(response, StatusCode::OK, "Welcome Ada, you are old enough!");
}

#[tokio::test]
async fn test_parameters_too_young() {
    let app = TestApp::new().await;
    let response = app.server.get("/parameters?name=Tim&age=17").await;

    assert_message!(response, StatusCode::UNAUTHORIZED, "Sorry Tim, you are not old enough.");
}

#[tokio::test]
async fn test_parameters_boundary_age() {
    let app = TestApp::new().await;
    let response = app.server.get("/parameters?name=Eve&age=18").await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_parameters_non_numeric_age_is_500() {
    let app = TestApp::new().await;
    let response = app.server.get("/parameters?name=Ada&age=abc").await;

    assert_message!(
        response,
        StatusCode::INTERNAL_SERVER_ERROR,
        "query parameter 'age' must be an integer, got 'abc'"
    );
}

#[tokio::test]
async fn test_parameters_missing_name_is_500() {
    let app = TestApp::new().await;
    let response = app.server.get("/parameters?age=30").await;

    assert_message!(
        response,
        StatusCode::INTERNAL_SERVER_ERROR,
        "missing query parameter 'name'"
    );
}

#[tokio::test]
async fn test_parameters_repeated_key_uses_first_value() {
    let app = TestApp::new().await;
    let response = app.server.get("/parameters?name=Ann&age=30&age=40").await;

    assert_message!(response, StatusCode::OK, "Welcome Ann, you are old enough!");
}

#[tokio::test]
async fn test_url_variables() {
    let app = TestApp::new().await;

    let response = app.server.get("/url-variables/Ada/36").await;
    assert_message!(response, StatusCode::OK, "Welcome Ada, you are old enough!");

    let response = app.server.get("/url-variables/Tim/12").await;
    assert_message!(response, StatusCode::UNAUTHORIZED, "Sorry Tim, you are not old enough.");
}

#[tokio::test]
async fn test_url_variables_non_numeric_age_is_400() {
    let app = TestApp::new().await;
    let response = app.server.get("/url-variables/x/abc").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}
