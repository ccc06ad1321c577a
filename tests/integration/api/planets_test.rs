//! Planet catalogue integration tests

use axum::http::StatusCode;
use planetary_api::backend::db::seed::sample_planets;
use planetary_api::shared::{NewPlanet, Planet};
use pretty_assertions::assert_eq;

use crate::assert_message;
use crate::common::{earth, TestApp};

#[tokio::test]
async fn test_empty_catalogue() {
    let app = TestApp::new().await;
    let response = app.server.get("/planets").await;

    response.assert_status_ok();
    response.assert_json(&serde_json::json!([]));
}

#[tokio::test]
async fn test_single_earth() {
    let app = TestApp::new().await;
    app.db.insert_planets(&[earth()]).await;

    let response = app.server.get("/planets").await;
    response.assert_status_ok();

    let planets: Vec<Planet> = response.json();
    assert_eq!(planets.len(), 1);
    assert_eq!(planets[0].planet_name, "Earth");
    assert_eq!(planets[0].mass, Some(5.972e24));
    assert_eq!(planets[0].radius, Some(3959.0));
    assert_eq!(planets[0].distance, Some(92.96e6));
}

#[tokio::test]
async fn test_one_element_per_planet_with_seven_fields() {
    let app = TestApp::new().await;
    let mut planets = sample_planets();
    planets.push(NewPlanet::named("Pluto"));
    app.db.insert_planets(&planets).await;

    let response = app.server.get("/planets").await;
    let body: Vec<serde_json::Value> = response.json();

    assert_eq!(body.len(), 4);
    for planet in &body {
        let object = planet.as_object().unwrap();
        assert_eq!(object.len(), 7, "fields: {:?}", object.keys().collect::<Vec<_>>());
    }

    // Absent optional values are explicit nulls
    assert_eq!(body[3]["planet_name"], "Pluto");
    assert!(body[3]["planet_type"].is_null());
    assert!(body[3]["mass"].is_null());
}

#[tokio::test]
async fn test_ordered_by_id() {
    let app = TestApp::new().await;
    app.db.insert_planets(&sample_planets()).await;

    let planets: Vec<Planet> = app.server.get("/planets").await.json();
    let names: Vec<_> = planets.iter().map(|p| p.planet_name.as_str()).collect();
    assert_eq!(names, vec!["Mercury", "Venus", "Earth"]);
}

#[tokio::test]
async fn test_planet_details() {
    let app = TestApp::new().await;
    let stored = app.db.insert_planets(&[earth()]).await;

    let response = app
        .server
        .get(&format!("/planets/{}", stored[0].planet_id))
        .await;

    response.assert_status_ok();
    let planet: Planet = response.json();
    assert_eq!(planet, stored[0]);
}

#[tokio::test]
async fn test_planet_details_not_found() {
    let app = TestApp::new().await;
    let response = app.server.get("/planets/999").await;

    assert_message!(response, StatusCode::NOT_FOUND, "That planet does not exist");
}

#[tokio::test]
async fn test_planet_details_non_integer_id() {
    let app = TestApp::new().await;
    let response = app.server.get("/planets/earth").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}
