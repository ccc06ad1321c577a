/**
 * Planet Handlers
 *
 * - `GET /planets` - the whole catalogue as a JSON array
 * - `GET /planets/{planet_id}` - one planet, or 404
 */
use axum::{
    extract::{Path, State},
    response::Json,
};
use sqlx::SqlitePool;

use crate::backend::error::ApiError;
use crate::backend::planets::db::{get_all_planets, get_planet_by_id};
use crate::shared::Planet;

pub const PLANET_NOT_FOUND: &str = "That planet does not exist";

/// List every planet
///
/// # Example Response
///
/// ```json
/// [
///   {
///     "planet_id": 3,
///     "planet_name": "Earth",
///     "planet_type": "Class M",
///     "home_star": "Sol",
///     "mass": 5.972e24,
///     "radius": 3959.0,
///     "distance": 92960000.0
///   }
/// ]
/// ```
pub async fn list_planets(State(pool): State<SqlitePool>) -> Result<Json<Vec<Planet>>, ApiError> {
    let planets = get_all_planets(&pool).await?;
    tracing::debug!("Listing {} planets", planets.len());
    Ok(Json(planets))
}

/// Get one planet by ID
///
/// # Errors
///
/// * `404 Not Found` - no planet has that ID
pub async fn planet_details(
    State(pool): State<SqlitePool>,
    Path(planet_id): Path<i64>,
) -> Result<Json<Planet>, ApiError> {
    get_planet_by_id(&pool, planet_id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(PLANET_NOT_FOUND))
}
