/**
 * Planet Database Operations
 *
 * Every query selects the seven columns explicitly so rows map straight
 * onto `Planet` via `sqlx::FromRow`.
 */
use sqlx::SqlitePool;

use crate::shared::{NewPlanet, Planet};

/// Load every planet, ordered by primary key
pub async fn get_all_planets(pool: &SqlitePool) -> Result<Vec<Planet>, sqlx::Error> {
    let planets = sqlx::query_as::<_, Planet>(
        r#"
        SELECT planet_id, planet_name, planet_type, home_star, mass, radius, distance
        FROM planets
        ORDER BY planet_id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(planets)
}

/// Get planet by ID
///
/// # Returns
/// Planet or None if not found
pub async fn get_planet_by_id(
    pool: &SqlitePool,
    planet_id: i64,
) -> Result<Option<Planet>, sqlx::Error> {
    let planet = sqlx::query_as::<_, Planet>(
        r#"
        SELECT planet_id, planet_name, planet_type, home_star, mass, radius, distance
        FROM planets
        WHERE planet_id = ?
        "#,
    )
    .bind(planet_id)
    .fetch_optional(pool)
    .await?;

    Ok(planet)
}

/// Insert a planet and return the stored row
pub async fn create_planet(pool: &SqlitePool, planet: &NewPlanet) -> Result<Planet, sqlx::Error> {
    let planet = sqlx::query_as::<_, Planet>(
        r#"
        INSERT INTO planets (planet_name, planet_type, home_star, mass, radius, distance)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING planet_id, planet_name, planet_type, home_star, mass, radius, distance
        "#,
    )
    .bind(&planet.planet_name)
    .bind(&planet.planet_type)
    .bind(&planet.home_star)
    .bind(planet.mass)
    .bind(planet.radius)
    .bind(planet.distance)
    .fetch_one(pool)
    .await?;

    Ok(planet)
}
