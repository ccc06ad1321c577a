//! Database test fixtures and utilities
//!
//! Every fixture owns a fresh in-memory SQLite database with the schema
//! already created, so tests never share state.

use planetary_api::backend::db::{connect, create_schema};
use planetary_api::backend::planets::db::create_planet;
use planetary_api::shared::{NewPlanet, Planet};
use sqlx::SqlitePool;

/// Test database fixture
pub struct TestDatabase {
    pool: SqlitePool,
}

impl TestDatabase {
    /// Create an empty database with the schema in place
    pub async fn new() -> Self {
        let pool = connect("sqlite::memory:")
            .await
            .expect("Failed to create test database pool");
        create_schema(&pool)
            .await
            .expect("Failed to create test schema");
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Insert planets in order and return the stored rows
    pub async fn insert_planets(&self, planets: &[NewPlanet]) -> Vec<Planet> {
        let mut stored = Vec::with_capacity(planets.len());
        for planet in planets {
            stored.push(
                create_planet(&self.pool, planet)
                    .await
                    .expect("Failed to insert test planet"),
            );
        }
        stored
    }
}

/// The Earth row used throughout the planet tests
pub fn earth() -> NewPlanet {
    NewPlanet::named("Earth")
        .with_type("Class M")
        .with_home_star("Sol")
        .with_mass(5.972e24)
        .with_radius(3959.0)
        .with_distance(92.96e6)
}
