/**
 * Planet Records
 *
 * This module defines the planet record as stored in the `planets` table
 * and serialized by `GET /planets`. Only the name is required; every other
 * column is a nullable scalar, and is serialized as `null` when absent so
 * each object always carries all seven fields.
 */
use serde::{Deserialize, Serialize};

/// A planet row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct Planet {
    /// Primary key
    pub planet_id: i64,
    /// Planet name
    pub planet_name: String,
    /// Type classification (e.g. "Class D")
    pub planet_type: Option<String>,
    /// Star the planet orbits
    pub home_star: Option<String>,
    /// Mass in kilograms
    pub mass: Option<f64>,
    /// Radius in miles
    pub radius: Option<f64>,
    /// Orbital distance in miles
    pub distance: Option<f64>,
}

/// Fields for inserting a planet
///
/// # Example
/// ```rust
/// use planetary_api::shared::NewPlanet;
///
/// let earth = NewPlanet::named("Earth")
///     .with_mass(5.972e24)
///     .with_radius(3959.0)
///     .with_distance(92.96e6);
/// assert_eq!(earth.planet_name, "Earth");
/// assert!(earth.planet_type.is_none());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewPlanet {
    pub planet_name: String,
    pub planet_type: Option<String>,
    pub home_star: Option<String>,
    pub mass: Option<f64>,
    pub radius: Option<f64>,
    pub distance: Option<f64>,
}

impl NewPlanet {
    /// Start a planet with only its name set
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            planet_name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_type(mut self, planet_type: impl Into<String>) -> Self {
        self.planet_type = Some(planet_type.into());
        self
    }

    pub fn with_home_star(mut self, home_star: impl Into<String>) -> Self {
        self.home_star = Some(home_star.into());
        self
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = Some(mass);
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = Some(distance);
        self
    }
}
