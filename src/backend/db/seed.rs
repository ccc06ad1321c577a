//! Sample rows for the `db-seed` command.

use sqlx::SqlitePool;

use crate::backend::auth::passwords::PasswordHasher;
use crate::backend::auth::users::{create_user, get_user_by_email, NewUser};
use crate::backend::error::InitError;
use crate::backend::planets::db::create_planet;
use crate::shared::NewPlanet;

pub const SEED_USER_EMAIL: &str = "test@test.com";
pub const SEED_USER_PASSWORD: &str = "P@ssw0rd";

/// The three sample planets
pub fn sample_planets() -> Vec<NewPlanet> {
    vec![
        NewPlanet::named("Mercury")
            .with_type("Class D")
            .with_home_star("Sol")
            .with_mass(3.258e23)
            .with_radius(1516.0)
            .with_distance(35.98e6),
        NewPlanet::named("Venus")
            .with_type("Class K")
            .with_home_star("Sol")
            .with_mass(4.867e24)
            .with_radius(3760.0)
            .with_distance(67.24e6),
        NewPlanet::named("Earth")
            .with_type("Class M")
            .with_home_star("Sol")
            .with_mass(5.972e24)
            .with_radius(3959.0)
            .with_distance(92.96e6),
    ]
}

/// Counts of rows inserted by `seed`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub planets: usize,
    pub users: usize,
}

/// Insert the sample planets and the sample user
///
/// The sample user is skipped when its email is already registered, so
/// seeding twice does not violate the unique constraint.
pub async fn seed(pool: &SqlitePool, passwords: &PasswordHasher) -> Result<SeedReport, InitError> {
    let mut report = SeedReport { planets: 0, users: 0 };

    for planet in sample_planets() {
        create_planet(pool, &planet).await?;
        report.planets += 1;
    }

    if get_user_by_email(pool, SEED_USER_EMAIL).await?.is_none() {
        let user = NewUser {
            first_name: "William".to_string(),
            last_name: "Herschel".to_string(),
            email: SEED_USER_EMAIL.to_string(),
            password_hash: passwords.hash(SEED_USER_PASSWORD)?,
        };
        create_user(pool, &user).await?;
        report.users += 1;
    } else {
        tracing::warn!("Seed user {} already exists, skipping", SEED_USER_EMAIL);
    }

    tracing::info!(
        "Database seeded with {} planets and {} users",
        report.planets,
        report.users
    );
    Ok(report)
}
