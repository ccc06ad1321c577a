//! Schema commands and seeding against a temporary database file

use planetary_api::backend::auth::users::{count_users, get_user_by_email};
use planetary_api::backend::auth::PasswordHasher;
use planetary_api::backend::db::seed::{seed, SEED_USER_EMAIL, SEED_USER_PASSWORD};
use planetary_api::backend::db::{connect, create_schema, drop_schema};
use planetary_api::backend::planets::db::get_all_planets;
use tempfile::TempDir;

fn database_url(dir: &TempDir) -> String {
    format!("sqlite://{}?mode=rwc", dir.path().join("planets.db").display())
}

#[tokio::test]
async fn test_seed_persists_across_connections() {
    let dir = TempDir::new().unwrap();
    let url = database_url(&dir);
    let passwords = PasswordHasher::new(4);

    {
        let pool = connect(&url).await.unwrap();
        create_schema(&pool).await.unwrap();
        let report = seed(&pool, &passwords).await.unwrap();
        assert_eq!(report.planets, 3);
        assert_eq!(report.users, 1);
        pool.close().await;
    }

    let pool = connect(&url).await.unwrap();
    assert_eq!(get_all_planets(&pool).await.unwrap().len(), 3);

    let user = get_user_by_email(&pool, SEED_USER_EMAIL).await.unwrap().unwrap();
    assert_eq!(user.first_name, "William");
    assert_eq!(user.last_name, "Herschel");
    assert!(passwords.verify(SEED_USER_PASSWORD, &user.password_hash).unwrap());
}

#[tokio::test]
async fn test_drop_then_create_starts_empty() {
    let dir = TempDir::new().unwrap();
    let pool = connect(&database_url(&dir)).await.unwrap();

    create_schema(&pool).await.unwrap();
    seed(&pool, &PasswordHasher::new(4)).await.unwrap();

    drop_schema(&pool).await.unwrap();
    create_schema(&pool).await.unwrap();

    assert!(get_all_planets(&pool).await.unwrap().is_empty());
    assert_eq!(count_users(&pool).await.unwrap(), 0);
}
