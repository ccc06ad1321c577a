/**
 * Planetary API Server Entry Point
 *
 * Runs the HTTP server, or one of the database commands
 * (`db-create`, `db-drop`, `db-seed`).
 */
use clap::Parser;

use planetary_api::backend::auth::PasswordHasher;
use planetary_api::backend::cli::{Cli, Command};
use planetary_api::backend::db::{self, seed::seed};
use planetary_api::backend::server::config::{Config, DatabaseConfig};
use planetary_api::backend::server::init::create_app;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let cli = Cli::parse();

    match cli.command() {
        Command::Serve => serve().await?,
        Command::DbCreate => {
            let pool = db::connect(&DatabaseConfig::from_env().url).await?;
            db::create_schema(&pool).await?;
            println!("Database created!");
        }
        Command::DbDrop => {
            let pool = db::connect(&DatabaseConfig::from_env().url).await?;
            db::drop_schema(&pool).await?;
            println!("Database dropped!");
        }
        Command::DbSeed => {
            let pool = db::connect(&DatabaseConfig::from_env().url).await?;
            db::create_schema(&pool).await?;
            let report = seed(&pool, &PasswordHasher::default()).await?;
            println!(
                "Database seeded! ({} planets, {} users)",
                report.planets, report.users
            );
        }
    }

    Ok(())
}

async fn serve() -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Server initialization started");

    let config = Config::from_env()?;
    let app = create_app(&config).await?;

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
