//! Account Service - Main Application Entry Point
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create database connection pool
//! 3. Run database migrations (fatal on failure, exit code 4)
//! 4. Build HTTP router with routes and middleware
//! 5. Start server on configured port
//!
//! `account-service db-create` instead drops and recreates the tables, then exits.

use account_service::{AppState, config::Config, db, router, store::PgAccountStore};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Exit code reported when the database cannot be initialised.
///
/// Process supervisors treat it as "do not restart".
const INIT_FAILURE_EXIT_CODE: i32 = 4;

#[derive(Debug, Parser)]
#[command(name = "account-service", version, about = "Account REST API Service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Initialise the schema and serve HTTP requests (default)
    Serve,
    /// Drop and recreate the database tables. Destroys all data.
    DbCreate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::DbCreate => db_create(config).await,
    }
}

async fn serve(config: Config) -> anyhow::Result<()> {
    tracing::info!("{}", "*".repeat(70));
    tracing::info!("{:*^70}", "  A C C O U N T   S E R V I C E   R U N N I N G  ");
    tracing::info!("{}", "*".repeat(70));

    let pool = match init_database(&config).await {
        Ok(pool) => pool,
        Err(error) => {
            tracing::error!("{error:#}: Cannot continue");
            std::process::exit(INIT_FAILURE_EXIT_CODE);
        }
    };
    tracing::info!("Service initialized!");

    let app = router(AppState::new(PgAccountStore::new(pool)));

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Connect to PostgreSQL and bring the schema up to date.
async fn init_database(config: &Config) -> anyhow::Result<db::DbPool> {
    let pool = db::create_pool(
        &config.database_url,
        config.database_max_connections,
        config.acquire_timeout(),
    )
    .await?;
    tracing::info!("Database pool created");

    db::run_migrations(&pool).await?;
    tracing::info!("Database migrations complete");

    Ok(pool)
}

async fn db_create(config: Config) -> anyhow::Result<()> {
    let pool = db::create_pool(
        &config.database_url,
        config.database_max_connections,
        config.acquire_timeout(),
    )
    .await?;
    db::recreate_schema(&pool).await?;
    tracing::info!("Database tables recreated");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        // Keep serving; the process can still be killed
        tracing::error!(%error, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
