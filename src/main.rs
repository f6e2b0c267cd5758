use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use superheroes_service::config::Config;
use superheroes_service::{build_router, db, seed, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,superheroes_service=debug".into()),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    info!("Connecting to {}...", config.database_url);
    let pool = db::connect(&config.database_url, config.max_connections)
        .await
        .context("failed to open the database")?;
    info!("Database connection pool established.");

    info!("Running migrations...");
    db::migrate(&pool).await.context("failed to run migrations")?;
    info!("Migrations complete.");

    if config.seed_database {
        let mut rng = StdRng::from_entropy();
        seed::seed_database(&pool, &mut rng)
            .await
            .context("failed to seed the database")?;
    }

    let app = build_router(AppState { db: pool });

    let addr = format!("{}:{}", config.host, config.port);
    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
