use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hospital_admin::config::AppConfig;
use hospital_admin::database::Database;
use hospital_admin::pages;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hospital_admin=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting hospital admin dashboard");

    let config = AppConfig::load()?;
    info!("Configuration loaded");

    let database = Database::new(&config.database_path).await?;
    database.run_migrations().await?;
    info!("Record store ready");

    let addr = config.bind_address();
    let app = pages::router(config, database);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
