use color_eyre::eyre::Result;
use dotenv::dotenv;
use flightwatch_db::{create_pool, schema::initialize_database};
use flightwatch_notifier::config::NotifierConfig;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Flightwatch notification worker");

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = NotifierConfig::from_env()?;

    // Create database connection pool
    let db_pool = create_pool(&config.database_url).await?;

    // Initialize database schema
    initialize_database(&db_pool).await?;

    // Run the polling worker
    match flightwatch_notifier::start_worker(config, db_pool).await {
        Ok(_) => info!("Notification worker shut down gracefully"),
        Err(e) => error!("Notification worker error: {}", e),
    }

    Ok(())
}
