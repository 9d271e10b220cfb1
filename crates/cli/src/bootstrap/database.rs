use pokedex_domain::config::DatabaseConfig;
use pokedex_infrastructure::database::{create_pool, initialize_schema};
use sqlx::SqlitePool;
use tracing::{error, info};

pub async fn init_database(database_url: &str, cfg: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    info!("Initializing database: {}", database_url);

    let pool = create_pool(database_url, cfg).await.map_err(|e| {
        error!("Failed to open database: {}", e);
        anyhow::anyhow!(e)
    })?;

    initialize_schema(&pool).await.map_err(|e| {
        error!("Failed to initialize schema: {}", e);
        anyhow::anyhow!(e)
    })?;

    info!(
        "Database initialized successfully (max_connections={})",
        cfg.max_connections
    );

    Ok(pool)
}
