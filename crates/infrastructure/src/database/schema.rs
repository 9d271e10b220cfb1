use sqlx::SqlitePool;
use tracing::{info, instrument};

const CREATE_POKEMON_TABLE: &str = "CREATE TABLE IF NOT EXISTS pokemon (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    description TEXT NOT NULL,
    category TEXT NOT NULL,
    hp INTEGER NOT NULL,
    attack INTEGER NOT NULL,
    defense INTEGER NOT NULL,
    speed INTEGER NOT NULL
)";

const CREATE_CATEGORY_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_pokemon_category ON pokemon (category)";

/// Ensures the pokemon table exists. Safe to run on every start.
///
/// Errors are returned to the caller: the service must not accept traffic
/// against a store it could not prepare.
#[instrument(skip(pool))]
pub async fn initialize_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut conn = pool.acquire().await?;

    sqlx::query(CREATE_POKEMON_TABLE)
        .execute(&mut *conn)
        .await?;
    sqlx::query(CREATE_CATEGORY_INDEX)
        .execute(&mut *conn)
        .await?;

    info!("Pokemon schema ready");
    Ok(())
}
