use pokedex_infrastructure::repositories::SqlitePokemonRepository;
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub pokemon: Arc<SqlitePokemonRepository>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pokemon: Arc::new(SqlitePokemonRepository::new(pool)),
        }
    }
}
