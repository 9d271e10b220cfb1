use async_trait::async_trait;
use pokedex_application::ports::PokemonRepository;
use pokedex_domain::{DomainError, Pokemon};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{error, instrument};

type PokemonRow = (i64, String, String, String, i64, i64, i64, i64);

pub struct SqlitePokemonRepository {
    pool: SqlitePool,
}

impl SqlitePokemonRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_pokemon(row: PokemonRow) -> Pokemon {
        let (id, name, description, category, hp, attack, defense, speed) = row;
        Pokemon {
            id,
            name: Arc::from(name.as_str()),
            description: Arc::from(description.as_str()),
            category: Arc::from(category.as_str()),
            hp,
            attack,
            defense,
            speed,
        }
    }
}

#[async_trait]
impl PokemonRepository for SqlitePokemonRepository {
    #[instrument(skip(self, pokemon), fields(pokemon_id = pokemon.id))]
    async fn insert(&self, pokemon: &Pokemon) -> Result<u64, DomainError> {
        let result = sqlx::query(
            "INSERT INTO pokemon (id, name, description, category, hp, attack, defense, speed)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(pokemon.id)
        .bind(pokemon.name.as_ref())
        .bind(pokemon.description.as_ref())
        .bind(pokemon.category.as_ref())
        .bind(pokemon.hp)
        .bind(pokemon.attack)
        .bind(pokemon.defense)
        .bind(pokemon.speed)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if e.to_string().contains("UNIQUE constraint failed") {
                DomainError::PokemonAlreadyExists(pokemon.id)
            } else {
                error!(error = %e, "Failed to insert pokemon");
                DomainError::DatabaseError(e.to_string())
            }
        })?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> Result<Option<Pokemon>, DomainError> {
        let row = sqlx::query_as::<_, PokemonRow>(
            "SELECT id, name, description, category, hp, attack, defense, speed
             FROM pokemon WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query pokemon by id");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Self::row_to_pokemon))
    }

    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<Pokemon>, DomainError> {
        let rows = sqlx::query_as::<_, PokemonRow>(
            "SELECT id, name, description, category, hp, attack, defense, speed
             FROM pokemon ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query all pokemon");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Self::row_to_pokemon).collect())
    }

    #[instrument(skip(self))]
    async fn get_by_category(&self, category: &str) -> Result<Vec<Pokemon>, DomainError> {
        let rows = sqlx::query_as::<_, PokemonRow>(
            "SELECT id, name, description, category, hp, attack, defense, speed
             FROM pokemon WHERE category = ? ORDER BY id ASC",
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query pokemon by category");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Self::row_to_pokemon).collect())
    }

    #[instrument(skip(self, pokemon), fields(pokemon_id = pokemon.id))]
    async fn update(&self, pokemon: &Pokemon) -> Result<u64, DomainError> {
        let result = sqlx::query(
            "UPDATE pokemon
             SET name = ?, description = ?, category = ?, hp = ?, attack = ?, defense = ?, speed = ?
             WHERE id = ?",
        )
        .bind(pokemon.name.as_ref())
        .bind(pokemon.description.as_ref())
        .bind(pokemon.category.as_ref())
        .bind(pokemon.hp)
        .bind(pokemon.attack)
        .bind(pokemon.defense)
        .bind(pokemon.speed)
        .bind(pokemon.id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to update pokemon");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM pokemon WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to delete pokemon");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(result.rows_affected())
    }
}
