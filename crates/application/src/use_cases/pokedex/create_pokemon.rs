use pokedex_domain::{DomainError, Pokemon};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::ports::PokemonRepository;

pub struct CreatePokemonUseCase {
    repo: Arc<dyn PokemonRepository>,
}

impl CreatePokemonUseCase {
    pub fn new(repo: Arc<dyn PokemonRepository>) -> Self {
        Self { repo }
    }

    /// Returns `false` without writing when the id is already taken.
    ///
    /// A concurrent insert that slips past the existence check is caught by
    /// the primary key and reported the same way.
    #[instrument(skip(self, pokemon), fields(pokemon_id = pokemon.id))]
    pub async fn execute(&self, pokemon: &Pokemon) -> Result<bool, DomainError> {
        if self.repo.get_by_id(pokemon.id).await?.is_some() {
            debug!(pokemon_id = pokemon.id, "Pokemon id already taken");
            return Ok(false);
        }

        let rows = match self.repo.insert(pokemon).await {
            Ok(rows) => rows,
            Err(DomainError::PokemonAlreadyExists(id)) => {
                debug!(pokemon_id = id, "Pokemon inserted concurrently");
                return Ok(false);
            }
            Err(e) => return Err(e),
        };

        if rows == 1 {
            info!(
                pokemon_id = pokemon.id,
                name = %pokemon.name,
                category = %pokemon.category,
                "Pokemon created successfully"
            );
        }

        Ok(rows == 1)
    }
}
