use pokedex_domain::{DomainError, Pokemon};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::ports::PokemonRepository;

pub struct UpdatePokemonUseCase {
    repo: Arc<dyn PokemonRepository>,
}

impl UpdatePokemonUseCase {
    pub fn new(repo: Arc<dyn PokemonRepository>) -> Self {
        Self { repo }
    }

    /// Replaces every field of an existing entry. Returns `false` without
    /// writing when no entry has `pokemon.id`.
    #[instrument(skip(self, pokemon), fields(pokemon_id = pokemon.id))]
    pub async fn execute(&self, pokemon: &Pokemon) -> Result<bool, DomainError> {
        if self.repo.get_by_id(pokemon.id).await?.is_none() {
            debug!(pokemon_id = pokemon.id, "Pokemon not found for update");
            return Ok(false);
        }

        let rows = self.repo.update(pokemon).await?;

        if rows == 1 {
            info!(
                pokemon_id = pokemon.id,
                name = %pokemon.name,
                "Pokemon updated successfully"
            );
        }

        Ok(rows == 1)
    }
}
