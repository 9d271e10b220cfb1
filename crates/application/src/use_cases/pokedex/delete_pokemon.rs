use pokedex_domain::DomainError;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::ports::PokemonRepository;

pub struct DeletePokemonUseCase {
    repo: Arc<dyn PokemonRepository>,
}

impl DeletePokemonUseCase {
    pub fn new(repo: Arc<dyn PokemonRepository>) -> Self {
        Self { repo }
    }

    /// Returns `true` iff a row was removed. Deleting a missing id is a no-op.
    #[instrument(skip(self))]
    pub async fn execute(&self, id: i64) -> Result<bool, DomainError> {
        let rows = self.repo.delete(id).await?;

        if rows == 1 {
            info!(pokemon_id = id, "Pokemon deleted successfully");
        } else {
            debug!(pokemon_id = id, "Pokemon not found for delete");
        }

        Ok(rows == 1)
    }
}
