use pokedex_domain::{DomainError, Pokemon};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::PokemonRepository;

pub struct GetPokemonUseCase {
    repo: Arc<dyn PokemonRepository>,
}

impl GetPokemonUseCase {
    pub fn new(repo: Arc<dyn PokemonRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Pokemon>, DomainError> {
        self.repo.get_by_id(id).await
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<Pokemon>, DomainError> {
        self.repo.get_all().await
    }

    #[instrument(skip(self))]
    pub async fn search_by_category(&self, category: &str) -> Result<Vec<Pokemon>, DomainError> {
        self.repo.get_by_category(category).await
    }
}
