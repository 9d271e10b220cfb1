#![allow(dead_code)]

use async_trait::async_trait;
use pokedex_application::ports::PokemonRepository;
use pokedex_domain::{DomainError, Pokemon};
use std::sync::Arc;
use tokio::sync::RwLock;

// ── MockPokemonRepository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockPokemonRepository {
    pokemon: Arc<RwLock<Vec<Pokemon>>>,
    should_fail: Arc<RwLock<bool>>,
    hide_existing: Arc<RwLock<bool>>,
    write_count: Arc<RwLock<u32>>,
}

impl MockPokemonRepository {
    pub fn new() -> Self {
        Self {
            pokemon: Arc::new(RwLock::new(Vec::new())),
            should_fail: Arc::new(RwLock::new(false)),
            hide_existing: Arc::new(RwLock::new(false)),
            write_count: Arc::new(RwLock::new(0)),
        }
    }

    pub async fn with_pokemon(entries: Vec<Pokemon>) -> Self {
        let repo = Self::new();
        *repo.pokemon.write().await = entries;
        repo
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    /// Makes `get_by_id` miss every entry, simulating a writer that raced
    /// past the existence check.
    pub async fn set_hide_existing(&self, hide: bool) {
        *self.hide_existing.write().await = hide;
    }

    pub async fn count(&self) -> usize {
        self.pokemon.read().await.len()
    }

    pub async fn write_count(&self) -> u32 {
        *self.write_count.read().await
    }

    pub async fn find(&self, id: i64) -> Option<Pokemon> {
        self.pokemon.read().await.iter().find(|p| p.id == id).cloned()
    }

    async fn check_fail(&self) -> Result<(), DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError(
                "unable to open database file".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for MockPokemonRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PokemonRepository for MockPokemonRepository {
    async fn insert(&self, pokemon: &Pokemon) -> Result<u64, DomainError> {
        self.check_fail().await?;
        let mut entries = self.pokemon.write().await;

        if entries.iter().any(|p| p.id == pokemon.id) {
            return Err(DomainError::PokemonAlreadyExists(pokemon.id));
        }

        entries.push(pokemon.clone());
        *self.write_count.write().await += 1;
        Ok(1)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Pokemon>, DomainError> {
        self.check_fail().await?;
        if *self.hide_existing.read().await {
            return Ok(None);
        }
        Ok(self.find(id).await)
    }

    async fn get_all(&self) -> Result<Vec<Pokemon>, DomainError> {
        self.check_fail().await?;
        Ok(self.pokemon.read().await.clone())
    }

    async fn get_by_category(&self, category: &str) -> Result<Vec<Pokemon>, DomainError> {
        self.check_fail().await?;
        Ok(self
            .pokemon
            .read()
            .await
            .iter()
            .filter(|p| p.category.as_ref() == category)
            .cloned()
            .collect())
    }

    async fn update(&self, pokemon: &Pokemon) -> Result<u64, DomainError> {
        self.check_fail().await?;
        let mut entries = self.pokemon.write().await;

        match entries.iter_mut().find(|p| p.id == pokemon.id) {
            Some(existing) => {
                *existing = pokemon.clone();
                *self.write_count.write().await += 1;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> Result<u64, DomainError> {
        self.check_fail().await?;
        let mut entries = self.pokemon.write().await;
        let len_before = entries.len();
        entries.retain(|p| p.id != id);
        let removed = (len_before - entries.len()) as u64;
        if removed > 0 {
            *self.write_count.write().await += 1;
        }
        Ok(removed)
    }
}
