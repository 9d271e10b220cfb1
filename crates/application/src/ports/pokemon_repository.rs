use async_trait::async_trait;
use pokedex_domain::{DomainError, Pokemon};

/// Storage boundary for pokedex entries.
///
/// Implementations scope their connection usage to each call. Absence is an
/// expected outcome and is reported through `Option` or a zero row count,
/// never as an error; `DomainError` is reserved for store failures.
#[async_trait]
pub trait PokemonRepository: Send + Sync {
    /// Inserts every field. Returns the number of rows written.
    ///
    /// Fails with `DomainError::PokemonAlreadyExists` when the store rejects
    /// the id as a duplicate.
    async fn insert(&self, pokemon: &Pokemon) -> Result<u64, DomainError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<Pokemon>, DomainError>;

    async fn get_all(&self) -> Result<Vec<Pokemon>, DomainError>;

    /// Exact, case-sensitive match on `category`.
    async fn get_by_category(&self, category: &str) -> Result<Vec<Pokemon>, DomainError>;

    /// Overwrites every field except `id`. Returns the number of rows written.
    async fn update(&self, pokemon: &Pokemon) -> Result<u64, DomainError>;

    async fn delete(&self, id: i64) -> Result<u64, DomainError>;
}
