use thiserror::Error;

use crate::validation::ValidationFailure;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Pokemon already exists: {0}")]
    PokemonAlreadyExists(i64),

    #[error("Pokemon not found: {0}")]
    PokemonNotFound(i64),

    #[error("Invalid pokemon: {} rule(s) violated", .0.len())]
    InvalidPokemon(Vec<ValidationFailure>),
}
