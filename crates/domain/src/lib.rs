//! Pokedex Domain Layer
pub mod config;
pub mod errors;
pub mod pokemon;
pub mod validation;

pub use config::{CliOverrides, Config};
pub use errors::DomainError;
pub use pokemon::Pokemon;
pub use validation::ValidationFailure;
