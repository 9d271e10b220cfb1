use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::validation::ValidationFailure;

pub const MIN_POKEMON_ID: i64 = 1;
pub const MAX_POKEMON_ID: i64 = 151;

/// Stats must be strictly greater than this value.
pub const STAT_FLOOR: i64 = 1;

/// A single pokedex entry.
///
/// The `id` is assigned by the caller, not by the store, and is immutable
/// once the entry exists. `category` is the pokemon's type ("Fire", "Water",
/// ...) and is accepted as `type` on input for compatibility with older
/// clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: i64,
    pub name: Arc<str>,
    pub description: Arc<str>,
    #[serde(alias = "type")]
    pub category: Arc<str>,
    pub hp: i64,
    pub attack: i64,
    pub defense: i64,
    pub speed: i64,
}

impl Pokemon {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        name: Arc<str>,
        description: Arc<str>,
        category: Arc<str>,
        hp: i64,
        attack: i64,
        defense: i64,
        speed: i64,
    ) -> Self {
        Self {
            id,
            name,
            description,
            category,
            hp,
            attack,
            defense,
            speed,
        }
    }

    /// Returns this entry addressed at `id`.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Runs every field rule and collects all failures.
    ///
    /// An empty vector means the entry may be written.
    pub fn validate(&self) -> Vec<ValidationFailure> {
        let mut failures = Vec::new();

        if let Err(f) = Self::validate_id(self.id) {
            failures.push(f);
        }

        for (field, display, value) in [
            ("name", "Name", &self.name),
            ("description", "Description", &self.description),
            ("category", "Category", &self.category),
        ] {
            if let Err(f) = Self::validate_not_empty(field, display, value) {
                failures.push(f);
            }
        }

        for (field, display, value) in [
            ("hp", "HP", self.hp),
            ("attack", "Attack", self.attack),
            ("defense", "Defense", self.defense),
            ("speed", "Speed", self.speed),
        ] {
            if let Err(f) = Self::validate_stat(field, display, value) {
                failures.push(f);
            }
        }

        failures
    }

    pub fn validate_id(id: i64) -> Result<(), ValidationFailure> {
        if !(MIN_POKEMON_ID..=MAX_POKEMON_ID).contains(&id) {
            return Err(ValidationFailure::new(
                "id",
                format!(
                    "'Id' must be between {} and {}. You entered {}.",
                    MIN_POKEMON_ID, MAX_POKEMON_ID, id
                ),
            ));
        }
        Ok(())
    }

    pub fn validate_not_empty(
        field: &str,
        display: &str,
        value: &str,
    ) -> Result<(), ValidationFailure> {
        if value.trim().is_empty() {
            return Err(ValidationFailure::new(
                field,
                format!("'{}' must not be empty.", display),
            ));
        }
        Ok(())
    }

    pub fn validate_stat(field: &str, display: &str, value: i64) -> Result<(), ValidationFailure> {
        if value <= STAT_FLOOR {
            return Err(ValidationFailure::new(
                field,
                format!("'{}' must be greater than '{}'.", display, STAT_FLOOR),
            ));
        }
        Ok(())
    }
}
