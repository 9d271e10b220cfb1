use pokedex_domain::Pokemon;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Create/replace payload.
///
/// Every field is optional on the wire so that a missing value is reported
/// by validation alongside any other failures instead of rejecting the body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PokemonRequest {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(alias = "type")]
    pub category: Option<String>,
    pub hp: Option<i64>,
    pub attack: Option<i64>,
    pub defense: Option<i64>,
    pub speed: Option<i64>,
}

impl PokemonRequest {
    pub fn into_pokemon(self) -> Pokemon {
        Pokemon::new(
            self.id.unwrap_or_default(),
            Arc::from(self.name.unwrap_or_default().as_str()),
            Arc::from(self.description.unwrap_or_default().as_str()),
            Arc::from(self.category.unwrap_or_default().as_str()),
            self.hp.unwrap_or_default(),
            self.attack.unwrap_or_default(),
            self.defense.unwrap_or_default(),
            self.speed.unwrap_or_default(),
        )
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PokemonResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category: String,
    pub hp: i64,
    pub attack: i64,
    pub defense: i64,
    pub speed: i64,
}

impl PokemonResponse {
    pub fn from_pokemon(p: Pokemon) -> Self {
        Self {
            id: p.id,
            name: p.name.to_string(),
            description: p.description.to_string(),
            category: p.category.to_string(),
            hp: p.hp,
            attack: p.attack,
            defense: p.defense,
            speed: p.speed,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PokedexQuery {
    #[serde(alias = "type")]
    pub category: Option<String>,
}

impl PokedexQuery {
    /// The filter to apply, if any. Blank values mean "no filter".
    pub fn category_filter(&self) -> Option<&str> {
        self.category
            .as_deref()
            .filter(|c| !c.trim().is_empty())
    }
}
