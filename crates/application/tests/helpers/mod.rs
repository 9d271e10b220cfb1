#![allow(dead_code)]

mod mock_repositories;

pub use mock_repositories::*;

use pokedex_domain::Pokemon;
use std::sync::Arc;

pub fn make_pokemon(id: i64, name: &str, category: &str) -> Pokemon {
    Pokemon::new(
        id,
        Arc::from(name),
        Arc::from(format!("{} description", name).as_str()),
        Arc::from(category),
        45,
        49,
        49,
        45,
    )
}
