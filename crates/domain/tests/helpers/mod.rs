use pokedex_domain::Pokemon;
use std::sync::Arc;

pub fn charmander() -> Pokemon {
    Pokemon::new(
        4,
        Arc::from("Charmander"),
        Arc::from("Fire lizard"),
        Arc::from("Fire"),
        100,
        100,
        100,
        10,
    )
}
