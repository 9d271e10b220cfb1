pub mod pokemon;

pub use pokemon::{PokedexQuery, PokemonRequest, PokemonResponse};
