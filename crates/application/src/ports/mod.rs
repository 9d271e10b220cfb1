mod pokemon_repository;

pub use pokemon_repository::PokemonRepository;
