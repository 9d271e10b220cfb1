pub mod pokedex;

pub use pokedex::{
    CreatePokemonUseCase, DeletePokemonUseCase, GetPokemonUseCase, UpdatePokemonUseCase,
};
