use super::Repositories;
use pokedex_application::use_cases::{
    CreatePokemonUseCase, DeletePokemonUseCase, GetPokemonUseCase, UpdatePokemonUseCase,
};
use std::sync::Arc;

pub struct UseCases {
    pub create_pokemon: Arc<CreatePokemonUseCase>,
    pub get_pokemon: Arc<GetPokemonUseCase>,
    pub update_pokemon: Arc<UpdatePokemonUseCase>,
    pub delete_pokemon: Arc<DeletePokemonUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories) -> Self {
        Self {
            create_pokemon: Arc::new(CreatePokemonUseCase::new(repos.pokemon.clone())),
            get_pokemon: Arc::new(GetPokemonUseCase::new(repos.pokemon.clone())),
            update_pokemon: Arc::new(UpdatePokemonUseCase::new(repos.pokemon.clone())),
            delete_pokemon: Arc::new(DeletePokemonUseCase::new(repos.pokemon.clone())),
        }
    }
}
