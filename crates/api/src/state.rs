use pokedex_application::use_cases::{
    CreatePokemonUseCase, DeletePokemonUseCase, GetPokemonUseCase, UpdatePokemonUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pokedex: PokedexState,
}

#[derive(Clone)]
pub struct PokedexState {
    pub create_pokemon: Arc<CreatePokemonUseCase>,
    pub get_pokemon: Arc<GetPokemonUseCase>,
    pub update_pokemon: Arc<UpdatePokemonUseCase>,
    pub delete_pokemon: Arc<DeletePokemonUseCase>,
}
