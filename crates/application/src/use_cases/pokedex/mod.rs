mod create_pokemon;
mod delete_pokemon;
mod get_pokemon;
mod update_pokemon;

pub use create_pokemon::CreatePokemonUseCase;
pub use delete_pokemon::DeletePokemonUseCase;
pub use get_pokemon::GetPokemonUseCase;
pub use update_pokemon::UpdatePokemonUseCase;
