use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use pokedex_domain::DomainError;
use tracing::debug;

use crate::{
    dto::{PokedexQuery, PokemonRequest, PokemonResponse},
    errors::ApiError,
    state::AppState,
};

pub const POKEDEX_PATH: &str = "/catalog";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(POKEDEX_PATH, get(get_all_pokemon).post(create_pokemon))
        .route(
            "/catalog/{id}",
            get(get_pokemon_by_id)
                .put(update_pokemon)
                .delete(delete_pokemon),
        )
}

async fn get_all_pokemon(
    State(state): State<AppState>,
    Query(params): Query<PokedexQuery>,
) -> Result<Json<Vec<PokemonResponse>>, ApiError> {
    let pokemon = match params.category_filter() {
        Some(category) => {
            state
                .pokedex
                .get_pokemon
                .search_by_category(category)
                .await?
        }
        None => state.pokedex.get_pokemon.get_all().await?,
    };
    debug!(count = pokemon.len(), "Pokemon retrieved successfully");

    Ok(Json(
        pokemon
            .into_iter()
            .map(PokemonResponse::from_pokemon)
            .collect(),
    ))
}

async fn get_pokemon_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PokemonResponse>, ApiError> {
    let pokemon = state
        .pokedex
        .get_pokemon
        .get_by_id(id)
        .await?
        .ok_or(ApiError(DomainError::PokemonNotFound(id)))?;
    Ok(Json(PokemonResponse::from_pokemon(pokemon)))
}

async fn create_pokemon(
    State(state): State<AppState>,
    Json(req): Json<PokemonRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let pokemon = req.into_pokemon();

    let failures = pokemon.validate();
    if !failures.is_empty() {
        return Err(ApiError(DomainError::InvalidPokemon(failures)));
    }

    let created = state.pokedex.create_pokemon.execute(&pokemon).await?;
    if !created {
        return Err(ApiError(DomainError::PokemonAlreadyExists(pokemon.id)));
    }

    let location = format!("{}/{}", POKEDEX_PATH, pokemon.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(PokemonResponse::from_pokemon(pokemon)),
    ))
}

async fn update_pokemon(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<PokemonRequest>,
) -> Result<Json<PokemonResponse>, ApiError> {
    let pokemon = req.into_pokemon().with_id(id);

    let failures = pokemon.validate();
    if !failures.is_empty() {
        return Err(ApiError(DomainError::InvalidPokemon(failures)));
    }

    let updated = state.pokedex.update_pokemon.execute(&pokemon).await?;
    if !updated {
        return Err(ApiError(DomainError::PokemonNotFound(id)));
    }

    Ok(Json(PokemonResponse::from_pokemon(pokemon)))
}

async fn delete_pokemon(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if !state.pokedex.delete_pokemon.execute(id).await? {
        return Err(ApiError(DomainError::PokemonNotFound(id)));
    }
    Ok(StatusCode::NO_CONTENT)
}
