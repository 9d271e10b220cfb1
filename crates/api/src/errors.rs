use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pokedex_domain::{DomainError, ValidationFailure};
use serde_json::json;
use tracing::error;

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.0 {
            DomainError::InvalidPokemon(failures) => {
                (StatusCode::BAD_REQUEST, Json(failures.clone())).into_response()
            }

            DomainError::PokemonAlreadyExists(_) => (
                StatusCode::BAD_REQUEST,
                Json(vec![ValidationFailure::duplicate_id()]),
            )
                .into_response(),

            DomainError::PokemonNotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": self.0.to_string() })),
            )
                .into_response(),

            DomainError::DatabaseError(_) => {
                error!(error = %self.0, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal error" })),
                )
                    .into_response()
            }
        }
    }
}
