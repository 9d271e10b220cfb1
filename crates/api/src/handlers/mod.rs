pub mod health;
pub mod pokedex;

pub use health::health_check;
