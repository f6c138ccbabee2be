pub mod code;
pub mod config;
pub mod correios;
pub mod error;
pub mod handlers;
#[cfg(feature = "lambda")]
pub mod lambda;
pub mod observability;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod tracking;
pub mod types;
