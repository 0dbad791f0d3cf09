//! HTTP API layer: routing, state and wire types

pub mod health;
pub mod router;
pub mod routes;
pub mod state;
pub mod types;
