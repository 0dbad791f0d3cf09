//! Infrastructure implementations: storage, uploads and external lookups

pub mod explanation;
pub mod logging;
pub mod progress;
pub mod script;
pub mod store;
pub mod upload;
