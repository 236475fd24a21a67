//! Meshdeck domain types.
//!
//! Record types for the dashboard (models, users, settings), their typed
//! update structs with defined merge rules, and the shared domain error enum.

pub mod error;
pub mod model;
pub mod settings;
pub mod types;
pub mod user;
pub mod viewer;
