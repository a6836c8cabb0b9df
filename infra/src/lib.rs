//! # Chirpy Infrastructure
//!
//! MySQL-backed implementations of the repository traits defined in
//! `chirpy_core`, plus connection pool management.

pub mod database;

pub use database::connection::DatabasePool;
pub use database::mysql::{MySqlChirpRepository, MySqlTokenRepository, MySqlUserRepository};
