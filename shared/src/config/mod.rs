//! Configuration modules for the Chirpy backend.

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use server::ServerConfig;
