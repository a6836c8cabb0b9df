//! # Chirpy Shared
//!
//! Configuration types shared across the Chirpy backend crates.

pub mod config;

pub use config::*;
