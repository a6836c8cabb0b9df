//! Repository interfaces and their in-memory test doubles.

pub mod chirp;
pub mod token;
pub mod user;

pub use chirp::{ChirpRepository, MockChirpRepository};
pub use token::{MockTokenRepository, TokenRepository};
pub use user::{MockUserRepository, UserRepository};
