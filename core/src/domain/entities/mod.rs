//! Domain entities.

pub mod chirp;
pub mod token;
pub mod user;

pub use chirp::Chirp;
pub use token::RefreshToken;
pub use user::User;
