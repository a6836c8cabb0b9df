//! MySQL repository implementations.

mod chirp_repository_impl;
mod token_repository_impl;
mod user_repository_impl;

pub use chirp_repository_impl::MySqlChirpRepository;
pub use token_repository_impl::MySqlTokenRepository;
pub use user_repository_impl::MySqlUserRepository;

use chirpy_core::errors::DomainError;

/// Maps a SQLx error to the storage variant of the domain taxonomy.
///
/// The raw driver message is preserved for logs but never forwarded to
/// external callers by the API layer.
pub(crate) fn storage_error(context: &str, error: sqlx::Error) -> DomainError {
    DomainError::Storage {
        message: format!("{context}: {error}"),
    }
}
