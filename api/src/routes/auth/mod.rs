//! Session lifecycle endpoints
//!
//! - Login (password exchange for an access/refresh token pair)
//! - Token refresh
//! - Refresh token revocation

pub mod login;
pub mod refresh;
pub mod revoke;
