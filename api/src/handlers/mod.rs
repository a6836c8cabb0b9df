//! Shared handler utilities.

pub mod error;

use actix_web::http::header;
use actix_web::HttpRequest;

/// The raw `Authorization` header value, if present and valid UTF-8.
///
/// Credential parsing itself happens in the core services; handlers only
/// hand the value through.
pub fn authorization_header(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
}
