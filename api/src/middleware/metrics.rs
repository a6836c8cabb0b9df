//! Request counting middleware.
//!
//! Bumps a process-wide atomic counter on every request. The counter is
//! owned by the application state and read by the admin metrics endpoint;
//! it exists for observability only and plays no part in request handling.

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::Error;
use std::future::{ready, Ready};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Request counter middleware factory
pub struct RequestCounter {
    hits: Arc<AtomicU64>,
}

impl RequestCounter {
    /// Creates a middleware bumping the given counter
    pub fn new(hits: Arc<AtomicU64>) -> Self {
        Self { hits }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequestCounter
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestCounterMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestCounterMiddleware {
            service,
            hits: Arc::clone(&self.hits),
        }))
    }
}

/// Request counter middleware service
pub struct RequestCounterMiddleware<S> {
    service: S,
    hits: Arc<AtomicU64>,
}

impl<S, B> Service<ServiceRequest> for RequestCounterMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = S::Future;

    actix_web::dev::forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        self.hits.fetch_add(1, Ordering::Relaxed);
        self.service.call(req)
    }
}
