//! HTTP API for the webhook relay.

mod handlers;
mod middleware;

pub use handlers::*;
pub use middleware::logging_middleware;

use crate::dispatcher::Dispatcher;
use axum::{middleware as axum_middleware, routing::get, Router};
use secrecy::SecretString;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Event dispatcher with the command registry
    pub dispatcher: Arc<Dispatcher>,
    /// HMAC key for payload signatures
    pub app_secret: Arc<SecretString>,
    /// Token expected in the subscription handshake
    pub validation_token: Arc<SecretString>,
}

impl AppState {
    /// Create new application state.
    pub fn new(
        dispatcher: Dispatcher,
        app_secret: SecretString,
        validation_token: SecretString,
    ) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
            app_secret: Arc::new(app_secret),
            validation_token: Arc::new(validation_token),
        }
    }
}

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/webhook",
            get(handlers::verify_subscription).post(handlers::receive_webhook),
        )
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
