//! HTTP request handlers.

use super::AppState;
use crate::error::RelayError;
use crate::signature::{self, SIGNATURE_HEADER};
use crate::subscription::SubscriptionParams;
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use messenger_client::WebhookPayload;
use secrecy::ExposeSecret;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub commands: usize,
}

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        commands: state.dispatcher.registry().len(),
    })
}

/// Subscription handshake: echo `hub.challenge` when the token matches.
pub async fn verify_subscription(
    State(state): State<AppState>,
    Query(params): Query<SubscriptionParams>,
) -> Result<String, RelayError> {
    params.verify(state.validation_token.expose_secret())
}

/// Receive a batch of messaging events.
///
/// The signature is checked against the raw bytes before the body is parsed.
/// Only a body that is not a JSON object is rejected; anything else that is not
/// a page event is acknowledged and dropped.
pub async fn receive_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, RelayError> {
    let signature_header = headers
        .get(SIGNATURE_HEADER)
        .map(|v| v.to_str().map_err(|_| RelayError::Authentication))
        .transpose()?;

    signature::verify(state.app_secret.expose_secret(), &body, signature_header)?;

    let payload: WebhookPayload = serde_json::from_slice(&body)?;
    let outcomes = state.dispatcher.dispatch(&payload).await;
    debug!(events = outcomes.len(), "Webhook processed");

    Ok(StatusCode::OK)
}
