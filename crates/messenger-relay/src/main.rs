//! Messenger Relay - Entry point.

use anyhow::Context;
use heimdall_client::HeimdallClient;
use messenger_client::MessengerClient;
use messenger_relay::{
    api::{create_router, AppState},
    commands::default_registry,
    config::{Config, LogConfig},
    AppResult, Dispatcher, MessageParser,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.log);

    info!("Starting Messenger Relay...");

    let messenger = Arc::new(MessengerClient::new(
        &config.messenger.graph_url,
        config.messenger.page_access_token.clone(),
        config.messenger.timeout,
    )?);

    let heimdall = Arc::new(
        HeimdallClient::new(
            &config.heimdall.base_url,
            config.heimdall.api_key.clone(),
            &config.heimdall.app_id,
            config.heimdall.timeout,
        )?
        .with_page_size(config.heimdall.page_size)
        .with_store_url(&config.heimdall.store_url),
    );

    let registry = default_registry(heimdall);
    info!("Registered {} command handlers", registry.len());

    let parser = MessageParser::new(Some(config.bot.default_command.clone()));
    match parser.default_command() {
        Some(command) => info!("Plain text is routed to {}", command),
        None => info!("Plain text routing disabled"),
    }

    let dispatcher = Dispatcher::new(Arc::new(registry), parser, messenger);
    let state = AppState::new(
        dispatcher,
        config.messenger.app_secret.clone(),
        config.messenger.validation_token.clone(),
    );
    let app = create_router(state);

    let addr = config.server.socket_addr()?;

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutting down...");
    Ok(())
}

async fn shutdown_signal() {
    if signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}

fn init_logging(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&log.level));

    let registry = tracing_subscriber::registry().with(filter);

    if log.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
