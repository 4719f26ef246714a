//! HTTP server initialization and runtime setup.
//!
//! Builds the singleton services (cache, upstream client, redirect table),
//! then runs the Axum server until Ctrl-C or SIGTERM.

use crate::application::services::LegacyUrlResolver;
use crate::config::Config;
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::outline::OutlineClient;
use crate::routes::app_router;
use crate::state::{AppState, SiteSettings};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the shared application state from configuration.
///
/// Never fails because of the cache: an unreachable backend disables
/// caching for the lifetime of the process.
///
/// # Errors
///
/// Returns an error if the upstream HTTP client cannot be constructed.
pub async fn build_state(config: &Config) -> Result<AppState> {
    let cache = Arc::new(CacheService::from_settings(&config.cache_settings()).await);

    let client = OutlineClient::new(config.outline_settings())
        .context("Failed to build Outline API client")?;
    tracing::info!("Outline client ready for collection {}", client.collection_id());

    let resolver = LegacyUrlResolver::from_file(&config.redirect_mapping_file);

    let site = SiteSettings {
        title: config.site_title.clone(),
        base_url: config.base_url.clone(),
        collection_id: config.outline_collection_id.clone(),
        public_url: config.outline_public_url.clone(),
    };

    Ok(AppState::new(Arc::new(client), cache, resolver, site))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Redis cache (or disabled caching fallback)
/// - Outline API client
/// - Legacy redirect table
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config).await?;

    let app = app_router(state, &config.static_dir);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let sigterm = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = sigterm => {}
    }

    tracing::info!("Shutdown signal received");
}
