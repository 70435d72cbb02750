//! Freight route server entry point.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use freight_server::cache::{CacheConfig, CachedDistanceProvider};
use freight_server::directory::CityDirectory;
use freight_server::distance::{OrsClient, OrsConfig};
use freight_server::web::{AppState, SharedProvider, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // The blocking HTTP client must not be constructed on the async
    // executor.
    let provider = tokio::task::spawn_blocking(build_provider).await?;

    let state = AppState::new(CityDirectory::indian_cities(), provider);
    let app = create_router(state);

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "freight route server listening");
    axum::serve(listener, app).await?;
    Ok(())
}

/// Build the road-distance provider from the environment.
///
/// With no `ORS_API_KEY` set the server runs fully offline and prices
/// road legs from haversine estimates.
fn build_provider() -> Option<SharedProvider> {
    let key = match std::env::var("ORS_API_KEY") {
        Ok(key) if !key.is_empty() => key,
        _ => {
            tracing::info!("ORS_API_KEY not set, road distances use offline estimates");
            return None;
        }
    };

    match OrsClient::new(OrsConfig::new(key)) {
        Ok(client) => {
            let cached = CachedDistanceProvider::new(client, &CacheConfig::default());
            Some(Arc::new(cached) as SharedProvider)
        }
        Err(error) => {
            tracing::warn!(%error, "failed to build distance client, using offline estimates");
            None
        }
    }
}
