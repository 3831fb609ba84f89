use std::sync::Arc;

use anyhow::Result;
use stockbase_core::{IngestService, IngestStores};
use stockbase_market_data::{CallGate, ClientConfig, PolygonFreeClient};
use stockbase_storage_sqlite::{ingest_stores, open};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub fn init_tracing() {
    let log_format = std::env::var("SB_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Opens (and migrates) the sink and wires every repository.
pub fn open_stores(config: &Config) -> Result<IngestStores> {
    tracing::info!("Database path in use: {}", config.db_path);
    let (pool, writer) = open(&config.db_path)?;
    Ok(ingest_stores(pool, writer))
}

/// Builds the ingestion service over the free-tier Polygon client.
pub async fn build_ingest(config: &Config, stores: IngestStores) -> Result<IngestService> {
    let client_config = config.client_config()?;

    CallGate::shared()
        .set_min_interval(config.min_call_interval)
        .await;
    tracing::debug!("Vendor calls spaced {:?} apart", config.min_call_interval);

    let provider = PolygonFreeClient::free_tier(&client_config)?;
    Ok(IngestService::new(Arc::new(provider), stores))
}

/// Ingestion service for commands that never reach the vendor, so no API
/// key is required.
pub fn build_offline_ingest(config: &Config, stores: IngestStores) -> Result<IngestService> {
    let client_config = ClientConfig {
        api_key: config.api_key.clone().unwrap_or_default(),
        ..ClientConfig::default()
    };
    let provider = PolygonFreeClient::free_tier(&client_config)?;
    Ok(IngestService::new(Arc::new(provider), stores))
}
