use anyhow::Context;
use ihub::domain::config::ImsConfig;
use ihub::kernel::config::load_config;
use ihub::{ImsEndpoints, ImsHub};
use ihub_logger::Logger;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let loaded: Result<ImsConfig, _> = load_config(None::<&str>);
    let config = loaded.as_ref().map_or_else(|_| ImsConfig::default(), Clone::clone);

    let mut logger = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .env_filter(config.logging.level.clone());
    if let Some(directory) = &config.logging.directory {
        logger = logger.directory(directory);
    }
    let _log = logger.init().context("Critical: logging subsystem failed to start")?;

    if let Err(e) = loaded {
        warn!(error = %e, "No usable configuration; running with embedded defaults");
    }

    let hub = ImsHub::builder(config).build();
    hub.on_create();
    hub.ready_for_feature_creation();

    let features = hub.query_supported_features();
    for feature in &features {
        info!(slot = feature.slot, kind = feature.kind.as_str(), "Enabling feature");
        hub.enable_ims(feature.slot)?;
    }

    info!("IMS service up; waiting for shutdown signal");
    tokio::signal::ctrl_c().await.context("Failed to listen for the shutdown signal")?;

    for feature in &features {
        if let Err(e) = hub.disable_ims(feature.slot) {
            warn!(slot = feature.slot, error = %e, "Feature did not shut down cleanly");
        }
    }
    info!("IMS service stopped");

    Ok(())
}
