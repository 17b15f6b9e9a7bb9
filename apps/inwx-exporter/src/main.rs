//! inwx-exporter: exposes INWX domain count and hours-until-expiration for Prometheus.
//!
//! Refreshes once at startup and then hourly. Any registrar error ends the process.

mod config;

use std::sync::Arc;

use inwx_api::HttpApi;
use inwx_client::InwxSessionFactory;
use inwx_core::{Refresher, Scheduler};
use inwx_observe::{LoggerConfig, logger_init};
use inwx_prometheus::ExpirationMetrics;
use tracing::{error, info};

use crate::config::ExporterConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1) Config + logger; a bad config is still reported through the default logger
    let cfg = match ExporterConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            logger_init(&LoggerConfig::default())?;
            error!(error = %e, "invalid configuration");
            return Err(e.into());
        }
    };
    logger_init(&cfg.logger)?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        system = %cfg.credentials.environment,
        "inwx-exporter starting"
    );

    // 2) Gauges
    let metrics = Arc::new(
        ExpirationMetrics::new().inspect_err(|e| error!(error = %e, "metrics registration failed"))?,
    );

    // 3) Listener
    let listener = inwx_api::bind(cfg.listen)
        .await
        .inspect_err(|e| error!(error = %e, "cannot bind metrics listener"))?;

    // 4) Refresh loop: immediately, then hourly
    let factory = InwxSessionFactory::new().with_page_limit(cfg.page_limit);
    let refresher = Refresher::new(factory, cfg.credentials.clone(), metrics.clone());
    let scheduler = Scheduler::new(refresher);

    // 5) Serve until a refresh fails or the server stops; the scheduler logs its own failure
    let router = HttpApi::new(metrics).router();
    tokio::select! {
        res = scheduler.run() => res?,
        res = inwx_api::serve(listener, router) => {
            res.inspect_err(|e| error!(error = %e, "metrics server failed"))?
        }
    }

    info!("inwx-exporter stopped");
    Ok(())
}
