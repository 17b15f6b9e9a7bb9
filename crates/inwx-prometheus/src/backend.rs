use std::collections::BTreeSet;

use inwx_core::SnapshotSink;
use inwx_model::{DomainName, Snapshot};
use prometheus::{
    Encoder, Gauge, GaugeVec, Opts, Registry, TEXT_FORMAT, TextEncoder, core::Collector,
};
use tracing::{trace, warn};

use crate::error::MetricsError;

pub const DOMAIN_COUNT: &str = "inwx_domain_count";
pub const DOMAIN_EXPIRATION_HOURS: &str = "inwx_domain_expiration_hours";
pub const DOMAIN_LABEL: &str = "domain";

/// Count gauge plus per-domain expiration gauge, registered on their own registry.
///
/// Cloning is cheap and every clone shares the same series.
#[derive(Clone)]
pub struct ExpirationMetrics {
    registry: Registry,
    domain_count: Gauge,
    domain_expiration: GaugeVec,
}

impl ExpirationMetrics {
    pub fn new() -> Result<Self, MetricsError> {
        let registry = Registry::new();

        let domain_count = Gauge::with_opts(Opts::new(
            DOMAIN_COUNT,
            "Count of registered domains at inwx",
        ))?;
        let domain_expiration = GaugeVec::new(
            Opts::new(DOMAIN_EXPIRATION_HOURS, "Domain Expiration in hours left"),
            &[DOMAIN_LABEL],
        )?;

        registry.register(Box::new(domain_count.clone()))?;
        registry.register(Box::new(domain_expiration.clone()))?;

        Ok(Self {
            registry,
            domain_count,
            domain_expiration,
        })
    }

    /// Content type of [`render`](Self::render) output.
    pub fn content_type(&self) -> &'static str {
        TEXT_FORMAT
    }

    /// Encode the current state in the text exposition format.
    pub fn render(&self) -> Result<String, MetricsError> {
        let families = self.registry.gather();
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Domains that currently have an expiration series, read from the gauge vector itself.
    fn exposed_domains(&self) -> Vec<DomainName> {
        self.domain_expiration
            .collect()
            .iter()
            .flat_map(|family| family.get_metric())
            .filter_map(|metric| {
                metric
                    .get_label()
                    .iter()
                    .find(|pair| pair.name() == DOMAIN_LABEL)
                    .map(|pair| pair.value().to_owned())
            })
            .collect()
    }
}

impl SnapshotSink for ExpirationMetrics {
    fn publish(&self, snapshot: &Snapshot) {
        self.domain_count.set(snapshot.count as f64);

        let current: BTreeSet<DomainName> = snapshot.domains().map(str::to_owned).collect();
        for entry in &snapshot.entries {
            self.domain_expiration
                .with_label_values(&[entry.domain.as_str()])
                .set(entry.hours_left);
        }

        // Stale series go last so a concurrent scrape never misses a current domain.
        for stale in self
            .exposed_domains()
            .into_iter()
            .filter(|d| !current.contains(d))
        {
            match self.domain_expiration.remove_label_values(&[stale.as_str()]) {
                Ok(()) => trace!(domain = %stale, "removed stale series"),
                Err(e) => warn!(domain = %stale, error = %e, "failed to remove stale series"),
            }
        }
    }
}
