//! Prometheus gauges for registrar domain expiration.
//!
//! [`ExpirationMetrics`] owns a private [`prometheus::Registry`] holding two gauges and implements
//! [`inwx_core::SnapshotSink`], so every published snapshot replaces the exposed state.
//!
//! ## Example
//! ```rust
//! use inwx_core::SnapshotSink;
//! use inwx_model::{DomainExpiry, Snapshot};
//! use inwx_prometheus::ExpirationMetrics;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let metrics = ExpirationMetrics::new()?;
//! metrics.publish(&Snapshot {
//!     count: 1,
//!     entries: vec![DomainExpiry { domain: "example.com".into(), hours_left: 100.5 }],
//! });
//!
//! let body = metrics.render()?;
//! assert!(body.contains(r#"inwx_domain_expiration_hours{domain="example.com"} 100.5"#));
//! # Ok(())
//! # }
//! ```
//!
//! ## Metrics
//! - `inwx_domain_count` - Gauge
//! - `inwx_domain_expiration_hours{domain}` - Gauge, may be negative
//!
//! ## HTTP Server
//! This crate does NOT serve `/metrics`; `inwx-api` mounts [`ExpirationMetrics::render`] on axum.

mod backend;
pub use backend::{DOMAIN_COUNT, DOMAIN_EXPIRATION_HOURS, DOMAIN_LABEL, ExpirationMetrics};

mod error;
pub use error::MetricsError;
