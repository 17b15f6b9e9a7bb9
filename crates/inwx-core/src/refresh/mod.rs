use std::sync::Arc;

use inwx_model::{Credentials, Snapshot};
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::{
    error::CoreError,
    session::{DomainSession, SessionFactory, SnapshotSink},
};

/// One refresh cycle: login, list, build, publish.
pub struct Refresher<F> {
    factory: F,
    credentials: Credentials,
    sink: Arc<dyn SnapshotSink>,
    clock: fn() -> OffsetDateTime,
}

impl<F> Refresher<F>
where
    F: SessionFactory,
{
    pub fn new(factory: F, credentials: Credentials, sink: Arc<dyn SnapshotSink>) -> Self {
        Self {
            factory,
            credentials,
            sink,
            clock: OffsetDateTime::now_utc,
        }
    }

    /// Replace the wall clock used to compute hours left.
    #[inline]
    pub fn with_clock(mut self, clock: fn() -> OffsetDateTime) -> Self {
        self.clock = clock;
        self
    }

    /// Run a single cycle and return the snapshot that was published.
    ///
    /// Nothing is published unless every step succeeded.
    pub async fn refresh(&self) -> Result<Snapshot, CoreError> {
        info!(environment = %self.credentials.environment, "refreshing data");

        let session = self.factory.open(&self.credentials).await?;
        debug!("registrar session opened");

        let list = session.list_domains().await?;
        let snapshot = Snapshot::from_domain_list(&list, (self.clock)());
        debug!(
            reported = snapshot.count,
            listed = snapshot.len(),
            "domain list received"
        );

        self.sink.publish(&snapshot);
        info!(
            count = snapshot.count,
            series = snapshot.len(),
            "snapshot published"
        );
        Ok(snapshot)
    }
}
