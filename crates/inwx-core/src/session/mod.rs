use async_trait::async_trait;
use inwx_model::{Credentials, DomainList, Snapshot};

use crate::error::CoreError;

/// Authenticated handle to a registrar account.
#[async_trait]
pub trait DomainSession: Send + Sync {
    /// List the account's domains in a single call.
    ///
    /// Only the first page is returned when the registrar paginates.
    async fn list_domains(&self) -> Result<DomainList, CoreError>;
}

/// Opens registrar sessions.
///
/// Implementations resolve the endpoint from [`Credentials::environment`] and perform the login;
/// any failure is reported as [`CoreError::Auth`].
#[async_trait]
pub trait SessionFactory: Send + Sync + 'static {
    type Session: DomainSession;

    async fn open(&self, credentials: &Credentials) -> Result<Self::Session, CoreError>;
}

/// Receiver of finished snapshots.
///
/// `publish` is only ever called from the refresh loop, never concurrently with itself,
/// but readers of the published state may run at any time.
pub trait SnapshotSink: Send + Sync {
    fn publish(&self, snapshot: &Snapshot);
}
