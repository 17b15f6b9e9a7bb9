//! Refresh-and-publish cycle of the domain expiration exporter.
//!
//! A [`Scheduler`] drives a [`Refresher`] once at startup and then on a fixed interval.
//! Each refresh opens a registrar session through a [`SessionFactory`], lists the account's
//! domains, turns them into a [`Snapshot`](inwx_model::Snapshot) and hands it to a
//! [`SnapshotSink`]. Any failure is returned to the caller; nothing is retried.

pub mod error;
pub use error::CoreError;

pub mod session;
pub use session::{DomainSession, SessionFactory, SnapshotSink};

pub mod refresh;
pub use refresh::Refresher;

pub mod scheduler;
pub use scheduler::{DEFAULT_REFRESH_INTERVAL, Scheduler, SchedulerState};

#[cfg(test)]
mod testing;
