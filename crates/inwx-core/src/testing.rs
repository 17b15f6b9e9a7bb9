use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use inwx_model::{Credentials, DomainList, DomainRecord, Snapshot};
use time::OffsetDateTime;
use tokio::sync::{Notify, mpsc};

use crate::{CoreError, DomainSession, SessionFactory, SnapshotSink};

pub fn listing(count: u64, domains: &[(&str, OffsetDateTime)]) -> DomainList {
    DomainList {
        count,
        domains: domains
            .iter()
            .map(|(name, at)| DomainRecord::new(*name, *at))
            .collect(),
    }
}

#[derive(Clone, Copy)]
enum Mode {
    Ok,
    FailLogin,
    FailList,
}

#[derive(Clone)]
pub struct FakeFactory {
    mode: Mode,
    list: DomainList,
    opens: Arc<AtomicUsize>,
    lists: Arc<AtomicUsize>,
    last: Arc<Mutex<Option<Credentials>>>,
    gate: Option<Arc<Notify>>,
}

impl FakeFactory {
    fn with_mode(mode: Mode, list: DomainList) -> Self {
        Self {
            mode,
            list,
            opens: Arc::new(AtomicUsize::new(0)),
            lists: Arc::new(AtomicUsize::new(0)),
            last: Arc::new(Mutex::new(None)),
            gate: None,
        }
    }

    /// Listings block until the returned `Notify` is signalled.
    pub fn gated(mut self) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.gate = Some(Arc::clone(&gate));
        (self, gate)
    }

    pub fn ok(list: DomainList) -> Self {
        Self::with_mode(Mode::Ok, list)
    }

    pub fn failing_login() -> Self {
        Self::with_mode(Mode::FailLogin, DomainList::default())
    }

    pub fn failing_list() -> Self {
        Self::with_mode(Mode::FailList, DomainList::default())
    }

    pub fn opens(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }

    pub fn lists(&self) -> usize {
        self.lists.load(Ordering::SeqCst)
    }

    pub fn last_credentials(&self) -> Option<Credentials> {
        self.last.lock().unwrap().clone()
    }
}

pub struct FakeSession {
    mode: Mode,
    list: DomainList,
    lists: Arc<AtomicUsize>,
    gate: Option<Arc<Notify>>,
}

#[async_trait]
impl DomainSession for FakeSession {
    async fn list_domains(&self) -> Result<DomainList, CoreError> {
        self.lists.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        match self.mode {
            Mode::FailList => Err(CoreError::fetch("connection reset")),
            _ => Ok(self.list.clone()),
        }
    }
}

#[async_trait]
impl SessionFactory for FakeFactory {
    type Session = FakeSession;

    async fn open(&self, credentials: &Credentials) -> Result<FakeSession, CoreError> {
        self.opens.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(credentials.clone());
        if let Mode::FailLogin = self.mode {
            return Err(CoreError::auth("code 2200: authentication error"));
        }
        Ok(FakeSession {
            mode: self.mode,
            list: self.list.clone(),
            lists: Arc::clone(&self.lists),
            gate: self.gate.clone(),
        })
    }
}

#[derive(Default)]
pub struct RecordingSink {
    published: Mutex<Vec<Snapshot>>,
}

impl RecordingSink {
    pub fn published(&self) -> Vec<Snapshot> {
        self.published.lock().unwrap().clone()
    }
}

impl SnapshotSink for RecordingSink {
    fn publish(&self, snapshot: &Snapshot) {
        self.published.lock().unwrap().push(snapshot.clone());
    }
}

/// Forwards every publish to a channel so tests can await cycles.
pub struct ChannelSink(pub mpsc::UnboundedSender<Snapshot>);

impl SnapshotSink for ChannelSink {
    fn publish(&self, snapshot: &Snapshot) {
        let _ = self.0.send(snapshot.clone());
    }
}
