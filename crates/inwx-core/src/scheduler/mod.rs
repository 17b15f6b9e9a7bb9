use std::time::Duration;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::{error::CoreError, refresh::Refresher, session::SessionFactory};

/// Interval between two refresh cycles.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Lifecycle of the refresh loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// Created, not yet running.
    Idle,
    /// A refresh cycle is in flight.
    Refreshing,
    /// Sleeping until the next tick.
    Waiting,
    /// Loop has exited; terminal.
    Stopped,
}

/// Runs the refresher immediately and then once per interval until cancelled.
///
/// A refresh never overlaps the previous one: the loop awaits each cycle before arming the timer.
/// The first failed cycle ends the loop with that error.
pub struct Scheduler<F> {
    refresher: Refresher<F>,
    interval: Duration,
    token: CancellationToken,
    state: watch::Sender<SchedulerState>,
}

impl<F> Scheduler<F>
where
    F: SessionFactory,
{
    pub fn new(refresher: Refresher<F>) -> Self {
        let (state, _) = watch::channel(SchedulerState::Idle);
        Self {
            refresher,
            interval: DEFAULT_REFRESH_INTERVAL,
            token: CancellationToken::new(),
            state,
        }
    }

    #[inline]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Use an externally owned stop signal.
    #[inline]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.token = token;
        self
    }

    /// Token that stops the loop when cancelled.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Watch the loop's state transitions.
    pub fn subscribe(&self) -> watch::Receiver<SchedulerState> {
        self.state.subscribe()
    }

    pub async fn run(self) -> Result<(), CoreError> {
        info!(
            interval_secs = self.interval.as_secs(),
            "refresh scheduler started"
        );

        loop {
            if self.token.is_cancelled() {
                break;
            }

            self.transition(SchedulerState::Refreshing);
            if let Err(e) = self.refresher.refresh().await {
                error!(error = %e, "refresh failed");
                self.transition(SchedulerState::Stopped);
                return Err(e);
            }

            self.transition(SchedulerState::Waiting);
            tokio::select! {
                biased;
                _ = self.token.cancelled() => break,
                _ = tokio::time::sleep(self.interval) => {}
            }
        }

        self.transition(SchedulerState::Stopped);
        info!("refresh scheduler stopped");
        Ok(())
    }

    fn transition(&self, next: SchedulerState) {
        let prev = self.state.send_replace(next);
        debug!(from = ?prev, to = ?next, "scheduler state");
    }
}
