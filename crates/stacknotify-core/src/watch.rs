use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::dispatch::dispatch;
use crate::models::Question;
use crate::sinks::{MenuSink, Notifier};
use crate::tracker::QuestionTracker;
use crate::Result;

/// Supplies the current batch of recent questions, newest first.
///
/// Implementations own their transport concerns (timeouts, retries);
/// the watcher never retries a failed fetch itself and just waits for
/// the next tick.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn recent_questions(&self) -> Result<Vec<Question>>;
}

/// Drives the fetch -> reconcile -> dispatch cycle.
///
/// One watcher owns one tracker; nothing else mutates it.
pub struct Watcher {
    source: Box<dyn QuestionSource>,
    tracker: QuestionTracker,
    notifier: Box<dyn Notifier>,
    menu: Box<dyn MenuSink>,
    interval: Duration,
}

impl Watcher {
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(60);

    pub fn new(
        source: Box<dyn QuestionSource>,
        tracker: QuestionTracker,
        notifier: Box<dyn Notifier>,
        menu: Box<dyn MenuSink>,
        interval: Duration,
    ) -> Self {
        Self {
            source,
            tracker,
            notifier,
            menu,
            interval,
        }
    }

    /// Poll once immediately, then on every interval tick until the
    /// shutdown flag flips (or its sender goes away).
    ///
    /// Cycles run inline in this single task, so at most one is ever in
    /// flight; ticks that elapse while a slow fetch is outstanding
    /// collapse into one later tick instead of queueing up behind it.
    pub async fn run(&mut self, mut shutdown: watch::Receiver<bool>) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if let Err(e) = self.poll_now().await {
                        warn!("poll cycle failed: {}", e);
                    }
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        info!("watcher stopping");
                        break;
                    }
                }
            }
        }
    }

    /// Run a single fetch -> reconcile -> dispatch cycle on demand
    /// (the "check for new questions now" path).
    ///
    /// A failed fetch returns the error with the tracker untouched; no
    /// partial admissions.
    pub async fn poll_now(&mut self) -> Result<()> {
        let batch = self.source.recent_questions().await?;
        debug!("fetched {} questions", batch.len());

        let outcome = self.tracker.reconcile(batch);
        if !outcome.admitted.is_empty() || !outcome.evicted.is_empty() {
            info!(
                "{} new, {} evicted, {} tracked",
                outcome.admitted.len(),
                outcome.evicted.len(),
                self.tracker.len()
            );
        }

        dispatch(
            outcome,
            &mut self.tracker,
            self.notifier.as_mut(),
            self.menu.as_mut(),
        );
        Ok(())
    }

    pub fn tracker(&self) -> &QuestionTracker {
        &self.tracker
    }
}
