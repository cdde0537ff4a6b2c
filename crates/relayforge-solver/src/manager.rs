//! Relay manager: last-writer-wins optimization passes.
//!
//! The presentation layer re-filters its saved results whenever the team or
//! date range changes. Each change starts a new pass generation; a pass that
//! finishes after a newer generation began is discarded instead of
//! published. Subscribers observe the latest published report through a
//! `tokio::sync::watch` channel.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use relayforge_core::{ReportSet, Result, TimeRecord};
use tokio::sync::watch;
use tracing::{debug, info};

use crate::engine::RelayEngine;

/// Identifies one pass; obtained from [`RelayManager::begin_pass`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PassTicket {
    generation: u64,
}

impl PassTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// A report together with the pass that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedReport {
    pub generation: u64,
    pub record_count: usize,
    pub report: ReportSet,
}

/// What happened to a finished pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassOutcome {
    /// The report was published under this generation.
    Published(u64),
    /// A newer pass began first; the result was discarded.
    Superseded { generation: u64, current: u64 },
}

impl PassOutcome {
    pub fn is_published(&self) -> bool {
        matches!(self, PassOutcome::Published(_))
    }
}

/// Runs passes and publishes only the newest one.
///
/// # Examples
///
/// ```
/// use relayforge_solver::{PassOutcome, RelayEngine, RelayManager};
/// use relayforge_test::pools::full_team;
///
/// let manager = RelayManager::new(RelayEngine::default());
/// let records = full_team();
///
/// let stale = manager.begin_pass();
/// let fresh = manager.begin_pass();
///
/// assert_eq!(manager.complete(fresh, &records).unwrap(), PassOutcome::Published(2));
/// assert!(!manager.complete(stale, &records).unwrap().is_published());
/// assert_eq!(manager.latest().unwrap().generation, 2);
/// ```
#[derive(Debug)]
pub struct RelayManager {
    engine: RelayEngine,
    generation: AtomicU64,
    sender: watch::Sender<Option<Arc<PublishedReport>>>,
}

impl RelayManager {
    pub fn new(engine: RelayEngine) -> Self {
        let (sender, _) = watch::channel(None);
        Self {
            engine,
            generation: AtomicU64::new(0),
            sender,
        }
    }

    pub fn engine(&self) -> &RelayEngine {
        &self.engine
    }

    /// Starts a new generation, superseding every pass in flight.
    pub fn begin_pass(&self) -> PassTicket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(event = "pass_begin", generation);
        PassTicket { generation }
    }

    /// Supersedes in-flight passes without starting a computation.
    ///
    /// Returns the new generation.
    pub fn invalidate(&self) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(event = "pass_invalidated", generation);
        generation
    }

    pub fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    pub fn is_current(&self, ticket: PassTicket) -> bool {
        ticket.generation == self.current_generation()
    }

    /// Computes the report for `ticket` and publishes it if still current.
    ///
    /// A ticket that is already stale is not computed at all.
    ///
    /// # Errors
    ///
    /// Propagates engine errors; a superseded pass is not an error.
    pub fn complete(&self, ticket: PassTicket, records: &[TimeRecord]) -> Result<PassOutcome> {
        if !self.is_current(ticket) {
            return Ok(self.superseded(ticket));
        }

        let report = self.engine.compute_relays(records)?;
        let published = Arc::new(PublishedReport {
            generation: ticket.generation,
            record_count: records.len(),
            report,
        });

        let sent = self.sender.send_if_modified(|slot| {
            let newer = slot
                .as_ref()
                .map_or(true, |current| current.generation < ticket.generation);
            if newer && self.is_current(ticket) {
                *slot = Some(published);
                true
            } else {
                false
            }
        });

        if !sent {
            return Ok(self.superseded(ticket));
        }
        info!(
            event = "report_published",
            generation = ticket.generation,
            records = records.len(),
        );
        Ok(PassOutcome::Published(ticket.generation))
    }

    /// Starts a pass over `records` and completes it.
    pub fn submit(&self, records: &[TimeRecord]) -> Result<PassOutcome> {
        let ticket = self.begin_pass();
        self.complete(ticket, records)
    }

    /// A receiver that observes every published report.
    pub fn subscribe(&self) -> watch::Receiver<Option<Arc<PublishedReport>>> {
        self.sender.subscribe()
    }

    /// The most recently published report, if any.
    pub fn latest(&self) -> Option<Arc<PublishedReport>> {
        self.sender.borrow().clone()
    }

    fn superseded(&self, ticket: PassTicket) -> PassOutcome {
        let current = self.current_generation();
        debug!(
            event = "pass_superseded",
            generation = ticket.generation,
            current,
        );
        PassOutcome::Superseded {
            generation: ticket.generation,
            current,
        }
    }
}

impl Default for RelayManager {
    fn default() -> Self {
        Self::new(RelayEngine::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relayforge_core::{Gender, RelayEvent};
    use relayforge_test::pools::{full_team, women_medley_one_per_stroke};

    #[test]
    fn test_submit_publishes() {
        let manager = RelayManager::default();
        assert!(manager.latest().is_none());

        let outcome = manager.submit(&full_team()).unwrap();
        assert_eq!(outcome, PassOutcome::Published(1));

        let latest = manager.latest().unwrap();
        assert_eq!(latest.generation, 1);
        assert_eq!(latest.record_count, full_team().len());
        assert_eq!(latest.report.incomplete_count(), 0);
    }

    #[test]
    fn test_stale_pass_is_discarded() {
        let manager = RelayManager::default();
        let first = manager.begin_pass();
        let second = manager.begin_pass();

        manager.complete(second, &women_medley_one_per_stroke()).unwrap();
        let outcome = manager.complete(first, &full_team()).unwrap();

        assert_eq!(
            outcome,
            PassOutcome::Superseded {
                generation: 1,
                current: 2
            }
        );
        let latest = manager.latest().unwrap();
        assert_eq!(latest.generation, 2);
        assert_eq!(latest.record_count, 4);
    }

    #[test]
    fn test_invalidate_drops_in_flight_pass() {
        let manager = RelayManager::default();
        let ticket = manager.begin_pass();
        assert_eq!(manager.invalidate(), 2);

        let outcome = manager.complete(ticket, &full_team()).unwrap();
        assert!(!outcome.is_published());
        assert!(manager.latest().is_none());
    }

    #[test]
    fn test_concurrent_submits_publish_newest() {
        let manager = RelayManager::default();
        let records = full_team();

        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| manager.submit(&records).unwrap());
            }
        });

        let latest = manager.latest().unwrap();
        assert_eq!(latest.generation, manager.current_generation());
        assert_eq!(manager.current_generation(), 4);
    }

    #[tokio::test]
    async fn test_subscriber_sees_report() {
        let manager = RelayManager::default();
        let mut receiver = manager.subscribe();

        manager.submit(&women_medley_one_per_stroke()).unwrap();
        receiver.changed().await.unwrap();

        let published = receiver.borrow_and_update().clone().unwrap();
        let medley = published
            .report
            .get(Gender::Female, RelayEvent::Medley200)
            .unwrap();
        assert_eq!(medley.total_time().to_string(), "1:59.00");
    }
}
