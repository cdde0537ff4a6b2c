//! Medley relay selection.
//!
//! The medley assignment picks one swimmer per stroke (back, breast, fly,
//! free) so that all four are distinct and the summed time is minimal. The
//! back leg is the lead-off and only takes block-start times.
//!
//! Two solvers implement the same contract:
//! - [`MedleySolverType::BoundedSearch`] enumerates the top-K swimmers per
//!   stroke, widening K until a distinct lineup appears or the pools are
//!   exhausted, then falls back to the exact partial assignment.
//! - [`MedleySolverType::ExactAssignment`] runs the exact assignment over the
//!   whole pool.
//!
//! Logging levels:
//! - **DEBUG**: Selection summary with bound, widenings and fallback use
//! - **TRACE**: Per-round combination counts

mod bounded;
mod exact;

use relayforge_config::{LegSourcePolicy, MedleyConfig, MedleySolverType};
use relayforge_core::{
    Gender, RelayEvent, RelayKind, RelayLeg, RelayLineup, Result, Stroke, TimeRecord,
};
use tracing::debug;

use crate::resolver::{CandidatePool, EligibilityResolver};

/// Fastest record per distinct swimmer for each stroke, in medley order.
pub type StrokePools<'a> = [Vec<&'a TimeRecord>; 4];

/// Record chosen for each leg, in medley order; `None` for unfilled legs.
pub type Assignment<'a> = [Option<&'a TimeRecord>; 4];

/// Counters describing one medley selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MedleySearchStats {
    /// Candidate bound in effect when the search ended.
    pub final_bound: usize,
    /// Number of times the bound was widened.
    pub widenings: usize,
    /// Fully distinct combinations evaluated.
    pub combinations_evaluated: u64,
    /// Whether the partial-assignment fallback produced the lineup.
    pub fallback_used: bool,
}

/// A medley lineup together with the statistics of its search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedleySelection {
    pub lineup: RelayLineup,
    pub stats: MedleySearchStats,
}

/// Selects medley relay lineups.
///
/// # Examples
///
/// ```
/// use relayforge_config::MedleyConfig;
/// use relayforge_core::{Gender, RelayEvent};
/// use relayforge_solver::{EligibilityResolver, MedleySelector};
/// use relayforge_test::pools::women_medley_one_per_stroke;
///
/// let records = women_medley_one_per_stroke();
/// let resolver = EligibilityResolver::new(&records);
/// let selector = MedleySelector::new(MedleyConfig::default());
///
/// let selection = selector
///     .select(&resolver, Gender::Female, RelayEvent::Medley200)
///     .unwrap();
/// assert!(selection.lineup.is_complete());
/// assert_eq!(selection.lineup.total_time().to_string(), "1:59.00");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MedleySelector {
    config: MedleyConfig,
}

impl MedleySelector {
    pub fn new(config: MedleyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MedleyConfig {
        &self.config
    }

    /// Selects the lineup for `event` from the resolver's candidate lists.
    ///
    /// # Errors
    ///
    /// Only internal invariant violations, reported by [`RelayLineup::new`].
    pub fn select<'a>(
        &self,
        resolver: &EligibilityResolver<'a>,
        gender: Gender,
        event: RelayEvent,
    ) -> Result<MedleySelection> {
        let distance = event.leg_distance();
        let pools = Stroke::MEDLEY_ORDER.map(|stroke| resolver.pool(gender, distance, stroke));
        self.select_from_pools(gender, event, &pools)
    }

    /// Selects the lineup from per-stroke candidate pools given in medley
    /// order (back, breast, fly, free).
    pub fn select_from_pools(
        &self,
        gender: Gender,
        event: RelayEvent,
        pools: &[CandidatePool<'_>; 4],
    ) -> Result<MedleySelection> {
        debug_assert_eq!(event.kind(), RelayKind::Medley);

        let stroke_pools = self.stroke_pools(pools);
        let mut stats = MedleySearchStats::default();

        let assignment = match self.config.solver {
            MedleySolverType::BoundedSearch => {
                match bounded::search(&stroke_pools, &self.config, &mut stats) {
                    Some(complete) => complete.map(Some),
                    None => {
                        stats.fallback_used = true;
                        exact::best_assignment(&stroke_pools)
                    }
                }
            }
            MedleySolverType::ExactAssignment => {
                stats.final_bound = stroke_pools.iter().map(Vec::len).max().unwrap_or(0);
                exact::best_assignment(&stroke_pools)
            }
        };

        let legs = assignment.map(|record| record.map(RelayLeg::from_record));
        let lineup = RelayLineup::new(gender, event, legs)?;

        debug!(
            event = "medley_selected",
            relay = %lineup.event(),
            gender = %gender,
            filled = lineup.filled_count(),
            total = %lineup.total_time(),
            bound = stats.final_bound,
            widenings = stats.widenings,
            combinations = stats.combinations_evaluated,
            fallback = stats.fallback_used,
        );

        Ok(MedleySelection { lineup, stats })
    }

    /// Reduces each stroke pool to its distinct swimmers, applying the
    /// lead-off rule to the back leg and the configured source policy to the
    /// other legs.
    pub fn stroke_pools<'a>(&self, pools: &[CandidatePool<'a>; 4]) -> StrokePools<'a> {
        std::array::from_fn(|leg| {
            let leadoff_only = leg == 0
                || self.config.non_back_leg_sources == LegSourcePolicy::LeadoffEligibleOnly;
            if leadoff_only {
                pools[leg]
                    .filtered(TimeRecord::is_leadoff_eligible)
                    .distinct_swimmers()
            } else {
                pools[leg].distinct_swimmers()
            }
        })
    }
}
