//! Relay optimization engine.
//!
//! One pass builds the eligibility index over an immutable record pool and
//! computes the ten (gender, event) lineups. The lineups are independent, so
//! they are evaluated in parallel with rayon according to the configured
//! [`ThreadCount`]; results are collected once all finish.
//!
//! Logging levels:
//! - **INFO**: Pass start/end with record, lineup and incomplete counts
//! - **DEBUG**: Each computed lineup
//! - **TRACE**: Selector internals (lead-off choice, search rounds)

use std::time::Instant;

use rayon::prelude::*;
use relayforge_config::{EngineConfig, ThreadCount};
use relayforge_core::{
    Gender, RelayEvent, RelayForgeError, RelayLineup, ReportSet, Result, TimeRecord,
};
use tracing::{debug, info};

use crate::report::ReportBuilder;
use crate::resolver::EligibilityResolver;

/// Computes the report for `records` with the default configuration.
///
/// # Examples
///
/// ```
/// use relayforge_core::{Gender, RelayEvent};
/// use relayforge_solver::compute_relays;
/// use relayforge_test::pools::women_medley_one_per_stroke;
///
/// let report = compute_relays(&women_medley_one_per_stroke()).unwrap();
/// let medley = report.get(Gender::Female, RelayEvent::Medley200).unwrap();
/// assert!(medley.is_complete());
/// assert_eq!(medley.total_time().to_string(), "1:59.00");
/// ```
pub fn compute_relays(records: &[TimeRecord]) -> Result<ReportSet> {
    RelayEngine::default().compute_relays(records)
}

/// Runs optimization passes under one configuration.
#[derive(Debug, Clone, Default)]
pub struct RelayEngine {
    config: EngineConfig,
}

impl RelayEngine {
    /// Creates an engine after validating `config`.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Computes all ten lineups for one pass over `records`.
    ///
    /// # Errors
    ///
    /// Returns [`RelayForgeError::Internal`] if a selector produced an
    /// illegal lineup, and [`RelayForgeError::Config`] if a dedicated thread
    /// pool cannot be built.
    pub fn compute_relays(&self, records: &[TimeRecord]) -> Result<ReportSet> {
        let started = Instant::now();
        info!(
            event = "pass_start",
            records = records.len(),
            thread_count = ?self.config.thread_count,
            medley_solver = ?self.config.medley.solver,
            candidate_bound = self.config.medley.candidate_bound,
        );

        let resolver = EligibilityResolver::new(records);
        let builder = ReportBuilder::new(&resolver, self.config.medley.clone());
        let jobs = ReportBuilder::jobs();

        let lineups = match self.config.thread_count {
            ThreadCount::None => jobs
                .iter()
                .map(|&(gender, event)| run_job(&builder, gender, event))
                .collect::<Result<Vec<_>>>()?,
            ThreadCount::Auto => jobs
                .par_iter()
                .map(|&(gender, event)| run_job(&builder, gender, event))
                .collect::<Result<Vec<_>>>()?,
            ThreadCount::Count(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|err| RelayForgeError::Config(err.to_string()))?;
                pool.install(|| {
                    jobs.par_iter()
                        .map(|&(gender, event)| run_job(&builder, gender, event))
                        .collect::<Result<Vec<_>>>()
                })?
            }
        };

        let report = builder.build(lineups)?;

        info!(
            event = "pass_end",
            records = records.len(),
            candidate_lists = resolver.key_count(),
            lineups = report.len(),
            incomplete = report.incomplete_count(),
            duration_ms = started.elapsed().as_millis() as u64,
        );
        Ok(report)
    }
}

fn run_job(
    builder: &ReportBuilder<'_, '_>,
    gender: Gender,
    event: RelayEvent,
) -> Result<RelayLineup> {
    let lineup = builder.lineup(gender, event)?;
    debug!(
        event = "lineup_computed",
        relay = %event,
        gender = %gender,
        filled = lineup.filled_count(),
        complete = lineup.is_complete(),
        total = %lineup.total_time(),
    );
    Ok(lineup)
}
