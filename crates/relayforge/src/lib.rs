//! RelayForge - fastest legal swim relay lineups
//!
//! Feed it saved meet results (or ready-made time records) and get the five
//! standard relays for each gender: 200/400/800 free and 200/400 medley.
//!
//! # Example
//!
//! ```rust
//! use relayforge::prelude::*;
//!
//! let rows = vec![
//!     SavedResult::new("Ada", "LHS", "F", "Women 50 Yard Backstroke", 50).with_seconds(30.0),
//!     SavedResult::new("Bea", "LHS", "F", "Women 50 Yard Breaststroke", 50).with_seconds(32.0),
//!     SavedResult::new("Cleo", "LHS", "F", "Women 50 Yard Butterfly", 50).with_seconds(29.0),
//!     SavedResult::new("Dot", "LHS", "F", "Women 50 Yard Freestyle", 50).with_seconds(28.0),
//! ];
//!
//! let (report, summary) =
//!     relayforge::compute_from_saved(&rows, &RecordFilter::all(), EngineConfig::default())
//!         .unwrap();
//!
//! assert_eq!(summary.accepted, 4);
//! let medley = report.get(Gender::Female, RelayEvent::Medley200).unwrap();
//! assert_eq!(medley.total_time().to_string(), "1:59.00");
//! assert!(report.get(Gender::Male, RelayEvent::Medley200).unwrap().is_incomplete());
//! ```

use tracing::info;

// Domain types
pub use relayforge_core::{
    Distance, Gender, MeetInfo, RecordError, RelayEvent, RelayForgeError, RelayKind, RelayLeg,
    RelayLineup, ReportSet, Result, SourceKind, Stroke, SwimTime, SwimmerId, TimeRecord,
};

// Configuration
pub use relayforge_config::{
    ConfigError, EngineConfig, LegSourcePolicy, MedleyConfig, MedleySolverType, ThreadCount,
};

// Engine, ingestion and pass management
pub use relayforge_solver::{
    compute_relays, IngestError, IngestSummary, PassOutcome, PassTicket, PublishedReport,
    RecordFilter, RecordStore, RelayEngine, RelayManager, RelaySwimmer, SavedResult,
};

/// Lower-level building blocks: resolver, selectors and report builder.
pub mod solver {
    pub use relayforge_solver::{
        select_freestyle, CandidatePool, EligibilityResolver, MedleySearchStats, MedleySelection,
        MedleySelector, PoolKey, ReportBuilder, SwimmerBests,
    };
}

#[cfg(feature = "console")]
pub mod console;

/// Ingests `rows` accepted by `filter` and computes the report in one call.
///
/// # Errors
///
/// Invalid configuration, or an internal invariant violation in the engine.
/// Unusable rows are not errors; they are counted in the returned summary.
pub fn compute_from_saved(
    rows: &[SavedResult],
    filter: &RecordFilter,
    config: EngineConfig,
) -> Result<(ReportSet, IngestSummary)> {
    let engine = RelayEngine::new(config)?;

    let mut store = RecordStore::new();
    let summary = store.ingest(rows, filter);
    info!(
        event = "records_loaded",
        rows = rows.len(),
        records = store.len(),
        rejected = summary.rejected_count(),
    );

    let report = engine.compute_relays(store.records())?;
    Ok((report, summary))
}

pub mod prelude {
    pub use super::{
        compute_relays, EngineConfig, Gender, RecordFilter, RecordStore, RelayEngine, RelayEvent,
        RelayLineup, ReportSet, SavedResult, SourceKind, Stroke, SwimTime, TimeRecord,
    };
}
