//! RelayForge Solver Engine
//!
//! This crate turns a pool of time records into relay lineups:
//! - Record store and saved-result ingestion
//! - Eligibility resolver building sorted candidate lists
//! - Freestyle and medley relay selectors
//! - Report builder and the parallel engine driving one pass
//! - Relay manager publishing the latest report (last writer wins)

pub mod engine;
pub mod ingest;
pub mod manager;
pub mod report;
pub mod resolver;
pub mod selector;
pub mod store;

pub use engine::{compute_relays, RelayEngine};
pub use ingest::{IngestError, IngestSummary, RelaySwimmer, SavedResult};
pub use manager::{PassOutcome, PassTicket, PublishedReport, RelayManager};
pub use report::ReportBuilder;
pub use resolver::{CandidatePool, EligibilityResolver, PoolKey, SwimmerBests};
pub use selector::{select_freestyle, MedleySearchStats, MedleySelection, MedleySelector};
pub use store::{RecordFilter, RecordStore};
