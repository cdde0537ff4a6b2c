//! RelayForge Core - Domain types for relay lineup optimization
//!
//! This crate provides the value types shared by every RelayForge crate:
//! - Swim times with exact hundredth-of-a-second arithmetic
//! - Time records tagged with their source kind and lead-off eligibility
//! - Relay event definitions and the lineups selected for them
//! - The report set aggregating all lineups of one optimization pass

pub mod domain;
pub mod error;
pub mod relay;
pub mod time;

pub use domain::{Distance, Gender, MeetInfo, SourceKind, Stroke, SwimmerId, TimeRecord};
pub use error::{RecordError, RelayForgeError, Result};
pub use relay::{RelayEvent, RelayKind, RelayLeg, RelayLineup, ReportSet};
pub use time::SwimTime;
