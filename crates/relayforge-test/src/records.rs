//! Time record constructors.
//!
//! Every fixture swimmer belongs to [`TEAM`], so a name alone identifies
//! a swimmer. Times are given in seconds.

use relayforge_core::{Distance, Gender, SourceKind, Stroke, SwimTime, SwimmerId, TimeRecord};

/// Team shared by all fixture swimmers.
pub const TEAM: &str = "TST";

/// Returns the fixture identity for `name`.
pub fn swimmer(name: &str) -> SwimmerId {
    SwimmerId::new(name, TEAM)
}

/// Converts fixture seconds to a swim time.
pub fn time(seconds: f64) -> SwimTime {
    SwimTime::from_seconds(seconds).expect("fixture times are non-negative")
}

/// Creates a record with an explicit source kind.
pub fn record(
    name: &str,
    gender: Gender,
    distance: Distance,
    stroke: Stroke,
    seconds: f64,
    source: SourceKind,
) -> TimeRecord {
    TimeRecord::new(swimmer(name), gender, distance, stroke, time(seconds), source)
        .expect("fixture records use directly measured sources")
}

/// Creates an individual swim.
pub fn individual(
    name: &str,
    gender: Gender,
    distance: Distance,
    stroke: Stroke,
    seconds: f64,
) -> TimeRecord {
    record(name, gender, distance, stroke, seconds, SourceKind::Individual)
}

/// Creates a relay lead-off split.
pub fn leadoff(
    name: &str,
    gender: Gender,
    distance: Distance,
    stroke: Stroke,
    seconds: f64,
) -> TimeRecord {
    record(name, gender, distance, stroke, seconds, SourceKind::LeadoffSplit)
}

/// Creates a rolling-start relay split.
pub fn mid_relay(
    name: &str,
    gender: Gender,
    distance: Distance,
    stroke: Stroke,
    seconds: f64,
) -> TimeRecord {
    record(name, gender, distance, stroke, seconds, SourceKind::MidRelaySplit)
}

/// Derives the first-50 record of a 100-distance parent.
pub fn first_50(parent: &TimeRecord, seconds: f64) -> TimeRecord {
    parent
        .first_50_split(time(seconds))
        .expect("fixture parent is a 100 block-start swim")
}
