//! Saved-result ingestion.
//!
//! A [`SavedResult`] is the persisted shape of one result line as the meet
//! reader stores it. Ingestion turns each usable row into one or more
//! [`TimeRecord`]s:
//!
//! - individual swims, lead-off legs and relay legs keep their source kind,
//!   read from the `(lead-off)` / `(relay)` event-name suffix
//! - relay results are exploded into one record per leg
//! - a 100-distance block-start swim with splits also yields its first 50
//!
//! Rows that cannot become records are reported with an [`IngestError`];
//! absence of a time is a rejection, never a panic.

mod legs;

use std::collections::BTreeMap;

use chrono::NaiveDate;
use relayforge_core::{
    Distance, Gender, MeetInfo, RecordError, SourceKind, Stroke, SwimTime, SwimmerId, TimeRecord,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

pub use legs::leg_times;

/// One relay swimmer as listed on a relay result.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RelaySwimmer {
    pub name: String,
    /// Leg number, 1 for the lead-off.
    pub leg: u8,
}

impl RelaySwimmer {
    pub fn new(name: impl Into<String>, leg: u8) -> Self {
        Self {
            name: name.into(),
            leg,
        }
    }
}

/// A saved result row.
///
/// # Examples
///
/// ```
/// use relayforge_core::SourceKind;
/// use relayforge_solver::SavedResult;
///
/// let row = SavedResult::new("Ana Ruiz", "LHS", "F", "Women 100 Yard Backstroke", 100)
///     .with_seconds(61.25)
///     .with_splits(vec![29.8, 31.45]);
///
/// let records = row.to_records().unwrap();
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].source(), SourceKind::Individual);
/// assert_eq!(records[1].source(), SourceKind::First50Split);
/// assert_eq!(records[1].time().to_string(), "29.80");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SavedResult {
    pub name: String,
    pub team: String,
    pub gender: String,
    pub event_name: String,
    pub event_distance: u32,
    /// Final time in seconds; preferred over `finals_time` when present.
    pub finals_seconds: Option<f64>,
    /// Final time as printed on the result sheet.
    pub finals_time: Option<String>,
    pub meet_name: String,
    pub meet_date: Option<NaiveDate>,
    pub is_relay: bool,
    pub is_dq: bool,
    pub is_scratch: bool,
    pub splits: Vec<f64>,
    pub relay_swimmers: Vec<RelaySwimmer>,
}

impl SavedResult {
    pub fn new(
        name: impl Into<String>,
        team: impl Into<String>,
        gender: impl Into<String>,
        event_name: impl Into<String>,
        event_distance: u32,
    ) -> Self {
        Self {
            name: name.into(),
            team: team.into(),
            gender: gender.into(),
            event_name: event_name.into(),
            event_distance,
            ..Self::default()
        }
    }

    pub fn with_seconds(mut self, seconds: f64) -> Self {
        self.finals_seconds = Some(seconds);
        self
    }

    pub fn with_time_text(mut self, text: impl Into<String>) -> Self {
        self.finals_time = Some(text.into());
        self
    }

    pub fn with_meet(mut self, name: impl Into<String>, date: Option<NaiveDate>) -> Self {
        self.meet_name = name.into();
        self.meet_date = date;
        self
    }

    pub fn with_splits(mut self, splits: Vec<f64>) -> Self {
        self.splits = splits;
        self
    }

    /// Marks the row as a relay swum by `swimmers`.
    pub fn with_relay_swimmers(mut self, swimmers: Vec<RelaySwimmer>) -> Self {
        self.is_relay = true;
        self.relay_swimmers = swimmers;
        self
    }

    pub fn disqualified(mut self) -> Self {
        self.is_dq = true;
        self
    }

    pub fn scratched(mut self) -> Self {
        self.is_scratch = true;
        self
    }

    /// Source kind implied by the event name suffix.
    pub fn source_kind(&self) -> SourceKind {
        let lower = self.event_name.to_ascii_lowercase();
        if lower.contains("(lead-off)") {
            SourceKind::LeadoffSplit
        } else if lower.contains("(relay)") {
            SourceKind::MidRelaySplit
        } else {
            SourceKind::Individual
        }
    }

    /// Converts the row into time records.
    ///
    /// # Errors
    ///
    /// Returns an [`IngestError`] naming why the row is unusable: DQ or
    /// scratch, no time, no name, an IM or unknown stroke, an unsupported
    /// distance, an unknown gender, or a relay without legs.
    pub fn to_records(&self) -> Result<Vec<TimeRecord>, IngestError> {
        if self.is_dq {
            return Err(IngestError::Disqualified);
        }
        if self.is_scratch {
            return Err(IngestError::Scratched);
        }
        let gender: Gender = self.gender.parse()?;
        let meet = MeetInfo::new(self.meet_name.clone(), self.meet_date);

        if self.is_relay {
            return legs::explode_relay(self, gender, &meet);
        }

        let name = self.name.trim();
        if name.is_empty() {
            return Err(IngestError::MissingName);
        }
        let stroke = self.stroke()?;
        let distance = Distance::try_from(self.event_distance)?;
        let time = self.final_time()?;
        let source = self.source_kind();

        let record = TimeRecord::new(
            SwimmerId::new(name, self.team.as_str()),
            gender,
            distance,
            stroke,
            time,
            source,
        )?
        .with_meet(meet);

        let split = self
            .splits
            .first()
            .and_then(|first| first_50(&record, *first, self.splits.len()));
        Ok(std::iter::once(record).chain(split).collect())
    }

    fn stroke(&self) -> Result<Stroke, IngestError> {
        let lower = self.event_name.to_ascii_lowercase();
        let is_im = lower.split_whitespace().any(|word| word == "im") || lower.contains("medley");
        if is_im {
            return Err(IngestError::UnusableStroke(self.event_name.clone()));
        }
        Stroke::from_event_name(&self.event_name)
            .ok_or_else(|| IngestError::UnusableStroke(self.event_name.clone()))
    }

    fn final_time(&self) -> Result<SwimTime, IngestError> {
        let time = match (self.finals_seconds, self.finals_time.as_deref()) {
            (Some(seconds), _) => Some(SwimTime::from_seconds(seconds)?),
            (None, Some(text)) => SwimTime::parse(text)?,
            (None, None) => None,
        };
        match time {
            Some(time) if time > SwimTime::ZERO => Ok(time),
            _ => Err(IngestError::NoTime),
        }
    }
}

/// First-50 record of a 100-distance block-start swim.
///
/// `split_count` is the number of 50 splits the first split came from; a
/// single split is the whole swim, not a first 50. A split that cannot be
/// derived is logged and dropped without rejecting the parent.
fn first_50(parent: &TimeRecord, first: f64, split_count: usize) -> Option<TimeRecord> {
    if parent.distance() != Distance::Hundred
        || !parent.source().is_block_start()
        || split_count < 2
    {
        return None;
    }
    let derived = SwimTime::from_seconds(first).and_then(|split| parent.first_50_split(split));
    match derived {
        Ok(record) => Some(record),
        Err(err) => {
            warn!(
                event = "first_50_skipped",
                swimmer = %parent.swimmer(),
                stroke = %parent.stroke(),
                error = %err,
            );
            None
        }
    }
}

/// Reason a saved result could not become a time record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IngestError {
    #[error("result was disqualified")]
    Disqualified,

    #[error("result was scratched")]
    Scratched,

    #[error("result has no time")]
    NoTime,

    #[error("result has no swimmer name")]
    MissingName,

    #[error("event '{0}' has no relay stroke")]
    UnusableStroke(String),

    #[error("relay result lists no legs")]
    RelayWithoutLegs,

    #[error(transparent)]
    Record(#[from] RecordError),
}

impl IngestError {
    /// Short reason key used when counting rejections.
    pub fn reason(&self) -> &'static str {
        match self {
            IngestError::Disqualified => "disqualified",
            IngestError::Scratched => "scratched",
            IngestError::NoTime => "no_time",
            IngestError::MissingName => "missing_name",
            IngestError::UnusableStroke(_) => "unusable_stroke",
            IngestError::RelayWithoutLegs => "relay_without_legs",
            IngestError::Record(RecordError::UnsupportedDistance(_)) => "unsupported_distance",
            IngestError::Record(RecordError::UnknownGender(_)) => "unknown_gender",
            IngestError::Record(_) => "invalid_record",
        }
    }
}

/// Outcome of ingesting a batch of saved results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngestSummary {
    /// Records added to the store, derived first-50 splits included.
    pub accepted: usize,
    /// First-50 splits derived from 100-distance swims.
    pub derived_first_50: usize,
    /// Rows filtered out by team or date.
    pub filtered_out: usize,
    /// Rejected rows as (row index, reason).
    pub rejected: Vec<(usize, IngestError)>,
}

impl IngestSummary {
    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }

    /// Rejection counts keyed by [`IngestError::reason`].
    pub fn rejected_by_reason(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for (_, err) in &self.rejected {
            *counts.entry(err.reason()).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests;
