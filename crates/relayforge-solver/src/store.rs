//! In-memory time record store.

use chrono::NaiveDate;
use relayforge_core::{Gender, SourceKind, TimeRecord};
use tracing::{debug, warn};

use crate::ingest::{IngestSummary, SavedResult};

/// Team and date-range selection applied to saved results before ingestion.
///
/// Dates are inclusive. A row without a meet date passes only when no date
/// bound is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub team: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl RecordFilter {
    /// A filter accepting every row.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    pub fn with_dates(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    pub fn matches(&self, row: &SavedResult) -> bool {
        if let Some(team) = &self.team {
            if !row.team.trim().eq_ignore_ascii_case(team.trim()) {
                return false;
            }
        }
        if self.from.is_none() && self.to.is_none() {
            return true;
        }
        let Some(date) = row.meet_date else {
            return false;
        };
        self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date <= to)
    }
}

/// The record pool handed to the engine for one pass.
///
/// # Examples
///
/// ```
/// use relayforge_solver::{RecordFilter, RecordStore, SavedResult};
///
/// let rows = vec![
///     SavedResult::new("Ana", "LHS", "F", "Women 50 Yard Freestyle", 50).with_seconds(25.2),
///     SavedResult::new("Bo", "EHS", "F", "Women 50 Yard Freestyle", 50).with_seconds(24.9),
///     SavedResult::new("Cy", "LHS", "F", "Women 50 Yard Freestyle", 50).disqualified(),
/// ];
///
/// let mut store = RecordStore::new();
/// let summary = store.ingest(&rows, &RecordFilter::all().with_team("LHS"));
///
/// assert_eq!(store.len(), 1);
/// assert_eq!(summary.accepted, 1);
/// assert_eq!(summary.filtered_out, 1);
/// assert_eq!(summary.rejected_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<TimeRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<TimeRecord>) -> Self {
        Self { records }
    }

    pub fn push(&mut self, record: TimeRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[TimeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drops every record, ready for a new filter.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn for_gender(&self, gender: Gender) -> impl Iterator<Item = &TimeRecord> {
        self.records.iter().filter(move |r| r.gender() == gender)
    }

    /// Converts the rows accepted by `filter` into records and appends them.
    ///
    /// Unusable rows are logged and reported in the summary; they never stop
    /// the batch.
    pub fn ingest(&mut self, rows: &[SavedResult], filter: &RecordFilter) -> IngestSummary {
        let mut summary = IngestSummary::default();

        for (index, row) in rows.iter().enumerate() {
            if !filter.matches(row) {
                summary.filtered_out += 1;
                continue;
            }
            match row.to_records() {
                Ok(records) => {
                    summary.accepted += records.len();
                    summary.derived_first_50 += records
                        .iter()
                        .filter(|r| r.source() == SourceKind::First50Split)
                        .count();
                    self.records.extend(records);
                }
                Err(err) => {
                    warn!(
                        event = "row_rejected",
                        row = index,
                        swimmer = %row.name,
                        event_name = %row.event_name,
                        reason = err.reason(),
                        error = %err,
                    );
                    summary.rejected.push((index, err));
                }
            }
        }

        debug!(
            event = "ingest_complete",
            rows = rows.len(),
            accepted = summary.accepted,
            derived_first_50 = summary.derived_first_50,
            filtered_out = summary.filtered_out,
            rejected = summary.rejected.len(),
        );
        summary
    }
}

impl Extend<TimeRecord> for RecordStore {
    fn extend<I: IntoIterator<Item = TimeRecord>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

impl FromIterator<TimeRecord> for RecordStore {
    fn from_iter<I: IntoIterator<Item = TimeRecord>>(iter: I) -> Self {
        Self::from_records(iter.into_iter().collect())
    }
}
