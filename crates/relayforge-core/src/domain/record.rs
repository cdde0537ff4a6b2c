//! Time records: one measured performance each.

use std::fmt;

use chrono::NaiveDate;

use super::{Distance, Gender, Stroke, SwimmerId};
use crate::error::RecordError;
use crate::time::SwimTime;

/// How a time was measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SourceKind {
    /// A standalone timed swim.
    Individual,
    /// The first leg of a relay, swum from the blocks.
    LeadoffSplit,
    /// The first half of a 100-distance swim, standing in for a 50.
    First50Split,
    /// Any later relay leg, swum from a rolling start.
    MidRelaySplit,
}

impl SourceKind {
    /// Returns true if the swim started from the blocks.
    ///
    /// A first-50 split inherits block-start status from its parent, which
    /// this method cannot see; use [`TimeRecord::is_leadoff_eligible`].
    pub fn is_block_start(&self) -> bool {
        matches!(self, SourceKind::Individual | SourceKind::LeadoffSplit)
    }

    /// Short label used when rendering a relay leg.
    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::Individual => "individual",
            SourceKind::LeadoffSplit => "lead-off",
            SourceKind::First50Split => "first 50",
            SourceKind::MidRelaySplit => "relay",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Meet provenance. Carried for display only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeetInfo {
    pub name: String,
    pub date: Option<NaiveDate>,
}

impl MeetInfo {
    pub fn new(name: impl Into<String>, date: Option<NaiveDate>) -> Self {
        Self {
            name: name.into(),
            date,
        }
    }
}

/// One measured performance.
///
/// Fields are private so that `leadoff_eligible` always agrees with the
/// record's source: it is derived in [`TimeRecord::new`] and inherited in
/// [`TimeRecord::first_50_split`], the only ways to build a record.
///
/// # Examples
///
/// ```
/// use relayforge_core::{Distance, Gender, SourceKind, Stroke, SwimTime, SwimmerId, TimeRecord};
///
/// let swim = TimeRecord::new(
///     SwimmerId::new("Ana Ruiz", "NST"),
///     Gender::Female,
///     Distance::Hundred,
///     Stroke::Free,
///     SwimTime::from_hundredths(5_310),
///     SourceKind::Individual,
/// )
/// .unwrap();
///
/// let first_50 = swim.first_50_split(SwimTime::from_hundredths(2_560)).unwrap();
/// assert_eq!(first_50.distance(), Distance::Fifty);
/// assert_eq!(first_50.source(), SourceKind::First50Split);
/// assert!(first_50.is_leadoff_eligible());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TimeRecord {
    swimmer: SwimmerId,
    gender: Gender,
    distance: Distance,
    stroke: Stroke,
    time: SwimTime,
    source: SourceKind,
    leadoff_eligible: bool,
    meet: MeetInfo,
}

impl TimeRecord {
    /// Creates a record for a directly measured swim.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::First50WithoutParent`] for
    /// [`SourceKind::First50Split`]; those records come from
    /// [`TimeRecord::first_50_split`].
    pub fn new(
        swimmer: SwimmerId,
        gender: Gender,
        distance: Distance,
        stroke: Stroke,
        time: SwimTime,
        source: SourceKind,
    ) -> Result<Self, RecordError> {
        if source == SourceKind::First50Split {
            return Err(RecordError::First50WithoutParent);
        }
        Ok(Self {
            swimmer,
            gender,
            distance,
            stroke,
            time,
            source,
            leadoff_eligible: source.is_block_start(),
            meet: MeetInfo::default(),
        })
    }

    /// Attaches meet provenance.
    pub fn with_meet(mut self, meet: MeetInfo) -> Self {
        self.meet = meet;
        self
    }

    /// Derives the first-50 record of this 100-distance swim.
    ///
    /// The derived record keeps swimmer, gender, stroke and meet and inherits
    /// this record's lead-off eligibility.
    ///
    /// # Errors
    ///
    /// The parent must be a 100-distance individual swim or lead-off split,
    /// and the split may not exceed the parent time.
    pub fn first_50_split(&self, split: SwimTime) -> Result<TimeRecord, RecordError> {
        if self.distance != Distance::Hundred || !self.source.is_block_start() {
            return Err(RecordError::InvalidFirst50Parent {
                distance: self.distance.units(),
                parent_source: self.source.label(),
            });
        }
        if split > self.time {
            return Err(RecordError::SplitExceedsParent {
                split: split.to_string(),
                parent: self.time.to_string(),
            });
        }
        Ok(TimeRecord {
            swimmer: self.swimmer.clone(),
            gender: self.gender,
            distance: Distance::Fifty,
            stroke: self.stroke,
            time: split,
            source: SourceKind::First50Split,
            leadoff_eligible: self.leadoff_eligible,
            meet: self.meet.clone(),
        })
    }

    pub fn swimmer(&self) -> &SwimmerId {
        &self.swimmer
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    pub fn stroke(&self) -> Stroke {
        self.stroke
    }

    pub fn time(&self) -> SwimTime {
        self.time
    }

    pub fn source(&self) -> SourceKind {
        self.source
    }

    /// Returns true if this time may fill a lead-off leg.
    pub fn is_leadoff_eligible(&self) -> bool {
        self.leadoff_eligible
    }

    pub fn meet(&self) -> &MeetInfo {
        &self.meet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(distance: Distance, source: SourceKind, hundredths: u32) -> TimeRecord {
        TimeRecord::new(
            SwimmerId::new("Kai Lee", "RVR"),
            Gender::Male,
            distance,
            Stroke::Free,
            SwimTime::from_hundredths(hundredths),
            source,
        )
        .unwrap()
    }

    #[test]
    fn test_eligibility_follows_source() {
        assert!(record(Distance::Fifty, SourceKind::Individual, 2_300).is_leadoff_eligible());
        assert!(record(Distance::Fifty, SourceKind::LeadoffSplit, 2_300).is_leadoff_eligible());
        assert!(!record(Distance::Fifty, SourceKind::MidRelaySplit, 2_100).is_leadoff_eligible());
    }

    #[test]
    fn test_first_50_cannot_be_built_directly() {
        let result = TimeRecord::new(
            SwimmerId::new("Kai Lee", "RVR"),
            Gender::Male,
            Distance::Fifty,
            Stroke::Free,
            SwimTime::from_hundredths(2_300),
            SourceKind::First50Split,
        );
        assert_eq!(result, Err(RecordError::First50WithoutParent));
    }

    #[test]
    fn test_first_50_inherits_eligibility() {
        let parent = record(Distance::Hundred, SourceKind::LeadoffSplit, 4_800);
        let split = parent
            .first_50_split(SwimTime::from_hundredths(2_310))
            .unwrap();

        assert_eq!(split.distance(), Distance::Fifty);
        assert_eq!(split.source(), SourceKind::First50Split);
        assert!(split.is_leadoff_eligible());
        assert_eq!(split.swimmer(), parent.swimmer());
    }

    #[test]
    fn test_first_50_rejects_mid_relay_parent() {
        let parent = record(Distance::Hundred, SourceKind::MidRelaySplit, 4_600);
        let err = parent
            .first_50_split(SwimTime::from_hundredths(2_200))
            .unwrap_err();
        assert_eq!(
            err,
            RecordError::InvalidFirst50Parent {
                distance: 100,
                parent_source: "relay",
            }
        );
    }

    #[test]
    fn test_first_50_rejects_wrong_distance() {
        let parent = record(Distance::TwoHundred, SourceKind::Individual, 10_500);
        assert!(parent
            .first_50_split(SwimTime::from_hundredths(2_400))
            .is_err());
    }

    #[test]
    fn test_first_50_rejects_split_slower_than_parent() {
        let parent = record(Distance::Hundred, SourceKind::Individual, 4_800);
        assert!(matches!(
            parent.first_50_split(SwimTime::from_hundredths(4_900)),
            Err(RecordError::SplitExceedsParent { .. })
        ));
    }
}
