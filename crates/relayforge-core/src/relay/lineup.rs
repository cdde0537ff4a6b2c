//! Relay lineups.

use std::collections::HashSet;

use super::{RelayEvent, LEG_COUNT};
use crate::domain::{Gender, SourceKind, Stroke, SwimmerId, TimeRecord};
use crate::error::{RelayForgeError, Result};
use crate::time::SwimTime;

/// One filled relay leg.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RelayLeg {
    pub swimmer: SwimmerId,
    pub stroke: Stroke,
    pub time: SwimTime,
    pub source: SourceKind,
    pub leadoff_eligible: bool,
}

impl RelayLeg {
    /// Creates a leg from the record selected for it.
    pub fn from_record(record: &TimeRecord) -> Self {
        Self {
            swimmer: record.swimmer().clone(),
            stroke: record.stroke(),
            time: record.time(),
            source: record.source(),
            leadoff_eligible: record.is_leadoff_eligible(),
        }
    }
}

/// The selected lineup for one relay event and gender.
///
/// A lineup is immutable once built. Unfilled legs are `None`; a lineup with
/// any unfilled leg is incomplete and its [`RelayLineup::complete_total`] is
/// `None`, so callers cannot mistake a partial sum for a relay time.
///
/// # Examples
///
/// ```
/// use relayforge_core::{Gender, RelayEvent, RelayLineup};
///
/// let lineup = RelayLineup::empty(Gender::Female, RelayEvent::Medley200);
/// assert!(lineup.is_incomplete());
/// assert_eq!(lineup.filled_count(), 0);
/// assert_eq!(lineup.complete_total(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RelayLineup {
    gender: Gender,
    event: RelayEvent,
    legs: [Option<RelayLeg>; LEG_COUNT],
}

impl RelayLineup {
    /// Builds a lineup, checking the relay invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RelayForgeError::Internal`] if a swimmer fills two legs, a
    /// leg's stroke does not match the event, or the lead-off leg holds a
    /// time that was not swum from the blocks. These indicate a selection
    /// bug, never a data gap.
    pub fn new(
        gender: Gender,
        event: RelayEvent,
        legs: [Option<RelayLeg>; LEG_COUNT],
    ) -> Result<Self> {
        let strokes = event.leg_strokes();
        let mut seen = HashSet::with_capacity(LEG_COUNT);

        for (index, leg) in legs.iter().enumerate() {
            let Some(leg) = leg else { continue };

            if leg.stroke != strokes[index] {
                return Err(RelayForgeError::Internal(format!(
                    "{} {}: leg {} swims {} but the event requires {}",
                    gender,
                    event,
                    index + 1,
                    leg.stroke,
                    strokes[index]
                )));
            }
            if index == 0 && !leg.leadoff_eligible {
                return Err(RelayForgeError::Internal(format!(
                    "{} {}: lead-off leg uses a {} time",
                    gender, event, leg.source
                )));
            }
            if !seen.insert(&leg.swimmer) {
                return Err(RelayForgeError::Internal(format!(
                    "{} {}: {} assigned to more than one leg",
                    gender, event, leg.swimmer
                )));
            }
        }

        Ok(Self { gender, event, legs })
    }

    /// A lineup with every leg unfilled.
    pub fn empty(gender: Gender, event: RelayEvent) -> Self {
        Self {
            gender,
            event,
            legs: Default::default(),
        }
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn event(&self) -> RelayEvent {
        self.event
    }

    /// Legs in swim order; `None` marks an unfilled leg.
    pub fn legs(&self) -> &[Option<RelayLeg>; LEG_COUNT] {
        &self.legs
    }

    pub fn leg(&self, index: usize) -> Option<&RelayLeg> {
        self.legs.get(index).and_then(Option::as_ref)
    }

    pub fn filled_legs(&self) -> impl Iterator<Item = &RelayLeg> {
        self.legs.iter().flatten()
    }

    pub fn filled_count(&self) -> usize {
        self.filled_legs().count()
    }

    pub fn is_complete(&self) -> bool {
        self.filled_count() == LEG_COUNT
    }

    pub fn is_incomplete(&self) -> bool {
        !self.is_complete()
    }

    /// Sum of the filled legs' times.
    pub fn total_time(&self) -> SwimTime {
        self.filled_legs().map(|leg| leg.time).sum()
    }

    /// The relay time, only when all four legs are filled.
    pub fn complete_total(&self) -> Option<SwimTime> {
        self.is_complete().then(|| self.total_time())
    }

    /// Returns true if `swimmer` fills any leg.
    pub fn contains(&self, swimmer: &SwimmerId) -> bool {
        self.filled_legs().any(|leg| &leg.swimmer == swimmer)
    }
}
