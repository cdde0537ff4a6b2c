//! Relay events and the lineups selected for them.

mod lineup;
mod report;


use std::fmt;

pub use lineup::{RelayLeg, RelayLineup};
pub use report::ReportSet;

use crate::domain::{Distance, Stroke};

/// Number of legs in every relay.
pub const LEG_COUNT: usize = 4;

/// Relay format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RelayKind {
    /// Four freestyle legs.
    Freestyle,
    /// Back, breast, fly, free in that order.
    Medley,
}

/// One of the five standard relay events.
///
/// Variants are declared in canonical report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RelayEvent {
    Free200,
    Free400,
    Free800,
    Medley200,
    Medley400,
}

impl RelayEvent {
    /// All events in canonical order: 200, 400, 800 free, then 200, 400 medley.
    pub const ALL: [RelayEvent; 5] = [
        RelayEvent::Free200,
        RelayEvent::Free400,
        RelayEvent::Free800,
        RelayEvent::Medley200,
        RelayEvent::Medley400,
    ];

    /// Looks up an event by format and total distance.
    ///
    /// # Examples
    ///
    /// ```
    /// use relayforge_core::{Distance, RelayEvent, RelayKind};
    ///
    /// let event = RelayEvent::new(RelayKind::Medley, 400).unwrap();
    /// assert_eq!(event.leg_distance(), Distance::Hundred);
    /// assert!(RelayEvent::new(RelayKind::Medley, 800).is_none());
    /// ```
    pub fn new(kind: RelayKind, total_distance: u32) -> Option<RelayEvent> {
        match (kind, total_distance) {
            (RelayKind::Freestyle, 200) => Some(RelayEvent::Free200),
            (RelayKind::Freestyle, 400) => Some(RelayEvent::Free400),
            (RelayKind::Freestyle, 800) => Some(RelayEvent::Free800),
            (RelayKind::Medley, 200) => Some(RelayEvent::Medley200),
            (RelayKind::Medley, 400) => Some(RelayEvent::Medley400),
            _ => None,
        }
    }

    pub fn kind(&self) -> RelayKind {
        match self {
            RelayEvent::Free200 | RelayEvent::Free400 | RelayEvent::Free800 => {
                RelayKind::Freestyle
            }
            RelayEvent::Medley200 | RelayEvent::Medley400 => RelayKind::Medley,
        }
    }

    pub fn total_distance(&self) -> u16 {
        self.leg_distance().units() * LEG_COUNT as u16
    }

    pub fn leg_distance(&self) -> Distance {
        match self {
            RelayEvent::Free200 | RelayEvent::Medley200 => Distance::Fifty,
            RelayEvent::Free400 | RelayEvent::Medley400 => Distance::Hundred,
            RelayEvent::Free800 => Distance::TwoHundred,
        }
    }

    /// Stroke swum on each leg, in leg order.
    pub fn leg_strokes(&self) -> [Stroke; LEG_COUNT] {
        match self.kind() {
            RelayKind::Freestyle => [Stroke::Free; LEG_COUNT],
            RelayKind::Medley => Stroke::MEDLEY_ORDER,
        }
    }

    /// Display name, e.g. `"400 Free Relay"`.
    pub fn name(&self) -> &'static str {
        match self {
            RelayEvent::Free200 => "200 Free Relay",
            RelayEvent::Free400 => "400 Free Relay",
            RelayEvent::Free800 => "800 Free Relay",
            RelayEvent::Medley200 => "200 Medley Relay",
            RelayEvent::Medley400 => "400 Medley Relay",
        }
    }
}

impl fmt::Display for RelayEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
