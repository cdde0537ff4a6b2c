//! Domain vocabulary for swim performances.
//!
//! Every enumeration here is closed: a record whose stroke, distance or
//! gender falls outside these sets cannot be constructed, so the engine
//! never has to re-validate its input pool.

mod record;
mod swimmer;

use std::fmt;
use std::str::FromStr;

pub use record::{MeetInfo, SourceKind, TimeRecord};
pub use swimmer::SwimmerId;

use crate::error::RecordError;

/// Competition gender. Male and female pools never share swimmers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    /// Both genders, in report order.
    pub const ALL: [Gender; 2] = [Gender::Female, Gender::Male];

    /// Label used on result sheets.
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Female => "Women",
            Gender::Male => "Men",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gender {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "women" | "woman" | "girls" | "girl" | "female" | "f" | "w" => Ok(Gender::Female),
            "men" | "man" | "boys" | "boy" | "male" | "m" => Ok(Gender::Male),
            _ => Err(RecordError::UnknownGender(s.to_string())),
        }
    }
}

/// Swimming stroke usable as a relay leg.
///
/// Individual medley is deliberately absent: IM swims never fill a relay leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Stroke {
    Free,
    Back,
    Breast,
    Fly,
}

impl Stroke {
    /// Medley relay leg order.
    pub const MEDLEY_ORDER: [Stroke; 4] = [Stroke::Back, Stroke::Breast, Stroke::Fly, Stroke::Free];

    /// Full stroke name as printed in event titles.
    pub fn name(&self) -> &'static str {
        match self {
            Stroke::Free => "Freestyle",
            Stroke::Back => "Backstroke",
            Stroke::Breast => "Breaststroke",
            Stroke::Fly => "Butterfly",
        }
    }

    /// Position of this stroke in [`Stroke::MEDLEY_ORDER`].
    pub fn medley_index(&self) -> usize {
        match self {
            Stroke::Back => 0,
            Stroke::Breast => 1,
            Stroke::Fly => 2,
            Stroke::Free => 3,
        }
    }

    /// Extracts the stroke from an event title such as `"Women 100 Yard Butterfly"`.
    ///
    /// Returns `None` for individual medley events and titles naming no stroke.
    ///
    /// # Examples
    ///
    /// ```
    /// use relayforge_core::Stroke;
    ///
    /// assert_eq!(Stroke::from_event_name("Men 50 Yard Freestyle"), Some(Stroke::Free));
    /// assert_eq!(Stroke::from_event_name("50 Butterfly (relay)"), Some(Stroke::Fly));
    /// assert_eq!(Stroke::from_event_name("Women 200 Yard IM"), None);
    /// ```
    pub fn from_event_name(event_name: &str) -> Option<Stroke> {
        let lower = event_name.to_ascii_lowercase();
        if lower.contains("free") {
            Some(Stroke::Free)
        } else if lower.contains("back") {
            Some(Stroke::Back)
        } else if lower.contains("breast") {
            Some(Stroke::Breast)
        } else if lower.contains("fly") || lower.contains("butter") {
            Some(Stroke::Fly)
        } else {
            None
        }
    }
}

impl fmt::Display for Stroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Stroke {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "free" | "freestyle" | "fr" => Ok(Stroke::Free),
            "back" | "backstroke" | "bk" => Ok(Stroke::Back),
            "breast" | "breaststroke" | "br" => Ok(Stroke::Breast),
            "fly" | "butterfly" => Ok(Stroke::Fly),
            _ => Err(RecordError::UnknownStroke(s.to_string())),
        }
    }
}

/// Swim distance. Units (yards or meters) are not tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub enum Distance {
    Fifty,
    Hundred,
    TwoHundred,
}

impl Distance {
    /// Length in pool units.
    pub const fn units(&self) -> u16 {
        match self {
            Distance::Fifty => 50,
            Distance::Hundred => 100,
            Distance::TwoHundred => 200,
        }
    }

    /// Returns the distance for a length in pool units, if supported.
    pub const fn from_units(units: u32) -> Option<Distance> {
        match units {
            50 => Some(Distance::Fifty),
            100 => Some(Distance::Hundred),
            200 => Some(Distance::TwoHundred),
            _ => None,
        }
    }
}

impl TryFrom<u32> for Distance {
    type Error = RecordError;

    fn try_from(units: u32) -> Result<Self, Self::Error> {
        Distance::from_units(units).ok_or(RecordError::UnsupportedDistance(units))
    }
}

impl From<Distance> for u32 {
    fn from(distance: Distance) -> u32 {
        u32::from(distance.units())
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.units())
    }
}
