//! SwimTime - exact swim durations in hundredths of a second

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use crate::error::RecordError;

/// Tokens printed in place of a time when the swim produced none.
const NO_TIME_TOKENS: [&str; 5] = ["SCR", "DQ", "NS", "DFS", "NT"];

/// A non-negative swim duration with hundredth-of-a-second precision.
///
/// Times are stored as an integer count of hundredths so that ordering is
/// total and relay totals are exact sums.
///
/// # Examples
///
/// ```
/// use relayforge_core::SwimTime;
///
/// let fast = SwimTime::from_hundredths(2_412);
/// let slow = SwimTime::parse("1:02.35").unwrap().unwrap();
///
/// assert!(fast < slow);
/// assert_eq!(slow.to_string(), "1:02.35");
/// assert_eq!((fast + slow).to_string(), "1:26.47");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SwimTime {
    hundredths: u32,
}

impl SwimTime {
    /// The zero duration.
    pub const ZERO: SwimTime = SwimTime { hundredths: 0 };

    /// Creates a time from a count of hundredths of a second.
    #[inline]
    pub const fn from_hundredths(hundredths: u32) -> Self {
        SwimTime { hundredths }
    }

    /// Creates a time from seconds, rounded to the nearest hundredth.
    ///
    /// # Errors
    ///
    /// Returns error for negative, NaN or out-of-range values.
    pub fn from_seconds(seconds: f64) -> Result<Self, RecordError> {
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(RecordError::InvalidTime(seconds.to_string()));
        }
        let hundredths = (seconds * 100.0).round();
        if hundredths > u32::MAX as f64 {
            return Err(RecordError::InvalidTime(seconds.to_string()));
        }
        Ok(SwimTime::from_hundredths(hundredths as u32))
    }

    /// Returns the time as a count of hundredths.
    #[inline]
    pub const fn hundredths(&self) -> u32 {
        self.hundredths
    }

    /// Returns the time in seconds.
    pub fn as_seconds(&self) -> f64 {
        f64::from(self.hundredths) / 100.0
    }

    /// Parses a result-sheet time such as `"24.12"`, `"1:02.35"` or `"x58.10"`.
    ///
    /// Returns `Ok(None)` for the no-time markers (`SCR`, `DQ`, `NS`, `DFS`,
    /// `NT`) and for empty input. A leading `x`/`X` exhibition marker is ignored.
    pub fn parse(s: &str) -> Result<Option<Self>, RecordError> {
        let trimmed = s.trim();
        if trimmed.is_empty() || NO_TIME_TOKENS.contains(&trimmed) {
            return Ok(None);
        }
        let body = trimmed.trim_start_matches(['x', 'X']);
        let invalid = || RecordError::InvalidTime(s.to_string());

        let seconds = match body.split_once(':') {
            Some((minutes, seconds)) => {
                let minutes: u32 = minutes.parse().map_err(|_| invalid())?;
                let seconds: f64 = seconds.parse().map_err(|_| invalid())?;
                if seconds >= 60.0 {
                    return Err(invalid());
                }
                f64::from(minutes) * 60.0 + seconds
            }
            None => body.parse::<f64>().map_err(|_| invalid())?,
        };

        Self::from_seconds(seconds).map(Some).map_err(|_| invalid())
    }
}

impl Add for SwimTime {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        SwimTime::from_hundredths(self.hundredths + other.hundredths)
    }
}

impl Sum for SwimTime {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(SwimTime::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a SwimTime> for SwimTime {
    fn sum<I: Iterator<Item = &'a SwimTime>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Debug for SwimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SwimTime({})", self)
    }
}

impl fmt::Display for SwimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minutes = self.hundredths / 6_000;
        let seconds = (self.hundredths % 6_000) / 100;
        let fraction = self.hundredths % 100;
        if minutes > 0 {
            write!(f, "{}:{:02}.{:02}", minutes, seconds, fraction)
        } else {
            write!(f, "{}.{:02}", seconds, fraction)
        }
    }
}
