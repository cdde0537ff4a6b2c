//! The set of lineups produced by one optimization pass.

use super::{RelayEvent, RelayLineup};
use crate::domain::Gender;
use crate::error::{RelayForgeError, Result};

/// All ten lineups of one pass, keyed by (gender, event).
///
/// Iteration follows report order: for each event in canonical order, the
/// women's lineup then the men's.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReportSet {
    lineups: Vec<RelayLineup>,
}

impl ReportSet {
    /// Number of lineups in a full report.
    pub const SIZE: usize = RelayEvent::ALL.len() * Gender::ALL.len();

    /// Collects lineups into a report, ordering them canonically.
    ///
    /// # Errors
    ///
    /// Returns [`RelayForgeError::Internal`] unless the lineups cover every
    /// (gender, event) pair exactly once.
    pub fn from_lineups(mut lineups: Vec<RelayLineup>) -> Result<Self> {
        lineups.sort_by_key(|lineup| (lineup.event(), lineup.gender()));

        let expected = RelayEvent::ALL
            .iter()
            .flat_map(|&event| Gender::ALL.iter().map(move |&gender| (event, gender)));
        let actual: Vec<_> = lineups.iter().map(|l| (l.event(), l.gender())).collect();

        if !actual.iter().copied().eq(expected) {
            return Err(RelayForgeError::Internal(format!(
                "report must hold one lineup per gender and event, got {:?}",
                actual
            )));
        }

        Ok(Self { lineups })
    }

    pub fn get(&self, gender: Gender, event: RelayEvent) -> Option<&RelayLineup> {
        self.lineups
            .iter()
            .find(|lineup| lineup.gender() == gender && lineup.event() == event)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RelayLineup> {
        self.lineups.iter()
    }

    /// Lineups for one gender in canonical event order.
    pub fn for_gender(&self, gender: Gender) -> impl Iterator<Item = &RelayLineup> {
        self.lineups.iter().filter(move |lineup| lineup.gender() == gender)
    }

    pub fn len(&self) -> usize {
        self.lineups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lineups.is_empty()
    }

    pub fn incomplete_count(&self) -> usize {
        self.lineups.iter().filter(|l| l.is_incomplete()).count()
    }
}

impl<'a> IntoIterator for &'a ReportSet {
    type Item = &'a RelayLineup;
    type IntoIter = std::slice::Iter<'a, RelayLineup>;

    fn into_iter(self) -> Self::IntoIter {
        self.lineups.iter()
    }
}
