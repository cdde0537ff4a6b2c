//! Relay report builder.

use relayforge_config::MedleyConfig;
use relayforge_core::{Gender, RelayEvent, RelayKind, RelayLineup, ReportSet, Result, Stroke};

use crate::resolver::EligibilityResolver;
use crate::selector::{select_freestyle, MedleySelector};

/// Dispatches each (gender, event) to its selector and gathers the report.
///
/// The builder only reads from the resolver, so one builder can serve every
/// lineup of a pass from several threads.
///
/// # Examples
///
/// ```
/// use relayforge_config::MedleyConfig;
/// use relayforge_solver::{EligibilityResolver, ReportBuilder};
/// use relayforge_test::pools::full_team;
///
/// let records = full_team();
/// let resolver = EligibilityResolver::new(&records);
/// let builder = ReportBuilder::new(&resolver, MedleyConfig::default());
///
/// let report = builder.build_all().unwrap();
/// assert_eq!(report.len(), 10);
/// assert_eq!(report.incomplete_count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct ReportBuilder<'r, 'a> {
    resolver: &'r EligibilityResolver<'a>,
    medley: MedleySelector,
}

impl<'r, 'a> ReportBuilder<'r, 'a> {
    pub fn new(resolver: &'r EligibilityResolver<'a>, medley: MedleyConfig) -> Self {
        Self {
            resolver,
            medley: MedleySelector::new(medley),
        }
    }

    /// Every (gender, event) pair in canonical report order.
    pub fn jobs() -> Vec<(Gender, RelayEvent)> {
        RelayEvent::ALL
            .iter()
            .flat_map(|event| Gender::ALL.iter().map(move |gender| (*gender, *event)))
            .collect()
    }

    /// Selects the lineup of one event.
    pub fn lineup(&self, gender: Gender, event: RelayEvent) -> Result<RelayLineup> {
        match event.kind() {
            RelayKind::Freestyle => {
                let pool = self
                    .resolver
                    .pool(gender, event.leg_distance(), Stroke::Free);
                select_freestyle(gender, event, &pool)
            }
            RelayKind::Medley => Ok(self.medley.select(self.resolver, gender, event)?.lineup),
        }
    }

    /// Assembles computed lineups into a report.
    pub fn build(&self, lineups: Vec<RelayLineup>) -> Result<ReportSet> {
        ReportSet::from_lineups(lineups)
    }

    /// Computes every lineup on the calling thread and assembles the report.
    pub fn build_all(&self) -> Result<ReportSet> {
        let lineups = Self::jobs()
            .into_iter()
            .map(|(gender, event)| self.lineup(gender, event))
            .collect::<Result<Vec<_>>>()?;
        self.build(lineups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relayforge_test::pools::{men_medley_shared_specialist, women_free_without_leadoff};

    #[test]
    fn test_jobs_cover_every_pair_once() {
        let jobs = ReportBuilder::jobs();
        assert_eq!(jobs.len(), ReportSet::SIZE);
        assert_eq!(jobs[0], (Gender::Female, RelayEvent::Free200));
        assert_eq!(jobs[1], (Gender::Male, RelayEvent::Free200));
        assert_eq!(jobs[9], (Gender::Male, RelayEvent::Medley400));
    }

    #[test]
    fn test_missing_data_gives_incomplete_lineups() {
        let records = women_free_without_leadoff();
        let resolver = EligibilityResolver::new(&records);
        let report = ReportBuilder::new(&resolver, MedleyConfig::default())
            .build_all()
            .unwrap();

        assert_eq!(report.len(), 10);
        assert_eq!(report.incomplete_count(), 10);
        let free = report.get(Gender::Female, RelayEvent::Free200).unwrap();
        assert_eq!(free.filled_count(), 3);
        let men = report.get(Gender::Male, RelayEvent::Free200).unwrap();
        assert_eq!(men.filled_count(), 0);
    }

    #[test]
    fn test_lineup_dispatches_by_kind() {
        let records = men_medley_shared_specialist();
        let resolver = EligibilityResolver::new(&records);
        let builder = ReportBuilder::new(&resolver, MedleyConfig::default());

        let medley = builder.lineup(Gender::Male, RelayEvent::Medley400).unwrap();
        assert!(medley.is_complete());

        // Only Gus and Dan swim the 100 free.
        let free = builder.lineup(Gender::Male, RelayEvent::Free400).unwrap();
        assert_eq!(free.filled_count(), 2);
    }
}
