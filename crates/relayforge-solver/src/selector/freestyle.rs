//! Freestyle relay selection.

use relayforge_core::{Gender, RelayEvent, RelayKind, RelayLeg, RelayLineup, Result};
use tracing::trace;

use crate::resolver::CandidatePool;

/// Selects a freestyle relay lineup from the leg-distance freestyle pool.
///
/// Leg 1 is the fastest lead-off-eligible record; that swimmer is then
/// removed from the pool and legs 2-4 go to the three fastest remaining
/// distinct swimmers, whatever the source of their time. A leg with no
/// candidate is left unfilled; an unfilled leg 1 does not stop legs 2-4
/// from being filled.
///
/// # Errors
///
/// Only internal invariant violations, reported by [`RelayLineup::new`].
///
/// # Examples
///
/// ```
/// use relayforge_core::{Distance, Gender, RelayEvent, Stroke};
/// use relayforge_solver::{select_freestyle, EligibilityResolver};
/// use relayforge_test::{individual, mid_relay};
///
/// let g = Gender::Male;
/// let records = vec![
///     mid_relay("Ash", g, Distance::Fifty, Stroke::Free, 20.4),
///     individual("Ash", g, Distance::Fifty, Stroke::Free, 21.2),
///     individual("Ben", g, Distance::Fifty, Stroke::Free, 21.0),
///     mid_relay("Cy", g, Distance::Fifty, Stroke::Free, 20.9),
///     individual("Dev", g, Distance::Fifty, Stroke::Free, 21.6),
/// ];
/// let resolver = EligibilityResolver::new(&records);
/// let pool = resolver.pool(g, Distance::Fifty, Stroke::Free);
///
/// let lineup = select_freestyle(g, RelayEvent::Free200, &pool).unwrap();
/// let names: Vec<_> = lineup.filled_legs().map(|l| l.swimmer.name()).collect();
/// assert_eq!(names, vec!["Ben", "Ash", "Cy", "Dev"]);
/// assert_eq!(lineup.total_time().to_string(), "1:23.90");
/// ```
pub fn select_freestyle(
    gender: Gender,
    event: RelayEvent,
    pool: &CandidatePool<'_>,
) -> Result<RelayLineup> {
    debug_assert_eq!(event.kind(), RelayKind::Freestyle);

    let mut legs: [Option<RelayLeg>; 4] = Default::default();
    let mut remaining = pool.clone();

    if let Some(leadoff) = pool.fastest_leadoff() {
        trace!(
            event = "freestyle_leadoff",
            swimmer = %leadoff.swimmer(),
            time = %leadoff.time(),
        );
        legs[0] = Some(RelayLeg::from_record(leadoff));
        remaining = remaining.without(leadoff.swimmer());
    }

    for leg in legs.iter_mut().skip(1) {
        let Some(next) = remaining.fastest() else {
            break;
        };
        *leg = Some(RelayLeg::from_record(next));
        remaining = remaining.without(next.swimmer());
    }

    RelayLineup::new(gender, event, legs)
}
