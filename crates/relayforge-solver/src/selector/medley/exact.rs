//! Exact medley assignment.
//!
//! Dynamic programming over the 16 subsets of filled legs, adding one
//! swimmer at a time. Each swimmer extends only the states that existed
//! before it was considered, so no swimmer fills two legs. The result
//! fills as many legs as possible and, among those, has the lowest total.

use std::collections::HashMap;

use relayforge_core::{SwimTime, SwimmerId};

use super::{Assignment, StrokePools};

const LEGS: usize = 4;
const STATES: usize = 1 << LEGS;

#[derive(Clone, Copy)]
struct State<'a> {
    total: SwimTime,
    legs: Assignment<'a>,
}

/// Returns the assignment with the most filled legs, then the lowest total.
pub(super) fn best_assignment<'a>(pools: &StrokePools<'a>) -> Assignment<'a> {
    let rows = swimmer_rows(pools);

    let mut table: [Option<State<'a>>; STATES] = [None; STATES];
    table[0] = Some(State {
        total: SwimTime::ZERO,
        legs: [None; LEGS],
    });

    for row in &rows {
        let previous = table;
        for (mask, state) in previous.iter().enumerate() {
            let Some(state) = state else { continue };
            for (leg, record) in row.iter().enumerate() {
                let Some(record) = record else { continue };
                if mask & (1 << leg) != 0 {
                    continue;
                }
                let next = mask | (1 << leg);
                let total = state.total + record.time();
                if table[next].map_or(true, |current| total < current.total) {
                    let mut legs = state.legs;
                    legs[leg] = Some(*record);
                    table[next] = Some(State { total, legs });
                }
            }
        }
    }

    let mut best: Option<(u32, State<'a>)> = None;
    for (mask, state) in table.iter().enumerate() {
        let Some(state) = state else { continue };
        let filled = (mask as u32).count_ones();
        let better = match best {
            None => true,
            Some((best_filled, best_state)) => {
                filled > best_filled || (filled == best_filled && state.total < best_state.total)
            }
        };
        if better {
            best = Some((filled, *state));
        }
    }

    best.map(|(_, state)| state.legs).unwrap_or([None; LEGS])
}

/// Each swimmer's record per leg, swimmers in order of first appearance.
fn swimmer_rows<'a>(pools: &StrokePools<'a>) -> Vec<Assignment<'a>> {
    let mut position: HashMap<&'a SwimmerId, usize> = HashMap::new();
    let mut rows: Vec<Assignment<'a>> = Vec::new();

    for (leg, pool) in pools.iter().enumerate() {
        for &record in pool {
            let index = *position.entry(record.swimmer()).or_insert_with(|| {
                rows.push([None; LEGS]);
                rows.len() - 1
            });
            // Pools hold one record per swimmer; keep the first if not.
            if rows[index][leg].is_none() {
                rows[index][leg] = Some(record);
            }
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use relayforge_core::{Distance, Gender, Stroke, TimeRecord};
    use relayforge_test::individual;

    fn owned(entries: [&[(&str, f64)]; 4]) -> Vec<Vec<TimeRecord>> {
        entries
            .iter()
            .zip(Stroke::MEDLEY_ORDER)
            .map(|(list, stroke)| {
                list.iter()
                    .map(|(name, secs)| {
                        individual(name, Gender::Female, Distance::Fifty, stroke, *secs)
                    })
                    .collect()
            })
            .collect()
    }

    fn refs(owned: &[Vec<TimeRecord>]) -> StrokePools<'_> {
        std::array::from_fn(|leg| owned[leg].iter().collect())
    }

    fn names(assignment: &Assignment<'_>) -> Vec<Option<String>> {
        assignment
            .iter()
            .map(|r| r.map(|r| r.swimmer().name().to_string()))
            .collect()
    }

    #[test]
    fn test_optimal_complete_assignment() {
        let records = owned([
            &[("Ann", 30.0), ("Bet", 31.2)],
            &[("Ann", 33.0), ("Cat", 34.5)],
            &[("Bet", 28.0), ("Dee", 29.5)],
            &[("Cat", 26.0), ("Ann", 26.2), ("Dee", 27.0)],
        ]);
        let assignment = best_assignment(&refs(&records));

        let total: SwimTime = assignment.iter().flatten().map(|r| r.time()).sum();
        // Ann back, Cat breast, Bet fly, Dee free = 30.0 + 34.5 + 28.0 + 27.0
        // beats Bet back, Ann breast, Dee fly, Cat free = 31.2 + 33.0 + 29.5 + 26.0
        assert_eq!(total.hundredths(), 11_950);
        assert!(assignment.iter().all(Option::is_some));
    }

    #[test]
    fn test_single_swimmer_fills_one_leg() {
        let records = owned([
            &[("Sol", 30.0)],
            &[("Sol", 33.0)],
            &[("Sol", 28.0)],
            &[("Sol", 26.0)],
        ]);
        let assignment = best_assignment(&refs(&records));

        assert_eq!(
            names(&assignment),
            vec![None, None, None, Some("Sol".to_string())]
        );
    }

    #[test]
    fn test_maximizes_filled_legs_before_time() {
        // Ann alone is fastest on back, but using her there leaves breast empty.
        let records = owned([
            &[("Ann", 29.0), ("Bet", 33.0)],
            &[("Ann", 35.0)],
            &[],
            &[],
        ]);
        let assignment = best_assignment(&refs(&records));

        assert_eq!(
            names(&assignment),
            vec![Some("Bet".to_string()), Some("Ann".to_string()), None, None]
        );
    }

    #[test]
    fn test_empty_pools() {
        let records = owned([&[], &[], &[], &[]]);
        assert_eq!(best_assignment(&refs(&records)), [None; 4]);
    }
}
