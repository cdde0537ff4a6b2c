//! Bounded top-K enumeration with progressive widening.

use relayforge_config::MedleyConfig;
use relayforge_core::{SwimTime, TimeRecord};
use smallvec::SmallVec;
use tracing::trace;

use super::{MedleySearchStats, StrokePools};

type Incumbent<'a> = Option<(SwimTime, [&'a TimeRecord; 4])>;

/// Searches for the fastest fully distinct lineup.
///
/// Starts with the configured bound and widens it by `widen_step` until a
/// distinct combination exists or every pool is used in full. Returns
/// `None` when no fully distinct lineup exists at all.
pub(super) fn search<'a>(
    pools: &StrokePools<'a>,
    config: &MedleyConfig,
    stats: &mut MedleySearchStats,
) -> Option<[&'a TimeRecord; 4]> {
    let longest = pools.iter().map(Vec::len).max().unwrap_or(0);
    let mut bound = config.candidate_bound.max(1);

    // An empty stroke can never be filled; skip straight to the fallback.
    if pools.iter().any(Vec::is_empty) {
        stats.final_bound = bound.min(longest);
        return None;
    }

    loop {
        let truncated: [&[&'a TimeRecord]; 4] =
            std::array::from_fn(|leg| &pools[leg][..bound.min(pools[leg].len())]);

        let before = stats.combinations_evaluated;
        let found = best_combination(&truncated, stats);
        stats.final_bound = bound;

        trace!(
            event = "medley_round",
            bound,
            combinations = stats.combinations_evaluated - before,
            found = found.is_some(),
        );

        if found.is_some() || bound >= longest {
            return found;
        }
        bound += config.widen_step.max(1);
        stats.widenings += 1;
    }
}

/// Minimum-total combination of one record per leg with distinct swimmers.
///
/// Pools must be sorted fastest first. Ties keep the first combination found
/// in leg-by-leg enumeration order.
fn best_combination<'a>(
    pools: &[&[&'a TimeRecord]; 4],
    stats: &mut MedleySearchStats,
) -> Option<[&'a TimeRecord; 4]> {
    let mut best: Incumbent<'a> = None;
    let mut chosen: SmallVec<[&'a TimeRecord; 4]> = SmallVec::new();
    extend(pools, &mut chosen, SwimTime::ZERO, &mut best, stats);
    best.map(|(_, legs)| legs)
}

fn extend<'a>(
    pools: &[&[&'a TimeRecord]; 4],
    chosen: &mut SmallVec<[&'a TimeRecord; 4]>,
    partial: SwimTime,
    best: &mut Incumbent<'a>,
    stats: &mut MedleySearchStats,
) {
    let leg = chosen.len();
    if leg == pools.len() {
        stats.combinations_evaluated += 1;
        if best.map_or(true, |(time, _)| partial < time) {
            *best = Some((partial, [chosen[0], chosen[1], chosen[2], chosen[3]]));
        }
        return;
    }

    for &record in pools[leg] {
        let total = partial + record.time();
        // Pools are sorted, so no later record on this leg can do better.
        if let Some((time, _)) = *best {
            if total >= time {
                break;
            }
        }
        if chosen.iter().any(|c| c.swimmer() == record.swimmer()) {
            continue;
        }
        chosen.push(record);
        extend(pools, chosen, total, best, stats);
        chosen.pop();
    }
}
