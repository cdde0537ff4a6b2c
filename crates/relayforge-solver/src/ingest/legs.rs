//! Relay result explosion into per-leg records.

use relayforge_core::{
    Distance, Gender, MeetInfo, SourceKind, Stroke, SwimTime, SwimmerId, TimeRecord,
};

use super::{first_50, IngestError, RelaySwimmer, SavedResult};

/// Splits per leg when the split list holds 50-distance splits.
fn splits_per_leg(leg_distance: u32) -> usize {
    (leg_distance / 50).max(1) as usize
}

/// Leg times of a relay from its split list.
///
/// When there is one split per swimmer, each split is a leg. Otherwise the
/// splits are 50s and each leg sums `leg_distance / 50` consecutive splits.
/// A leg missing any of its splits is `None`: a partial sum is not a time
/// for the full leg distance.
///
/// # Examples
///
/// ```
/// use relayforge_core::SwimTime;
/// use relayforge_solver::ingest::leg_times;
///
/// let t = SwimTime::from_hundredths;
/// let splits = [t(2_600), t(2_800), t(2_500), t(2_700), t(2_400)];
///
/// let legs = leg_times(&splits, 4, 400);
/// assert_eq!(legs, vec![Some(t(5_400)), Some(t(5_200)), None, None]);
/// ```
pub fn leg_times(
    splits: &[SwimTime],
    swimmer_count: usize,
    event_distance: u32,
) -> Vec<Option<SwimTime>> {
    if splits.is_empty() || swimmer_count == 0 {
        return Vec::new();
    }
    if splits.len() == swimmer_count {
        return splits.iter().copied().map(Some).collect();
    }

    let per_leg = splits_per_leg(event_distance / swimmer_count as u32);
    (0..swimmer_count)
        .map(|leg| {
            let start = leg * per_leg;
            splits
                .get(start..start + per_leg)
                .map(|leg_splits| leg_splits.iter().sum())
        })
        .collect()
}

/// Relay swimmers in the order they swam.
fn swim_order(swimmers: &[RelaySwimmer]) -> Vec<&RelaySwimmer> {
    let mut ordered: Vec<&RelaySwimmer> = swimmers.iter().collect();
    let numbered = swimmers
        .iter()
        .all(|swimmer| swimmer.leg >= 1 && usize::from(swimmer.leg) <= swimmers.len());
    if !numbered {
        return ordered;
    }

    ordered.sort_by_key(|swimmer| swimmer.leg);
    if ordered.windows(2).any(|pair| pair[0].leg == pair[1].leg) {
        return swimmers.iter().collect();
    }
    ordered
}

/// Explodes a relay row into one record per swum leg.
///
/// Swimmers are taken in leg-number order when every swimmer carries a
/// distinct leg number, else in list order. The first leg is a lead-off
/// split, later legs are mid-relay splits. Medley legs swim back, breast,
/// fly and free in order. A 100-distance lead-off leg also yields its first
/// 50 when 50 splits are available.
pub(super) fn explode_relay(
    row: &SavedResult,
    gender: Gender,
    meet: &MeetInfo,
) -> Result<Vec<TimeRecord>, IngestError> {
    let swimmer_count = row.relay_swimmers.len();
    if swimmer_count == 0 || row.splits.is_empty() {
        return Err(IngestError::RelayWithoutLegs);
    }

    let leg_units = row.event_distance / swimmer_count as u32;
    let distance = Distance::try_from(leg_units)?;
    let splits = row
        .splits
        .iter()
        .map(|seconds| SwimTime::from_seconds(*seconds))
        .collect::<Result<Vec<_>, _>>()?;
    let times = leg_times(&splits, swimmer_count, row.event_distance);
    let per_split_legs = splits.len() == swimmer_count;

    let medley = row.event_name.to_ascii_lowercase().contains("medley");
    let mut records = Vec::with_capacity(swimmer_count + 1);

    for (index, (swimmer, time)) in swim_order(&row.relay_swimmers)
        .into_iter()
        .zip(times)
        .enumerate()
    {
        let Some(time) = time.filter(|time| *time > SwimTime::ZERO) else {
            continue;
        };
        let name = swimmer.name.trim();
        if name.is_empty() {
            continue;
        }

        let stroke = if medley {
            Stroke::MEDLEY_ORDER
                .get(index)
                .copied()
                .unwrap_or(Stroke::Free)
        } else {
            Stroke::Free
        };
        let source = if index == 0 {
            SourceKind::LeadoffSplit
        } else {
            SourceKind::MidRelaySplit
        };

        let record = TimeRecord::new(
            SwimmerId::new(name, row.team.as_str()),
            gender,
            distance,
            stroke,
            time,
            source,
        )?
        .with_meet(meet.clone());

        let split = if per_split_legs {
            None
        } else {
            let per_leg = splits_per_leg(leg_units);
            row.splits
                .get(index * per_leg)
                .and_then(|first| first_50(&record, *first, per_leg))
        };

        records.push(record);
        records.extend(split);
    }

    if records.is_empty() {
        return Err(IngestError::RelayWithoutLegs);
    }
    Ok(records)
}
