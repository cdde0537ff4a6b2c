//! Eligibility resolver.
//!
//! Builds, for each (gender, distance, stroke), the list of matching records
//! sorted fastest first. Sorting is stable, so equal times keep their input
//! order. The index is built once per optimization pass; the record pool is
//! read-only for the lifetime of the resolver.

use std::collections::{BTreeMap, HashMap, HashSet};

use relayforge_core::{Distance, Gender, SourceKind, Stroke, SwimTime, SwimmerId, TimeRecord};

/// Key of one candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PoolKey {
    pub gender: Gender,
    pub distance: Distance,
    pub stroke: Stroke,
}

impl PoolKey {
    pub fn new(gender: Gender, distance: Distance, stroke: Stroke) -> Self {
        Self {
            gender,
            distance,
            stroke,
        }
    }

    pub fn of(record: &TimeRecord) -> Self {
        Self::new(record.gender(), record.distance(), record.stroke())
    }
}

/// Candidate lists for every (gender, distance, stroke) present in a pool.
///
/// # Examples
///
/// ```
/// use relayforge_core::{Distance, Gender, Stroke};
/// use relayforge_solver::EligibilityResolver;
/// use relayforge_test::{individual, mid_relay};
///
/// let records = vec![
///     individual("Ana", Gender::Female, Distance::Fifty, Stroke::Free, 25.1),
///     mid_relay("Bea", Gender::Female, Distance::Fifty, Stroke::Free, 24.7),
/// ];
/// let resolver = EligibilityResolver::new(&records);
///
/// let list = resolver.candidates(Gender::Female, Distance::Fifty, Stroke::Free);
/// assert_eq!(list.len(), 2);
/// assert_eq!(list[0].swimmer().name(), "Bea");
/// assert!(!list[0].is_leadoff_eligible());
///
/// assert!(resolver.candidates(Gender::Male, Distance::Fifty, Stroke::Free).is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EligibilityResolver<'a> {
    index: HashMap<PoolKey, Vec<&'a TimeRecord>>,
}

impl<'a> EligibilityResolver<'a> {
    /// Partitions `records` by gender, distance and stroke and sorts each list.
    pub fn new(records: &'a [TimeRecord]) -> Self {
        let mut index: HashMap<PoolKey, Vec<&'a TimeRecord>> = HashMap::new();
        for record in records {
            index.entry(PoolKey::of(record)).or_default().push(record);
        }
        for list in index.values_mut() {
            list.sort_by_key(|record| record.time());
        }
        Self { index }
    }

    /// Sorted candidates for one key; empty when no record matches.
    pub fn candidates(
        &self,
        gender: Gender,
        distance: Distance,
        stroke: Stroke,
    ) -> &[&'a TimeRecord] {
        self.candidates_for(PoolKey::new(gender, distance, stroke))
    }

    pub fn candidates_for(&self, key: PoolKey) -> &[&'a TimeRecord] {
        self.index.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Candidate pool for one key, ready for selection.
    pub fn pool(&self, gender: Gender, distance: Distance, stroke: Stroke) -> CandidatePool<'a> {
        CandidatePool::new(self.candidates(gender, distance, stroke).to_vec())
    }

    /// Number of non-empty candidate lists.
    pub fn key_count(&self) -> usize {
        self.index.len()
    }

    /// Best times of every swimmer for one key, fastest swimmer first.
    pub fn bests(&self, gender: Gender, distance: Distance, stroke: Stroke) -> Vec<SwimmerBests> {
        let mut order: Vec<&SwimmerId> = Vec::new();
        let mut by_swimmer: HashMap<&SwimmerId, SwimmerBests> = HashMap::new();

        for record in self.candidates(gender, distance, stroke) {
            let bests = by_swimmer.entry(record.swimmer()).or_insert_with(|| {
                order.push(record.swimmer());
                SwimmerBests::new(record.swimmer().clone())
            });
            bests.observe(record);
        }

        order
            .into_iter()
            .filter_map(|swimmer| by_swimmer.remove(swimmer))
            .collect()
    }
}

/// One swimmer's best times for a (gender, distance, stroke).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwimmerBests {
    pub swimmer: SwimmerId,
    /// Fastest time per source kind.
    pub by_source: BTreeMap<SourceKind, SwimTime>,
    /// Fastest time usable on a lead-off leg.
    pub leadoff: Option<SwimTime>,
}

impl SwimmerBests {
    fn new(swimmer: SwimmerId) -> Self {
        Self {
            swimmer,
            by_source: BTreeMap::new(),
            leadoff: None,
        }
    }

    fn observe(&mut self, record: &TimeRecord) {
        let time = record.time();
        self.by_source
            .entry(record.source())
            .and_modify(|best| *best = (*best).min(time))
            .or_insert(time);
        if record.is_leadoff_eligible() {
            self.leadoff = Some(self.leadoff.map_or(time, |best| best.min(time)));
        }
    }

    /// Fastest time of any source.
    pub fn overall(&self) -> Option<SwimTime> {
        self.by_source.values().min().copied()
    }
}

/// A sorted candidate list that shrinks as swimmers are selected.
///
/// Selecting a swimmer never mutates the pool; [`CandidatePool::without`]
/// returns a new pool with every record of that swimmer removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidatePool<'a> {
    records: Vec<&'a TimeRecord>,
}

impl<'a> CandidatePool<'a> {
    /// Wraps records already sorted fastest first.
    pub fn new(records: Vec<&'a TimeRecord>) -> Self {
        debug_assert!(records.windows(2).all(|w| w[0].time() <= w[1].time()));
        Self { records }
    }

    pub fn records(&self) -> &[&'a TimeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Fastest record of any source.
    pub fn fastest(&self) -> Option<&'a TimeRecord> {
        self.records.first().copied()
    }

    /// Fastest record swum from the blocks.
    pub fn fastest_leadoff(&self) -> Option<&'a TimeRecord> {
        self.records
            .iter()
            .copied()
            .find(|record| record.is_leadoff_eligible())
    }

    /// A new pool without any record of `swimmer`.
    pub fn without(&self, swimmer: &SwimmerId) -> CandidatePool<'a> {
        Self {
            records: self
                .records
                .iter()
                .copied()
                .filter(|record| record.swimmer() != swimmer)
                .collect(),
        }
    }

    /// A new pool keeping only records accepted by `keep`.
    pub fn filtered(&self, keep: impl Fn(&TimeRecord) -> bool) -> CandidatePool<'a> {
        Self {
            records: self
                .records
                .iter()
                .copied()
                .filter(|record| keep(record))
                .collect(),
        }
    }

    /// Each swimmer's fastest record, fastest swimmer first.
    pub fn distinct_swimmers(&self) -> Vec<&'a TimeRecord> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .copied()
            .filter(|record| seen.insert(record.swimmer()))
            .collect()
    }
}
