//! Seeded random pools for cross-checking solvers.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use relayforge_core::{Distance, Gender, SourceKind, Stroke, TimeRecord};

use crate::records::record;

/// Generates `record_count` records over `swimmer_count` swimmers.
///
/// Records cover both genders, all strokes and all relay distances, with a
/// mix of individual, lead-off and mid-relay sources. The same seed always
/// produces the same pool.
pub fn random_pool(seed: u64, swimmer_count: usize, record_count: usize) -> Vec<TimeRecord> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let strokes = [Stroke::Free, Stroke::Back, Stroke::Breast, Stroke::Fly];
    let distances = [Distance::Fifty, Distance::Hundred, Distance::TwoHundred];
    let sources = [
        SourceKind::Individual,
        SourceKind::LeadoffSplit,
        SourceKind::MidRelaySplit,
    ];

    (0..record_count)
        .map(|_| {
            let swimmer = rng.random_range(0..swimmer_count.max(1));
            let gender = if swimmer % 2 == 0 {
                Gender::Female
            } else {
                Gender::Male
            };
            let distance = distances[rng.random_range(0..distances.len())];
            let stroke = strokes[rng.random_range(0..strokes.len())];
            let source = sources[rng.random_range(0..sources.len())];
            let base = f64::from(distance.units()) * 0.5;
            let seconds = base + rng.random_range(0.0..base * 0.3);

            record(
                &format!("S{swimmer:02}"),
                gender,
                distance,
                stroke,
                (seconds * 100.0).round() / 100.0,
                source,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_pool() {
        assert_eq!(random_pool(7, 12, 80), random_pool(7, 12, 80));
    }

    #[test]
    fn test_pool_size() {
        assert_eq!(random_pool(1, 5, 33).len(), 33);
    }
}
