//! Hand-built record pools for the documented relay scenarios.

use relayforge_core::{Distance, Gender, Stroke, TimeRecord};

use crate::records::{first_50, individual, leadoff, mid_relay};

/// Women's 50s with exactly one swimmer per medley stroke.
///
/// Back 30.0, breast 32.0, fly 29.0, free 28.0, all individual swims: the
/// 200 medley relay totals 1:59.00.
pub fn women_medley_one_per_stroke() -> Vec<TimeRecord> {
    let g = Gender::Female;
    let d = Distance::Fifty;
    vec![
        individual("Ada", g, d, Stroke::Back, 30.0),
        individual("Bea", g, d, Stroke::Breast, 32.0),
        individual("Cleo", g, d, Stroke::Fly, 29.0),
        individual("Dot", g, d, Stroke::Free, 28.0),
    ]
}

/// Women's 50 free times that are all rolling-start relay splits.
pub fn women_free_without_leadoff() -> Vec<TimeRecord> {
    let g = Gender::Female;
    let d = Distance::Fifty;
    vec![
        mid_relay("Eve", g, d, Stroke::Free, 24.9),
        mid_relay("Fay", g, d, Stroke::Free, 25.3),
        mid_relay("Gia", g, d, Stroke::Free, 25.8),
        mid_relay("Hana", g, d, Stroke::Free, 26.1),
    ]
}

/// Men's 100s where Xavi is the fastest breaststroker and butterflyer.
///
/// Filling legs greedily in medley order puts Xavi on breast for 3:32.50;
/// the optimal lineup puts him on fly with Dan on breast for 3:31.00.
pub fn men_medley_shared_specialist() -> Vec<TimeRecord> {
    let g = Gender::Male;
    let d = Distance::Hundred;
    vec![
        individual("Bob", g, d, Stroke::Back, 55.0),
        individual("Carl", g, d, Stroke::Back, 57.0),
        individual("Xavi", g, d, Stroke::Breast, 58.0),
        individual("Dan", g, d, Stroke::Breast, 60.0),
        individual("Ed", g, d, Stroke::Breast, 63.0),
        individual("Xavi", g, d, Stroke::Fly, 50.0),
        individual("Finn", g, d, Stroke::Fly, 53.5),
        individual("Carl", g, d, Stroke::Fly, 54.0),
        individual("Gus", g, d, Stroke::Free, 46.0),
        individual("Dan", g, d, Stroke::Free, 47.0),
    ]
}

/// A mixed-provenance pool covering every event for both genders.
pub fn full_team() -> Vec<TimeRecord> {
    let mut pool = Vec::new();

    for (gender, offset) in [(Gender::Female, 3.0), (Gender::Male, 0.0)] {
        let names: [&str; 6] = match gender {
            Gender::Female => ["Iris", "Jo", "Kim", "Lena", "Mia", "Nell"],
            Gender::Male => ["Omar", "Pete", "Quin", "Ray", "Sam", "Tom"],
        };

        for (i, name) in names.iter().enumerate() {
            let step = i as f64 * 0.4;

            let free_100 = individual(
                name,
                gender,
                Distance::Hundred,
                Stroke::Free,
                47.0 + offset + step,
            );
            pool.push(first_50(&free_100, 22.6 + offset + step / 2.0));
            pool.push(free_100);
            pool.push(individual(
                name,
                gender,
                Distance::Fifty,
                Stroke::Free,
                21.5 + offset + step,
            ));
            pool.push(mid_relay(name, gender, Distance::Fifty, Stroke::Free, 20.9 + offset + step));
            pool.push(individual(
                name,
                gender,
                Distance::TwoHundred,
                Stroke::Free,
                104.0 + offset + step * 2.0,
            ));

            let (stroke, base_50, base_100) = match i % 3 {
                0 => (Stroke::Back, 24.5, 52.5),
                1 => (Stroke::Breast, 27.0, 58.5),
                _ => (Stroke::Fly, 23.5, 51.0),
            };
            pool.push(individual(name, gender, Distance::Fifty, stroke, base_50 + offset + step));
            pool.push(leadoff(name, gender, Distance::Hundred, stroke, base_100 + offset + step));
        }
    }

    pool
}
