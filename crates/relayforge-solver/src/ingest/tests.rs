//! Tests for saved-result ingestion.

use chrono::NaiveDate;
use relayforge_core::{Distance, Gender, SourceKind, Stroke, SwimTime};

use super::*;

fn row(event: &str, distance: u32) -> SavedResult {
    SavedResult::new("Ana Ruiz", "LHS", "Women", event, distance)
}

fn relay(event: &str, distance: u32, names: &[&str], splits: Vec<f64>) -> SavedResult {
    let swimmers = names
        .iter()
        .enumerate()
        .map(|(i, name)| RelaySwimmer::new(*name, i as u8 + 1))
        .collect();
    SavedResult::new("LHS 'A'", "LHS", "F", event, distance)
        .with_relay_swimmers(swimmers)
        .with_splits(splits)
}

#[test]
fn test_individual_row() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 20);
    let records = row("Women 50 Yard Freestyle", 50)
        .with_seconds(25.43)
        .with_meet("County Invite", date)
        .to_records()
        .unwrap();

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.swimmer().name(), "Ana Ruiz");
    assert_eq!(record.swimmer().team(), "LHS");
    assert_eq!(record.gender(), Gender::Female);
    assert_eq!(record.distance(), Distance::Fifty);
    assert_eq!(record.stroke(), Stroke::Free);
    assert_eq!(record.time(), SwimTime::from_hundredths(2_543));
    assert_eq!(record.source(), SourceKind::Individual);
    assert!(record.is_leadoff_eligible());
    assert_eq!(record.meet().name, "County Invite");
    assert_eq!(record.meet().date, date);
}

#[test]
fn test_event_suffix_sets_source() {
    let leadoff = row("50 Backstroke (lead-off)", 50).with_seconds(30.1);
    let relay_leg = row("50 Butterfly (relay)", 50).with_seconds(27.9);

    let leadoff = &leadoff.to_records().unwrap()[0];
    assert_eq!(leadoff.source(), SourceKind::LeadoffSplit);
    assert!(leadoff.is_leadoff_eligible());

    let relay_leg = &relay_leg.to_records().unwrap()[0];
    assert_eq!(relay_leg.source(), SourceKind::MidRelaySplit);
    assert_eq!(relay_leg.stroke(), Stroke::Fly);
    assert!(!relay_leg.is_leadoff_eligible());
}

#[test]
fn test_hundred_derives_first_50() {
    let records = row("Women 100 Yard Butterfly", 100)
        .with_seconds(62.0)
        .with_splits(vec![29.4, 32.6])
        .to_records()
        .unwrap();

    assert_eq!(records.len(), 2);
    let split = &records[1];
    assert_eq!(split.source(), SourceKind::First50Split);
    assert_eq!(split.distance(), Distance::Fifty);
    assert_eq!(split.stroke(), Stroke::Fly);
    assert_eq!(split.time().to_string(), "29.40");
    assert!(split.is_leadoff_eligible());
}

#[test]
fn test_rolling_start_hundred_has_no_first_50() {
    let records = row("100 Freestyle (relay)", 100)
        .with_seconds(52.0)
        .with_splits(vec![25.0, 27.0])
        .to_records()
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].source(), SourceKind::MidRelaySplit);
}

#[test]
fn test_bad_first_split_keeps_parent() {
    let records = row("Women 100 Yard Freestyle", 100)
        .with_seconds(55.0)
        .with_splits(vec![56.0, 1.0])
        .to_records()
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].distance(), Distance::Hundred);
}

#[test]
fn test_time_text_fallback() {
    let parsed = row("Women 200 Yard Freestyle", 200)
        .with_time_text("x1:58.07")
        .to_records()
        .unwrap();
    assert_eq!(parsed[0].time().to_string(), "1:58.07");

    let err = row("Women 200 Yard Freestyle", 200)
        .with_time_text("NT")
        .to_records()
        .unwrap_err();
    assert_eq!(err, IngestError::NoTime);
}

#[test]
fn test_rejections() {
    let cases = [
        (row("Women 50 Yard Freestyle", 50).with_seconds(25.0).disqualified(), "disqualified"),
        (row("Women 50 Yard Freestyle", 50).with_seconds(25.0).scratched(), "scratched"),
        (row("Women 50 Yard Freestyle", 50), "no_time"),
        (row("Women 50 Yard Freestyle", 50).with_seconds(0.0), "no_time"),
        (row("Women 200 Yard IM", 200).with_seconds(130.0), "unusable_stroke"),
        (row("Women 100 Yard Individual Medley", 100).with_seconds(65.0), "unusable_stroke"),
        (row("Women 1 Meter Diving", 1).with_seconds(200.0), "unusable_stroke"),
        (row("Women 500 Yard Freestyle", 500).with_seconds(330.0), "unsupported_distance"),
    ];
    for (saved, reason) in cases {
        let err = saved.to_records().unwrap_err();
        assert_eq!(err.reason(), reason, "{}", saved.event_name);
    }

    let mut unnamed = row("Women 50 Yard Freestyle", 50).with_seconds(25.0);
    unnamed.name = "  ".to_string();
    assert_eq!(unnamed.to_records().unwrap_err(), IngestError::MissingName);

    let mut unknown = row("Women 50 Yard Freestyle", 50).with_seconds(25.0);
    unknown.gender = "X".to_string();
    assert_eq!(unknown.to_records().unwrap_err().reason(), "unknown_gender");
}

#[test]
fn test_free_relay_one_split_per_leg() {
    let records = relay(
        "Women 200 Yard Freestyle Relay",
        200,
        &["Ana", "Bea", "Cy", "Di"],
        vec![25.1, 24.3, 24.8, 24.0],
    )
    .to_records()
    .unwrap();

    assert_eq!(records.len(), 4);
    assert!(records.iter().all(|r| r.distance() == Distance::Fifty));
    assert!(records.iter().all(|r| r.stroke() == Stroke::Free));
    assert_eq!(records[0].source(), SourceKind::LeadoffSplit);
    assert!(records[1..]
        .iter()
        .all(|r| r.source() == SourceKind::MidRelaySplit));
    assert_eq!(records[3].time().to_string(), "24.00");
}

#[test]
fn test_medley_relay_with_fifty_splits() {
    let records = relay(
        "Women 400 Yard Medley Relay",
        400,
        &["Ana", "Bea", "Cy", "Di"],
        vec![28.0, 30.0, 31.0, 33.5, 27.0, 29.0, 25.0, 26.5],
    )
    .to_records()
    .unwrap();

    // Four legs plus the lead-off's first 50.
    assert_eq!(records.len(), 5);
    let leadoff = &records[0];
    assert_eq!(leadoff.stroke(), Stroke::Back);
    assert_eq!(leadoff.distance(), Distance::Hundred);
    assert_eq!(leadoff.time().to_string(), "58.00");

    let first_50 = &records[1];
    assert_eq!(first_50.source(), SourceKind::First50Split);
    assert_eq!(first_50.time().to_string(), "28.00");
    assert!(first_50.is_leadoff_eligible());

    let strokes: Vec<_> = records[2..].iter().map(|r| r.stroke()).collect();
    assert_eq!(strokes, vec![Stroke::Breast, Stroke::Fly, Stroke::Free]);
    assert_eq!(records[2].time().to_string(), "1:04.50");
    assert_eq!(records[4].time().to_string(), "51.50");
}

#[test]
fn test_partial_splits_drop_missing_legs() {
    let records = relay(
        "Men 800 Yard Freestyle Relay",
        800,
        &["Al", "Bo", "Cy", "Di"],
        vec![24.0, 26.0, 26.5, 26.0, 25.0],
    )
    .to_records()
    .unwrap();

    // Bo has one of his four 50s; that is not a 200 time.
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].swimmer().name(), "Al");
    assert_eq!(records[0].distance(), Distance::TwoHundred);
    assert_eq!(records[0].time().to_string(), "1:42.50");
}

#[test]
fn test_leg_times_require_every_split() {
    let t = SwimTime::from_hundredths;
    let splits = [t(2_400), t(2_600), t(2_650), t(2_600), t(2_500)];

    let legs = leg_times(&splits, 4, 800);
    assert_eq!(legs, vec![Some(t(10_250)), None, None, None]);
}

#[test]
fn test_medley_legs_follow_leg_numbers() {
    let swimmers = vec![
        RelaySwimmer::new("Bea", 2),
        RelaySwimmer::new("Ana", 1),
        RelaySwimmer::new("Di", 4),
        RelaySwimmer::new("Cy", 3),
    ];
    let records = SavedResult::new("LHS 'A'", "LHS", "F", "Women 200 Yard Medley Relay", 200)
        .with_relay_swimmers(swimmers)
        .with_splits(vec![30.0, 32.0, 29.0, 28.0])
        .to_records()
        .unwrap();

    let legs: Vec<_> = records
        .iter()
        .map(|r| (r.swimmer().name(), r.stroke(), r.source()))
        .collect();
    assert_eq!(
        legs,
        vec![
            ("Ana", Stroke::Back, SourceKind::LeadoffSplit),
            ("Bea", Stroke::Breast, SourceKind::MidRelaySplit),
            ("Cy", Stroke::Fly, SourceKind::MidRelaySplit),
            ("Di", Stroke::Free, SourceKind::MidRelaySplit),
        ]
    );
    assert_eq!(records[0].time().to_string(), "30.00");
}

#[test]
fn test_unnumbered_legs_use_list_order() {
    let unnumbered = ["Ana", "Bea", "Cy", "Di"]
        .iter()
        .map(|name| RelaySwimmer::new(*name, 0))
        .collect();
    let records = SavedResult::new("LHS 'A'", "LHS", "F", "Women 200 Yard Freestyle Relay", 200)
        .with_relay_swimmers(unnumbered)
        .with_splits(vec![25.0, 24.5, 24.0, 23.5])
        .to_records()
        .unwrap();

    assert_eq!(records[0].swimmer().name(), "Ana");
    assert_eq!(records[0].source(), SourceKind::LeadoffSplit);
    assert!(records[1..]
        .iter()
        .all(|r| r.source() == SourceKind::MidRelaySplit));

    // Repeated leg numbers cannot be trusted either.
    let repeated = vec![
        RelaySwimmer::new("Ana", 2),
        RelaySwimmer::new("Bea", 1),
        RelaySwimmer::new("Cy", 2),
        RelaySwimmer::new("Di", 3),
    ];
    let records = SavedResult::new("LHS 'A'", "LHS", "F", "Women 200 Yard Freestyle Relay", 200)
        .with_relay_swimmers(repeated)
        .with_splits(vec![25.0, 24.5, 24.0, 23.5])
        .to_records()
        .unwrap();
    assert_eq!(records[0].swimmer().name(), "Ana");
    assert_eq!(records[0].source(), SourceKind::LeadoffSplit);
}

#[test]
fn test_relay_without_legs() {
    let no_splits = relay("Women 200 Yard Freestyle Relay", 200, &["Ana"], Vec::new());
    assert_eq!(no_splits.to_records().unwrap_err(), IngestError::RelayWithoutLegs);

    let no_swimmers = SavedResult::new("LHS 'A'", "LHS", "F", "Women 200 Yard Freestyle Relay", 200)
        .with_relay_swimmers(Vec::new())
        .with_splits(vec![25.0]);
    assert_eq!(no_swimmers.to_records().unwrap_err(), IngestError::RelayWithoutLegs);
}

#[test]
fn test_reason_counts() {
    let summary = IngestSummary {
        rejected: vec![
            (0, IngestError::NoTime),
            (3, IngestError::Disqualified),
            (4, IngestError::NoTime),
        ],
        ..IngestSummary::default()
    };
    assert_eq!(summary.rejected_count(), 3);
    let counts = summary.rejected_by_reason();
    assert_eq!(counts["no_time"], 2);
    assert_eq!(counts["disqualified"], 1);
}
