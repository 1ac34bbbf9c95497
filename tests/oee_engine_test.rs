// ==========================================
// OEE engine tests
// ==========================================
// Grouping, summation, the fallback branches, rounding, ordering and
// the unclamped edge behavior.
// ==========================================

mod test_helpers;

use manufacturing_ops::engine::{OeeEngine, DEFAULT_SHIFT_MINUTES};
use test_helpers::{parse_date, record};

#[test]
fn test_one_metric_per_distinct_shift_date_pair() {
    let records = vec![
        record("Shift 1", "2024-01-01", Some(10), Some(10), Some(10), None),
        record("Shift 1", "2024-01-01", Some(10), Some(10), Some(10), None),
        record("Shift 2", "2024-01-01", Some(10), Some(10), Some(10), None),
        record("Shift 1", "2024-01-02", Some(10), Some(10), Some(10), None),
        record("Shift 2", "2024-01-01", Some(10), Some(10), Some(10), None),
    ];

    let metrics = OeeEngine::new().compute(&records);
    assert_eq!(metrics.len(), 3, "three distinct (shift, date) pairs");
}

#[test]
fn test_sums_cover_exactly_the_records_of_the_key() {
    let records = vec![
        record("Shift 1", "2024-01-01", Some(100), Some(95), Some(90), Some(15)),
        record("Shift 1", "2024-01-01", Some(50), Some(50), Some(48), Some(0)),
        record("Shift 2", "2024-01-01", Some(70), Some(60), Some(55), Some(30)),
    ];

    let groups = OeeEngine::new().group_by_shift(&records);
    assert_eq!(groups.len(), 2);

    let first = &groups[0];
    assert_eq!(first.shift, "Shift 1");
    assert_eq!(first.date, parse_date("2024-01-01"));
    assert_eq!(first.total_planned, 150);
    assert_eq!(first.total_actual, 145);
    assert_eq!(first.total_good, 138);
    assert_eq!(first.total_downtime, 15);
    assert_eq!(first.record_count, 2);

    let second = &groups[1];
    assert_eq!(second.shift, "Shift 2");
    assert_eq!(second.total_planned, 70);
    assert_eq!(second.total_actual, 60);
    assert_eq!(second.total_good, 55);
    assert_eq!(second.total_downtime, 30);
}

#[test]
fn test_reference_scenario_two_records_one_shift() {
    // A: planned 100 / actual 95 / good 90 / downtime 15
    // B: planned 50 / actual 50 / good 48 / downtime 0
    let records = vec![
        record("Shift 1", "2024-01-01", Some(100), Some(95), Some(90), Some(15)),
        record("Shift 1", "2024-01-01", Some(50), Some(50), Some(48), Some(0)),
    ];

    let metrics = OeeEngine::new().compute(&records);
    assert_eq!(metrics.len(), 1);

    let m = &metrics[0];
    assert_eq!(m.shift, "Shift 1");
    assert_eq!(m.date, parse_date("2024-01-01"));
    assert_eq!(m.availability, 96.88); // (480-15)/480 * 100 = 96.875
    assert_eq!(m.performance, 96.67); // 145/150 * 100
    assert_eq!(m.quality, 95.17); // 138/145 * 100
    // oee is the rounded product of the unrounded factors; exact value
    // is 89.125, so the stored metric sits within half a cent of it
    assert!((m.oee - 89.125).abs() <= 0.005 + 1e-9, "oee was {}", m.oee);
}

#[test]
fn test_zero_downtime_group_has_full_availability() {
    let records = vec![record(
        "Shift 1",
        "2024-01-01",
        Some(100),
        Some(100),
        Some(100),
        Some(0),
    )];

    let metrics = OeeEngine::new().compute(&records);
    assert_eq!(metrics[0].availability, 100.0);
    assert_eq!(metrics[0].oee, 100.0);
}

#[test]
fn test_zero_planned_group_has_zero_performance() {
    let records = vec![record("Shift 1", "2024-01-01", Some(0), Some(0), Some(0), Some(10))];

    let metrics = OeeEngine::new().compute(&records);
    let m = &metrics[0];
    assert_eq!(m.performance, 0.0);
    assert_eq!(m.quality, 0.0);
    assert_eq!(m.oee, 0.0);
    assert!(m.availability.is_finite());
}

#[test]
fn test_missing_counters_contribute_zero() {
    // downtime absent entirely: the group counts as having seen none
    let records = vec![
        record("Shift 1", "2024-01-01", Some(100), Some(95), Some(90), None),
        record("Shift 1", "2024-01-01", None, None, None, None),
    ];

    let metrics = OeeEngine::new().compute(&records);
    assert_eq!(metrics.len(), 1);

    let m = &metrics[0];
    assert_eq!(m.availability, 100.0);
    assert_eq!(m.performance, 95.0);
    assert!(!m.oee.is_nan());
}

#[test]
fn test_performance_and_quality_are_not_capped() {
    // actual beyond planned and good beyond actual both surface as >100
    let records = vec![record(
        "Shift 1",
        "2024-01-01",
        Some(100),
        Some(150),
        Some(180),
        Some(0),
    )];

    let metrics = OeeEngine::new().compute(&records);
    let m = &metrics[0];
    assert_eq!(m.performance, 150.0);
    assert_eq!(m.quality, 120.0);
}

#[test]
fn test_downtime_beyond_window_goes_negative() {
    let records = vec![record(
        "Shift 1",
        "2024-01-01",
        Some(100),
        Some(100),
        Some(100),
        Some(500),
    )];

    let metrics = OeeEngine::new().compute(&records);
    // (480 - 500) / 480 * 100 = -4.1666..., surfaced rather than clamped
    assert_eq!(metrics[0].availability, -4.17);
    assert!(metrics[0].oee < 0.0);
}

#[test]
fn test_output_preserves_first_seen_key_order() {
    let records = vec![
        record("Shift 2", "2024-01-03", Some(10), Some(10), Some(10), None),
        record("Shift 1", "2024-01-01", Some(10), Some(10), Some(10), None),
        record("Shift 2", "2024-01-03", Some(10), Some(10), Some(10), None),
        record("Shift 3", "2024-01-02", Some(10), Some(10), Some(10), None),
        record("Shift 1", "2024-01-01", Some(10), Some(10), Some(10), None),
    ];

    let metrics = OeeEngine::new().compute(&records);
    let order: Vec<(&str, &str)> = vec![
        ("Shift 2", "2024-01-03"),
        ("Shift 1", "2024-01-01"),
        ("Shift 3", "2024-01-02"),
    ];
    assert_eq!(metrics.len(), order.len());
    for (metric, (shift, date)) in metrics.iter().zip(order) {
        assert_eq!(metric.shift, shift);
        assert_eq!(metric.date, parse_date(date));
    }
}

#[test]
fn test_oee_composition_law_holds_for_every_metric() {
    let records = vec![
        record("Shift 1", "2024-01-01", Some(100), Some(95), Some(90), Some(15)),
        record("Shift 2", "2024-01-01", Some(80), Some(85), Some(80), Some(0)),
        record("Shift 1", "2024-01-02", Some(0), Some(0), Some(0), Some(600)),
    ];

    for m in OeeEngine::new().compute(&records) {
        let recomposed = m.availability * m.performance * m.quality / 10_000.0;
        // the factors were rounded individually, so allow half a cent
        // of drift on each side of the recomposition
        assert!(
            (m.oee - recomposed).abs() < 0.05,
            "oee {} vs recomposed {}",
            m.oee,
            recomposed
        );
    }
}

#[test]
fn test_empty_input_produces_empty_output() {
    let metrics = OeeEngine::new().compute(&[]);
    assert!(metrics.is_empty());
}

#[test]
fn test_custom_shift_window() {
    let records = vec![record(
        "Shift 1",
        "2024-01-01",
        Some(100),
        Some(100),
        Some(100),
        Some(60),
    )];

    let engine = OeeEngine::with_shift_minutes(600);
    assert_eq!(engine.shift_minutes(), 600);

    let metrics = engine.compute(&records);
    assert_eq!(metrics[0].availability, 90.0); // (600-60)/600 * 100

    // same records against the default window
    let default_metrics = OeeEngine::new().compute(&records);
    assert_eq!(default_metrics[0].availability, 87.5); // (480-60)/480 * 100
    assert_eq!(OeeEngine::new().shift_minutes(), DEFAULT_SHIFT_MINUTES);
}

#[test]
fn test_shift_labels_with_separator_characters_stay_distinct() {
    let first = record("Shift 1-2024", "2024-01-01", Some(10), Some(10), Some(10), None);
    let second = record("Shift 1", "2024-01-01", Some(20), Some(20), Some(20), None);

    let metrics = OeeEngine::new().compute(&[first, second]);
    assert_eq!(metrics.len(), 2);
}
