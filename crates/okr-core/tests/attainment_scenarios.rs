use okr_core::{compute_attainment, KrKind};

fn numeric(realized: f64, floor: Option<f64>, target: f64, direction: &str) -> Option<f64> {
    compute_attainment(
        Some(realized),
        floor,
        Some(target),
        Some(direction),
        KrKind::Number,
    )
}

// ---- Increase direction ----

#[test]
fn realized_at_target_without_floor_is_100() {
    for target in [1.0, 37.5, 100.0, 1_000_000.0] {
        assert_eq!(numeric(target, None, target, "increase"), Some(100.0));
    }
}

#[test]
fn floored_interpolation_matches_worked_example() {
    // ((80 - 50) / (100 - 50)) * 100 = 60
    assert_eq!(numeric(80.0, Some(50.0), 100.0, "increase"), Some(60.0));
}

#[test]
fn overshoot_clamps_to_100() {
    assert_eq!(numeric(120.0, None, 100.0, "increase"), Some(100.0));
    assert_eq!(numeric(120.0, Some(50.0), 100.0, "increase"), Some(100.0));
}

#[test]
fn increase_with_floor_is_monotonic_and_bounded() {
    let floor = 50.0;
    let target = 100.0;
    let mut previous = -1.0;

    // Sweep realized across and beyond the floor→target window.
    for step in 0..=60 {
        let realized = 40.0 + step as f64 * 1.5; // 40 → 130
        let pct = numeric(realized, Some(floor), target, "increase").unwrap();
        assert!(
            pct >= previous,
            "attainment regressed at realized={realized}: {pct} < {previous}"
        );
        assert!((0.0..=100.0).contains(&pct), "out of range at realized={realized}");
        previous = pct;
    }
}

#[test]
fn negative_realized_without_floor_clamps_to_zero() {
    assert_eq!(numeric(-25.0, None, 100.0, "increase"), Some(0.0));
}

// ---- Decrease direction ----

#[test]
fn decrease_at_or_under_target_is_exactly_100() {
    for realized in [100.0, 99.9, 50.0, 0.0, -10.0] {
        assert_eq!(numeric(realized, None, 100.0, "decrease"), Some(100.0));
    }
}

#[test]
fn decrease_past_target_matches_worked_example() {
    // ((2*100 - 150) / 100) * 100 = 50
    assert_eq!(numeric(150.0, None, 100.0, "decrease"), Some(50.0));
}

#[test]
fn decrease_far_past_target_floors_at_zero() {
    assert_eq!(numeric(300.0, None, 100.0, "decrease"), Some(0.0));
}

#[test]
fn decrease_zero_target_defined_zero() {
    assert_eq!(numeric(5.0, None, 0.0, "decrease"), Some(0.0));
}

// ---- Not-computable sentinel ----

#[test]
fn missing_realized_is_not_computable() {
    assert_eq!(
        compute_attainment(None, Some(50.0), Some(100.0), Some("increase"), KrKind::Number),
        None
    );
}

#[test]
fn missing_target_is_not_computable() {
    assert_eq!(
        compute_attainment(Some(80.0), None, None, Some("increase"), KrKind::Number),
        None
    );
}

#[test]
fn sentinel_is_distinct_from_zero() {
    // "No data" and "0%" must never be conflated by the engine.
    let no_data = compute_attainment(None, None, Some(100.0), None, KrKind::Number);
    let zero = compute_attainment(Some(0.0), None, Some(100.0), None, KrKind::Number);
    assert_eq!(no_data, None);
    assert_eq!(zero, Some(0.0));
}

// ---- Direction text handling ----

#[test]
fn synonym_spellings_agree() {
    assert_eq!(
        numeric(70.0, None, 100.0, "increase"),
        numeric(70.0, None, 100.0, "maior-é-melhor"),
    );
    assert_eq!(
        numeric(130.0, None, 100.0, "decrease"),
        numeric(130.0, None, 100.0, "menor-é-melhor"),
    );
}

#[test]
fn unknown_direction_scores_zero_but_absent_defaults() {
    assert_eq!(numeric(70.0, None, 100.0, "best-effort"), Some(0.0));
    assert_eq!(
        compute_attainment(Some(70.0), None, Some(100.0), None, KrKind::Number),
        Some(70.0)
    );
}

// ---- Purity ----

#[test]
fn identical_inputs_identical_outputs() {
    let args = (Some(83.25), Some(10.0), Some(96.5), Some("increase"));
    let first = compute_attainment(args.0, args.1, args.2, args.3, KrKind::Currency);
    for _ in 0..10 {
        assert_eq!(
            compute_attainment(args.0, args.1, args.2, args.3, KrKind::Currency),
            first
        );
    }
}
