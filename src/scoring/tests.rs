use crate::scoring::{ExponentialDecay, ScoringPolicy, ScoringPolicyKind, TieredThreshold};

#[test]
fn exponential_gives_max_score_for_exact_guess() {
    assert_eq!(ExponentialDecay.score(0.0), 5000.0);
    assert_eq!(ExponentialDecay.max_score(), 5000.0);
}

#[test]
fn exponential_decreases_with_distance() {
    let distances = [0.0, 10.0, 100.0, 500.0, 1_000.0, 2_500.0, 5_000.0, 10_000.0, 20_000.0];
    let scores = distances
        .iter()
        .map(|&meters| ExponentialDecay.score(meters))
        .collect::<Vec<_>>();
    for pair in scores.windows(2) {
        assert!(pair[0] > pair[1], "{scores:?} is not strictly decreasing");
    }
}

#[test]
fn exponential_is_never_negative() {
    for meters in [0.0, 1e3, 1e5, 2e7, f64::MAX] {
        assert!(ExponentialDecay.score(meters) >= 0.0);
    }
    assert_eq!(ExponentialDecay.score(20_000_000.0), 0.0);
}

#[test]
fn exponential_500_meters() {
    // 5000 · e^(-0.15)
    assert_eq!(ExponentialDecay.score(500.0), 4304.0);
}

#[test]
fn tiered_boundaries_are_inclusive() {
    let policy = TieredThreshold;
    assert_eq!(policy.score_feet(0.0), 2.0);
    assert_eq!(policy.score_feet(20.0), 2.0);
    assert_eq!(policy.score_feet(20.0001), 1.5);
    assert_eq!(policy.score_feet(100.0), 1.5);
    assert_eq!(policy.score_feet(100.0001), 1.0);
    assert_eq!(policy.score_feet(200.0), 1.0);
    assert_eq!(policy.score_feet(500.0), 0.75);
    assert_eq!(policy.score_feet(1000.0), 0.5);
    assert_eq!(policy.score_feet(2000.0), 0.25);
    assert_eq!(policy.score_feet(2000.0001), 0.0);
    assert_eq!(policy.score_feet(1e9), 0.0);
}

#[test]
fn tiered_converts_meters_to_feet() {
    let policy = TieredThreshold;
    assert_eq!(policy.score(0.0), 2.0);
    // ~1640 ft
    assert_eq!(policy.score(500.0), 0.25);
    // ~98 ft
    assert_eq!(policy.score(30.0), 1.5);
    // ~2297 ft
    assert_eq!(policy.score(700.0), 0.0);
}

#[test]
fn kind_builds_matching_policy() {
    assert_eq!(
        ScoringPolicyKind::Exponential.policy().kind(),
        ScoringPolicyKind::Exponential
    );
    assert_eq!(ScoringPolicyKind::Tiered.policy().kind(), ScoringPolicyKind::Tiered);
    assert_eq!(ScoringPolicyKind::Tiered.policy().max_score(), 2.0);
}
