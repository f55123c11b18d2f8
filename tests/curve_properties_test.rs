use proptest::prelude::*;
use vtm_xp::{
    compute_base_xp, compute_breakdown, compute_final_modifier, compute_potential_score,
    compute_starting_xp, Attributes,
};

const EPS: f64 = 1e-9;

#[test]
fn test_reference_character() {
    let base = compute_base_xp(250);
    let potential = compute_potential_score(10, 10, 10, 8);
    let modifier = compute_final_modifier(potential);
    let total = compute_starting_xp(250, 10, 10, 10, 8);

    assert_eq!(base, 187.5);
    assert_eq!(potential, 94.0);
    assert!((modifier - 0.6604).abs() < 1e-3);
    assert!((total - 311.33).abs() < 0.01);
}

#[test]
fn test_curve_anchor_points() {
    assert_eq!(compute_base_xp(0), 0.0);
    assert_eq!(compute_base_xp(100), 50.0);
    assert_eq!(compute_base_xp(200), 150.0);
    assert_eq!(compute_base_xp(500), 375.0);
    assert_eq!(compute_base_xp(1500), 875.0);

    assert_eq!(compute_potential_score(10, 10, 10, 4), 100.0);
    assert_eq!(compute_potential_score(1, 1, 1, 13), 10.0);

    assert_eq!(compute_final_modifier(50.0), 0.0);
    assert!((compute_final_modifier(100.0) - 0.80).abs() < EPS);
    assert!((compute_final_modifier(10.0) + 0.80).abs() < EPS);
}

proptest! {
    #[test]
    fn base_xp_is_non_decreasing(age in 0i32..20_000) {
        prop_assert!(compute_base_xp(age + 1) >= compute_base_xp(age));
    }

    #[test]
    fn base_xp_has_no_jumps(age in 1i32..20_000) {
        // Steepest slope is the root band near zero: 5 * (sqrt(1) - sqrt(0)).
        prop_assert!(compute_base_xp(age) - compute_base_xp(age - 1) <= 5.0);
    }

    #[test]
    fn negative_age_counts_as_zero(age in i32::MIN..0) {
        prop_assert_eq!(compute_base_xp(age), compute_base_xp(0));
    }

    #[test]
    fn potential_score_stays_in_bounds(
        t in any::<i32>(),
        d in any::<i32>(),
        k in any::<i32>(),
        g in any::<i32>(),
    ) {
        let score = compute_potential_score(t, d, k, g);
        prop_assert!((10.0..=100.0).contains(&score));
    }

    #[test]
    fn out_of_range_talent_is_clamped(extra in 1i32..1_000, d in 1i32..=10, k in 1i32..=10, g in 4i32..=13) {
        prop_assert_eq!(
            compute_potential_score(10 + extra, d, k, g),
            compute_potential_score(10, d, k, g)
        );
        prop_assert_eq!(
            compute_potential_score(1 - extra, d, k, g),
            compute_potential_score(1, d, k, g)
        );
    }

    #[test]
    fn scoring_matches_clamped_attributes(
        t in any::<i32>(),
        d in any::<i32>(),
        k in any::<i32>(),
        g in any::<i32>(),
    ) {
        let clamped = Attributes::new(t, d, k, g).clamped();
        prop_assert_eq!(
            compute_potential_score(t, d, k, g),
            compute_potential_score(
                clamped.talent,
                clamped.discipline,
                clamped.knowledge_access,
                clamped.generation,
            )
        );
        prop_assert_eq!(
            compute_breakdown(0, &Attributes::new(t, d, k, g)).potential_score,
            compute_breakdown(0, &clamped).potential_score
        );
    }

    #[test]
    fn modifier_stays_in_bounds(score in -1_000.0f64..1_000.0) {
        let modifier = compute_final_modifier(score);
        prop_assert!((-0.80..=0.80).contains(&modifier));
    }

    #[test]
    fn modifier_is_non_decreasing(a in 10.0f64..=100.0, b in 10.0f64..=100.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(compute_final_modifier(low) <= compute_final_modifier(high));
    }

    #[test]
    fn starting_xp_is_the_composition(
        age in 0i32..=10_000,
        t in 1i32..=10,
        d in 1i32..=10,
        k in 1i32..=10,
        g in 4i32..=13,
    ) {
        let expected = compute_base_xp(age)
            * (1.0 + compute_final_modifier(compute_potential_score(t, d, k, g)));
        prop_assert_eq!(compute_starting_xp(age, t, d, k, g), expected);
    }
}
