//! Property-based tests for tiercost
//!
//! These tests use proptest to generate random tier schedules and verify
//! that the calculator's algebraic properties hold across a wide range of
//! inputs.

use proptest::prelude::*;
use tiercost::catalog::PricePerUnit;
use tiercost::{compute_cost, to_quantity, PriceTier};

/// Well-formed tier: non-negative begin, bounded or unbounded end, non-negative price.
fn arb_tier() -> impl Strategy<Value = PriceTier> {
    (
        0.0f64..1000.0,
        prop::option::of(0.0f64..1000.0),
        0.0f64..100.0,
    )
        .prop_map(|(begin, span, price)| PriceTier {
            end_range: match span {
                Some(span) => (begin + span).to_string(),
                None => "Inf".to_string(),
            },
            begin_range: begin,
            price_per_unit: PricePerUnit { usd: price },
        })
}

fn arb_schedule() -> impl Strategy<Value = Vec<PriceTier>> {
    prop::collection::vec(arb_tier(), 0..8)
}

proptest! {
    #[test]
    fn test_cost_never_negative(
        tiers in arb_schedule(),
        quantity in 0.0f64..100_000.0
    ) {
        prop_assert!(compute_cost(&tiers, quantity) >= 0.0);
    }

    #[test]
    fn test_zero_quantity_costs_nothing(tiers in arb_schedule()) {
        prop_assert_eq!(compute_cost(&tiers, 0.0), 0.0);
    }

    #[test]
    fn test_single_unbounded_tier_is_linear(
        price in 0.0f64..100.0,
        quantity in 0.0f64..100_000.0
    ) {
        let tiers = vec![PriceTier {
            end_range: "Inf".to_string(),
            begin_range: 0.0,
            price_per_unit: PricePerUnit { usd: price },
        }];

        let cost = compute_cost(&tiers, quantity);
        let expected = quantity * price;
        prop_assert!((cost - expected).abs() <= expected.abs() * 1e-12);
    }

    #[test]
    fn test_order_independence(
        tiers in arb_schedule(),
        quantity in 0.0f64..100_000.0
    ) {
        let forward = compute_cost(&tiers, quantity);
        let reversed: Vec<PriceTier> = tiers.iter().rev().cloned().collect();
        let backward = compute_cost(&reversed, quantity);

        // Summation order may differ, so allow float-level slack
        let tolerance = forward.abs() * 1e-9 + 1e-9;
        prop_assert!((forward - backward).abs() <= tolerance,
            "forward={}, backward={}", forward, backward);
    }

    #[test]
    fn test_cost_monotonic_in_quantity(
        tiers in arb_schedule(),
        q1 in 0.0f64..100_000.0,
        q2 in 0.0f64..100_000.0
    ) {
        let (lo, hi) = if q1 <= q2 { (q1, q2) } else { (q2, q1) };
        prop_assert!(compute_cost(&tiers, lo) <= compute_cost(&tiers, hi));
    }

    #[test]
    fn test_malformed_tier_adds_nothing(
        tiers in arb_schedule(),
        begin in 0.0f64..1000.0,
        quantity in 0.0f64..100_000.0
    ) {
        let baseline = compute_cost(&tiers, quantity);

        let mut with_malformed = tiers.clone();
        with_malformed.push(PriceTier {
            end_range: "not-a-number".to_string(),
            begin_range: begin,
            price_per_unit: PricePerUnit { usd: 42.0 },
        });

        prop_assert_eq!(compute_cost(&with_malformed, quantity), baseline);
    }

    #[test]
    fn test_to_quantity_matches_count(count in proptest::num::i64::ANY) {
        prop_assert_eq!(to_quantity(Some(count)), count as f64);
    }
}
