//! Tier rate calculator
//!
//! Prices a measured consumption quantity against a graduated schedule:
//! each tier bills the slice of the quantity that falls inside its band at
//! that band's unit rate. All functions here are pure and safe to call
//! concurrently.

use tracing::warn;

use crate::catalog::{EndRange, PriceTier};

/// Total cost of consuming `quantity` units against a tiered schedule.
///
/// Each tier contributes independently: nothing if the quantity never
/// reaches the tier's begin range, otherwise the consumed span inside the
/// band times the tier's unit price. Because every contribution is computed
/// against the absolute quantity rather than a running remainder, the result
/// does not depend on tier ordering.
///
/// A tier whose `end_range` is neither numeric nor the unbounded sentinel
/// degrades to zero billable span rather than failing the computation. This
/// keeps catalog ingestion resilient to unexpected schedule formats at the
/// cost of silently under-pricing the malformed tier; callers that need
/// strict handling should run `crate::validation::validate_tiers` first.
pub fn compute_cost(tiers: &[PriceTier], quantity: f64) -> f64 {
    let mut total = 0.0;

    for tier in tiers {
        if quantity <= tier.begin_range {
            continue;
        }

        let upper = match tier.end() {
            EndRange::Unbounded => quantity,
            EndRange::Bounded(end) => quantity.min(end),
            EndRange::Malformed => {
                warn!(
                    end_range = %tier.end_range,
                    "unparsable tier end range, tier contributes nothing"
                );
                tier.begin_range
            }
        };

        total += (upper - tier.begin_range) * tier.price_per_unit.usd;
    }

    total
}

/// Convert an optional resource count into a billable quantity.
///
/// Discovery APIs report counts as optional integers; an absent count means
/// nothing to bill.
pub fn to_quantity(count: Option<i64>) -> f64 {
    match count {
        Some(value) => value as f64,
        None => 0.0,
    }
}
