//! Opt-in strict validation for price tiers
//!
//! The calculator tolerates malformed tier end ranges by degrading them to a
//! zero billable span. Callers that would rather reject a malformed schedule
//! than silently under-price it can run this pass over a tier list before
//! calling `crate::cost::compute_cost`.

use crate::catalog::{EndRange, PriceTier, UNBOUNDED_SENTINEL};
use crate::error::{PricingError, Result};

/// Validate a tier list against the well-formedness rules the lenient
/// calculator does not enforce.
///
/// Rejects tiers with a negative or non-finite begin range, an `end_range`
/// that is neither a numeric literal nor the unbounded sentinel, a bounded
/// end below the begin range, or a negative or non-finite unit price. The
/// error names the first offending tier by its position in the list.
pub fn validate_tiers(tiers: &[PriceTier]) -> Result<()> {
    for (position, tier) in tiers.iter().enumerate() {
        if !tier.begin_range.is_finite() || tier.begin_range < 0.0 {
            return Err(PricingError::Validation {
                field: format!("tiers[{}].beginRange", position),
                reason: format!("must be a non-negative number, got: {}", tier.begin_range),
            });
        }

        match tier.end() {
            EndRange::Malformed => {
                return Err(PricingError::Validation {
                    field: format!("tiers[{}].endRange", position),
                    reason: format!(
                        "must be a numeric literal or \"{}\", got: {:?}",
                        UNBOUNDED_SENTINEL, tier.end_range
                    ),
                });
            }
            EndRange::Bounded(end) if end < tier.begin_range => {
                return Err(PricingError::Validation {
                    field: format!("tiers[{}].endRange", position),
                    reason: format!(
                        "end range {} is below begin range {}",
                        end, tier.begin_range
                    ),
                });
            }
            _ => {}
        }

        if !tier.price_per_unit.usd.is_finite() || tier.price_per_unit.usd < 0.0 {
            return Err(PricingError::Validation {
                field: format!("tiers[{}].pricePerUnit.USD", position),
                reason: format!(
                    "must be a non-negative number, got: {}",
                    tier.price_per_unit.usd
                ),
            });
        }
    }

    Ok(())
}
