//! tiercost library
//!
//! Core logic for pricing cloud resources against graduated (tiered)
//! pricing schedules: a tier rate calculator and a pricing-catalog indexer.
//! Catalog retrieval and resource discovery live in the calling code; this
//! crate only operates on already-materialized catalog data.

pub mod catalog;
pub mod cost;
pub mod error;
pub mod validation;

// Re-export commonly used types
pub use catalog::{build_price_index, AttributeSelector, CatalogEntry, PriceIndex, PriceTier};
pub use cost::{compute_cost, to_quantity};
pub use error::{PricingError, Result};
