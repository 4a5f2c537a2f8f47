//! Error types for tiercost
//!
//! This module defines the error handling strategy for the crate. Library
//! code returns `crate::error::Result<T>` with the structured `PricingError`
//! enum; callers embedding this crate in a CLI can convert to `anyhow::Error`
//! at their boundary and keep the full error chain.
//!
//! ## When to Use Which Error
//!
//! - `CatalogParse`: a raw catalog entry failed to decode against the
//!   expected schema. Fatal to the whole index build (fail-fast, no partial
//!   index is returned).
//!
//! - `Validation`: a price tier failed the opt-in strict validation pass.
//!   Never raised by the default lenient calculator path.
//!
//! - `Json`: serialization failures outside the catalog-entry decode path.
//!
//! Numeric parse failures on a tier's `endRange` are deliberately NOT errors:
//! the calculator degrades that tier to contribute nothing beyond its begin
//! range and keeps going (see `crate::cost`).

use thiserror::Error;

/// Main error type for tiercost
#[derive(Error, Debug)]
pub enum PricingError {
    #[error("failed to parse catalog entry: {source}")]
    CatalogParse {
        #[source]
        source: serde_json::Error,
    },

    #[error("Validation error: {field} - {reason}")]
    Validation { field: String, reason: String },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, PricingError>;
