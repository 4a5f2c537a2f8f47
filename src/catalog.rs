//! Pricing-catalog data model and index construction
//!
//! Contains the serde model for raw catalog entries (the
//! `product.attributes` / `terms.OnDemand` schema emitted by cloud pricing
//! APIs) and `build_price_index`, which turns a batch of raw entries into a
//! lookup from a chosen product attribute to that product's price tiers.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PricingError, Result};

/// Sentinel used by the catalog format for a tier with no upper limit.
pub const UNBOUNDED_SENTINEL: &str = "Inf";

/// One pricing-catalog record: product attributes plus on-demand terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub product: Product,
    pub terms: Terms,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub attributes: ProductAttributes,
}

/// Descriptive attributes of a catalog product
///
/// All fields are optional on the wire and default to the empty string,
/// matching how the pricing API omits attributes that do not apply to a
/// given product family.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductAttributes {
    pub group: String,
    pub operation: String,
    pub group_description: String,
    pub request_description: String,
    pub instance_type: String,
    pub instance_type_family: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Terms {
    #[serde(rename = "OnDemand", default)]
    pub on_demand: HashMap<String, TermPricing>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TermPricing {
    #[serde(rename = "priceDimensions", default)]
    pub price_dimensions: HashMap<String, PriceTier>,
}

/// One graduated pricing band
///
/// Consumption strictly above `begin_range` and up to `end_range` is billed
/// at `price_per_unit` per unit. `end_range` is kept in its wire form (a
/// numeric literal or the `"Inf"` sentinel) and interpreted lazily via
/// [`PriceTier::end`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceTier {
    pub end_range: String,
    #[serde(with = "f64_as_string")]
    pub begin_range: f64,
    pub price_per_unit: PricePerUnit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePerUnit {
    #[serde(rename = "USD", with = "f64_as_string")]
    pub usd: f64,
}

/// Interpreted upper bound of a price tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EndRange {
    Bounded(f64),
    Unbounded,
    /// Neither a numeric literal nor the unbounded sentinel. The calculator
    /// treats such a tier as ending at its own begin range (see
    /// `crate::cost::compute_cost`); strict validation rejects it.
    Malformed,
}

impl PriceTier {
    /// Interpret the wire-form `end_range` string.
    pub fn end(&self) -> EndRange {
        if self.end_range == UNBOUNDED_SENTINEL {
            return EndRange::Unbounded;
        }
        match self.end_range.parse::<f64>() {
            Ok(end) => EndRange::Bounded(end),
            Err(_) => EndRange::Malformed,
        }
    }
}

/// Numeric fields the catalog format carries as JSON strings
mod f64_as_string {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse::<f64>()
            .map_err(|e| de::Error::custom(format!("invalid numeric string {:?}: {}", raw, e)))
    }
}

/// Product attribute used to key a price index
///
/// The recognized attribute set is closed: the original catalog format keys
/// by one of exactly six descriptive attributes, so the selector is an enum
/// rather than a free-form string. Callers holding the wire-format attribute
/// name can parse it with `FromStr`, which surfaces unrecognized names as a
/// `Validation` error instead of silently indexing everything under `""`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeSelector {
    Group,
    Operation,
    GroupDescription,
    RequestDescription,
    InstanceType,
    InstanceTypeFamily,
}

impl AttributeSelector {
    /// Wire-format name of the selected attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeSelector::Group => "group",
            AttributeSelector::Operation => "operation",
            AttributeSelector::GroupDescription => "groupDescription",
            AttributeSelector::RequestDescription => "requestDescription",
            AttributeSelector::InstanceType => "instanceType",
            AttributeSelector::InstanceTypeFamily => "instanceTypeFamily",
        }
    }

    /// Value of the selected attribute on a product.
    pub fn extract<'a>(&self, attributes: &'a ProductAttributes) -> &'a str {
        match self {
            AttributeSelector::Group => &attributes.group,
            AttributeSelector::Operation => &attributes.operation,
            AttributeSelector::GroupDescription => &attributes.group_description,
            AttributeSelector::RequestDescription => &attributes.request_description,
            AttributeSelector::InstanceType => &attributes.instance_type,
            AttributeSelector::InstanceTypeFamily => &attributes.instance_type_family,
        }
    }
}

impl fmt::Display for AttributeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttributeSelector {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "group" => Ok(AttributeSelector::Group),
            "operation" => Ok(AttributeSelector::Operation),
            "groupDescription" => Ok(AttributeSelector::GroupDescription),
            "requestDescription" => Ok(AttributeSelector::RequestDescription),
            "instanceType" => Ok(AttributeSelector::InstanceType),
            "instanceTypeFamily" => Ok(AttributeSelector::InstanceTypeFamily),
            other => Err(PricingError::Validation {
                field: "selector".to_string(),
                reason: format!("unrecognized attribute name: {}", other),
            }),
        }
    }
}

/// Lookup from attribute value to that product's flattened price tiers
pub type PriceIndex = HashMap<String, Vec<PriceTier>>;

/// Build a price index from raw serialized catalog entries.
///
/// Each raw entry is decoded into a [`CatalogEntry`]; the first decode
/// failure aborts the whole build and no partial index is returned. All
/// tiers across all on-demand terms and price dimensions of an entry are
/// flattened into a single list (which term a tier came from is discarded)
/// and inserted under the entry's selected attribute value. A later entry
/// with the same attribute value overwrites the earlier one.
///
/// An empty input yields an empty index.
pub fn build_price_index<I, S>(raw_entries: I, selector: AttributeSelector) -> Result<PriceIndex>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut index = PriceIndex::new();
    let mut entry_count = 0usize;

    for raw in raw_entries {
        let entry: CatalogEntry = serde_json::from_str(raw.as_ref())
            .map_err(|source| PricingError::CatalogParse { source })?;
        entry_count += 1;

        let key = selector.extract(&entry.product.attributes).to_string();
        let tiers: Vec<PriceTier> = entry
            .terms
            .on_demand
            .into_values()
            .flat_map(|term| term.price_dimensions.into_values())
            .collect();

        index.insert(key, tiers);
    }

    debug!(
        selector = %selector,
        entries = entry_count,
        keys = index.len(),
        "built price index"
    );
    Ok(index)
}
