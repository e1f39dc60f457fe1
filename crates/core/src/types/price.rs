//! Unit-price resolution for heterogeneous catalog records.
//!
//! Catalog records are loose JSON documents whose price field depends on the
//! listing type: most products carry a `price` field, while breeding-pair
//! listings carry `PricePerCouple`. Resolution happens exactly once, when a
//! line is created; the resolved amount is frozen on the line afterwards.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field holding the unit price on most catalog records.
pub const LISTED_PRICE_FIELD: &str = "price";

/// Alternate price field used by breeding-pair listings.
pub const PAIR_PRICE_FIELD: &str = "PricePerCouple";

/// Which field supplied a line's unit price.
///
/// Recorded on every cart line so a zero price that came from a missing
/// field stays distinguishable from a genuine zero price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PriceSource {
    /// Price came from the generic `price` field.
    #[default]
    Listed,
    /// Price came from the breeding-pair `PricePerCouple` field.
    PerPair,
    /// No recognized price field resolved; the line was priced at zero.
    Defaulted,
}

/// Outcome of resolving a unit price from a raw catalog record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceResolution {
    /// The generic `price` field resolved.
    Listed(Decimal),
    /// The `PricePerCouple` field resolved.
    PerPair(Decimal),
    /// Neither field was present and numeric.
    Missing,
}

impl PriceResolution {
    /// Resolve a unit price from a raw catalog record.
    ///
    /// The generic `price` field wins when it is present and numeric;
    /// otherwise `PricePerCouple` is consulted. Numeric strings are accepted
    /// alongside JSON numbers because both shapes occur in exported catalog
    /// data.
    #[must_use]
    pub fn resolve(record: &Value) -> Self {
        if let Some(amount) = decimal_field(record, LISTED_PRICE_FIELD) {
            return Self::Listed(amount);
        }
        if let Some(amount) = decimal_field(record, PAIR_PRICE_FIELD) {
            return Self::PerPair(amount);
        }
        Self::Missing
    }

    /// The resolved amount, with [`PriceResolution::Missing`] reading as zero.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        match self {
            Self::Listed(amount) | Self::PerPair(amount) => *amount,
            Self::Missing => Decimal::ZERO,
        }
    }

    /// The [`PriceSource`] tag to record on a line priced from this resolution.
    #[must_use]
    pub const fn source(&self) -> PriceSource {
        match self {
            Self::Listed(_) => PriceSource::Listed,
            Self::PerPair(_) => PriceSource::PerPair,
            Self::Missing => PriceSource::Defaulted,
        }
    }

    /// Whether no price field resolved.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// Read a field as a decimal, accepting JSON numbers and numeric strings.
fn decimal_field(record: &Value, field: &str) -> Option<Decimal> {
    match record.get(field)? {
        // Round-trip through the number's literal form to keep exact digits.
        Value::Number(n) => n.to_string().parse().ok(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_listed_price() {
        let record = json!({ "_id": "p1", "price": 100 });
        let resolved = PriceResolution::resolve(&record);
        assert_eq!(resolved, PriceResolution::Listed(Decimal::from(100)));
        assert_eq!(resolved.source(), PriceSource::Listed);
    }

    #[test]
    fn test_resolve_listed_price_from_string() {
        let record = json!({ "price": "19.99" });
        assert_eq!(
            PriceResolution::resolve(&record).amount(),
            "19.99".parse::<Decimal>().unwrap()
        );
    }

    #[test]
    fn test_resolve_falls_back_to_pair_price() {
        let record = json!({ "_id": "b1", "PricePerCouple": 250 });
        let resolved = PriceResolution::resolve(&record);
        assert_eq!(resolved, PriceResolution::PerPair(Decimal::from(250)));
        assert_eq!(resolved.source(), PriceSource::PerPair);
    }

    #[test]
    fn test_listed_price_wins_over_pair_price() {
        let record = json!({ "price": 10, "PricePerCouple": 250 });
        assert_eq!(
            PriceResolution::resolve(&record),
            PriceResolution::Listed(Decimal::from(10))
        );
    }

    #[test]
    fn test_non_numeric_listed_price_falls_through() {
        let record = json!({ "price": "call us", "PricePerCouple": 250 });
        assert_eq!(
            PriceResolution::resolve(&record),
            PriceResolution::PerPair(Decimal::from(250))
        );
    }

    #[test]
    fn test_missing_price_reads_as_zero() {
        let record = json!({ "_id": "p1", "name": "Koi food" });
        let resolved = PriceResolution::resolve(&record);
        assert!(resolved.is_missing());
        assert_eq!(resolved.amount(), Decimal::ZERO);
        assert_eq!(resolved.source(), PriceSource::Defaulted);
    }

    #[test]
    fn test_fractional_prices_keep_exact_digits() {
        let record = json!({ "price": 0.1 });
        assert_eq!(
            PriceResolution::resolve(&record).amount(),
            "0.1".parse::<Decimal>().unwrap()
        );
    }

    #[test]
    fn test_price_source_serde_names() {
        assert_eq!(
            serde_json::to_string(&PriceSource::PerPair).unwrap(),
            "\"per_pair\""
        );
        let parsed: PriceSource = serde_json::from_str("\"defaulted\"").unwrap();
        assert_eq!(parsed, PriceSource::Defaulted);
    }
}
