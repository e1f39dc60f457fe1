//! Catalog product variants.
//!
//! Products arrive from the catalog as loose JSON documents whose shape
//! depends on the listing type. Rather than probing fields at every use
//! site, records are parsed once into a closed set of variants, each with
//! an explicit price accessor:
//!
//! - [`RetailProduct`] - feed, equipment, and single fish, priced by `price`
//! - [`BreedingPairProduct`] - paired breeding stock, priced by `PricePerCouple`

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::id::ProductId;
use super::price::{PriceResolution, PriceSource};

/// Errors that can occur when parsing a catalog record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProductError {
    /// The record is not a JSON object.
    #[error("catalog record is not a JSON object")]
    NotAnObject,
    /// The record carries no id.
    #[error("catalog record has no id")]
    MissingId,
    /// The record carries no display name.
    #[error("catalog record {0} has no display name")]
    MissingName(ProductId),
    /// No recognized price field resolved (strict parsing only).
    #[error("catalog record {0} has no resolvable price")]
    MissingPrice(ProductId),
}

/// A retail catalog listing: feed, equipment, or individual fish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetailProduct {
    /// Catalog document id.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Decimal,
    /// Catalog category label.
    pub category: Option<String>,
    /// Image reference for previews.
    pub image: Option<String>,
    /// Sellable stock, informational only.
    pub stock: Option<u32>,
}

/// A breeding-pair listing, priced per pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreedingPairProduct {
    /// Catalog document id.
    pub id: ProductId,
    /// Species or strain name.
    pub species: String,
    /// Price per breeding pair.
    pub price_per_pair: Decimal,
    /// Image reference for previews.
    pub image: Option<String>,
    /// Pairs available, informational only.
    pub stock: Option<u32>,
}

/// The listing type a product was parsed as.
///
/// Serialized with the category names the order service expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProductKind {
    /// Retail listing.
    #[default]
    #[serde(rename = "product")]
    Retail,
    /// Breeding-pair listing.
    #[serde(rename = "breeding")]
    BreedingPair,
}

impl ProductKind {
    /// The category string used in order submissions.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Retail => "product",
            Self::BreedingPair => "breeding",
        }
    }
}

impl std::fmt::Display for ProductKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A parsed catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Product {
    /// Retail listing.
    Retail(RetailProduct),
    /// Breeding-pair listing.
    BreedingPair(BreedingPairProduct),
}

impl Product {
    /// Parse a catalog record, requiring a resolvable price.
    ///
    /// # Errors
    ///
    /// Returns an error if the record is not an object, has no id, has no
    /// display name, or has no price field that resolves to a number.
    pub fn parse(record: &Value) -> Result<Self, ProductError> {
        let (product, source) = Self::parse_lenient(record)?;
        if source == PriceSource::Defaulted {
            return Err(ProductError::MissingPrice(product.id().clone()));
        }
        Ok(product)
    }

    /// Parse a catalog record, pricing an unresolvable record at zero.
    ///
    /// The returned [`PriceSource`] reports which field supplied the price;
    /// [`PriceSource::Defaulted`] means the zero fallback was taken. Id and
    /// display name are still required.
    ///
    /// # Errors
    ///
    /// Returns an error if the record is not an object, has no id, or has
    /// no display name.
    pub fn parse_lenient(record: &Value) -> Result<(Self, PriceSource), ProductError> {
        if !record.is_object() {
            return Err(ProductError::NotAnObject);
        }

        let id = str_field(record, "_id")
            .or_else(|| str_field(record, "id"))
            .map(ProductId::new)
            .ok_or(ProductError::MissingId)?;

        let resolution = PriceResolution::resolve(record);
        let source = resolution.source();

        let product = match resolution {
            PriceResolution::PerPair(price_per_pair) => {
                let species = str_field(record, "species")
                    .or_else(|| str_field(record, "name"))
                    .ok_or_else(|| ProductError::MissingName(id.clone()))?;
                Self::BreedingPair(BreedingPairProduct {
                    id,
                    species: species.to_owned(),
                    price_per_pair,
                    image: str_field(record, "image").map(str::to_owned),
                    stock: u32_field(record, "stock"),
                })
            }
            PriceResolution::Listed(_) | PriceResolution::Missing => {
                let name = str_field(record, "name")
                    .or_else(|| str_field(record, "species"))
                    .ok_or_else(|| ProductError::MissingName(id.clone()))?;
                Self::Retail(RetailProduct {
                    id,
                    name: name.to_owned(),
                    price: resolution.amount(),
                    category: str_field(record, "category").map(str::to_owned),
                    image: str_field(record, "image").map(str::to_owned),
                    stock: u32_field(record, "stock"),
                })
            }
        };

        Ok((product, source))
    }

    /// Catalog document id.
    #[must_use]
    pub const fn id(&self) -> &ProductId {
        match self {
            Self::Retail(p) => &p.id,
            Self::BreedingPair(p) => &p.id,
        }
    }

    /// Human-readable label for cart and preview display.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::Retail(p) => &p.name,
            Self::BreedingPair(p) => &p.species,
        }
    }

    /// Unit price for this listing type.
    #[must_use]
    pub const fn unit_price(&self) -> Decimal {
        match self {
            Self::Retail(p) => p.price,
            Self::BreedingPair(p) => p.price_per_pair,
        }
    }

    /// The listing type.
    #[must_use]
    pub const fn kind(&self) -> ProductKind {
        match self {
            Self::Retail(_) => ProductKind::Retail,
            Self::BreedingPair(_) => ProductKind::BreedingPair,
        }
    }

    /// Sellable stock, when the catalog reports one.
    #[must_use]
    pub const fn stock_limit(&self) -> Option<u32> {
        match self {
            Self::Retail(p) => p.stock,
            Self::BreedingPair(p) => p.stock,
        }
    }

    /// Catalog category label, when present.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        match self {
            Self::Retail(p) => p.category.as_deref(),
            Self::BreedingPair(_) => None,
        }
    }

    /// Image reference, when present.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        match self {
            Self::Retail(p) => p.image.as_deref(),
            Self::BreedingPair(p) => p.image.as_deref(),
        }
    }
}

/// Read a field as a non-empty string.
fn str_field<'a>(record: &'a Value, field: &str) -> Option<&'a str> {
    record
        .get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Read a field as a non-negative integer that fits in `u32`.
fn u32_field(record: &Value, field: &str) -> Option<u32> {
    record
        .get(field)
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_retail_record() {
        let record = json!({
            "_id": "p1",
            "name": "Koi pellets 5kg",
            "price": 34.5,
            "category": "feed",
            "image": "uploads/pellets.jpg",
            "stock": 120,
        });

        let product = Product::parse(&record).unwrap();
        assert_eq!(product.kind(), ProductKind::Retail);
        assert_eq!(product.id().as_str(), "p1");
        assert_eq!(product.display_name(), "Koi pellets 5kg");
        assert_eq!(product.unit_price(), "34.5".parse().unwrap());
        assert_eq!(product.category(), Some("feed"));
        assert_eq!(product.stock_limit(), Some(120));
    }

    #[test]
    fn test_parse_breeding_pair_record() {
        let record = json!({
            "_id": "b1",
            "species": "Oscar cichlid",
            "PricePerCouple": 250,
            "stock": 4,
        });

        let product = Product::parse(&record).unwrap();
        assert_eq!(product.kind(), ProductKind::BreedingPair);
        assert_eq!(product.display_name(), "Oscar cichlid");
        assert_eq!(product.unit_price(), Decimal::from(250));
    }

    #[test]
    fn test_parse_strict_rejects_missing_price() {
        let record = json!({ "_id": "p1", "name": "Mystery item" });
        assert_eq!(
            Product::parse(&record),
            Err(ProductError::MissingPrice(ProductId::new("p1")))
        );
    }

    #[test]
    fn test_parse_lenient_defaults_missing_price_to_zero() {
        let record = json!({ "_id": "p1", "name": "Mystery item" });
        let (product, source) = Product::parse_lenient(&record).unwrap();
        assert_eq!(source, PriceSource::Defaulted);
        assert_eq!(product.unit_price(), Decimal::ZERO);
        assert_eq!(product.kind(), ProductKind::Retail);
    }

    #[test]
    fn test_parse_requires_id() {
        let record = json!({ "name": "No id", "price": 10 });
        assert_eq!(Product::parse(&record), Err(ProductError::MissingId));
    }

    #[test]
    fn test_parse_requires_display_name() {
        let record = json!({ "_id": "p1", "price": 10 });
        assert_eq!(
            Product::parse(&record),
            Err(ProductError::MissingName(ProductId::new("p1")))
        );
    }

    #[test]
    fn test_parse_rejects_non_object() {
        assert_eq!(Product::parse(&json!([1, 2])), Err(ProductError::NotAnObject));
        assert_eq!(Product::parse(&json!("p1")), Err(ProductError::NotAnObject));
    }

    #[test]
    fn test_breeding_pair_name_falls_back_to_name_field() {
        let record = json!({ "_id": "b2", "name": "Guppy trio", "PricePerCouple": 18 });
        let product = Product::parse(&record).unwrap();
        assert_eq!(product.display_name(), "Guppy trio");
    }

    #[test]
    fn test_plain_id_field_accepted() {
        let record = json!({ "id": "p9", "name": "Air stone", "price": 3 });
        assert_eq!(Product::parse(&record).unwrap().id().as_str(), "p9");
    }

    #[test]
    fn test_kind_submission_categories() {
        assert_eq!(ProductKind::Retail.as_str(), "product");
        assert_eq!(ProductKind::BreedingPair.as_str(), "breeding");
        assert_eq!(
            serde_json::to_string(&ProductKind::BreedingPair).unwrap(),
            "\"breeding\""
        );
    }
}
