//! Cart line items and derived totals.

use aqua_peak_core::{PriceSource, Product, ProductId, ProductKind, StockStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One product line in the cart.
///
/// The unit price is resolved when the line is first created and frozen
/// afterwards; later catalog price changes never retroactively alter a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Catalog document id; the line's merge key.
    pub id: ProductId,
    /// Human-readable label.
    pub display_name: String,
    /// Unit price, frozen at add time.
    pub unit_price: Decimal,
    /// Units requested; always at least 1.
    pub quantity: u32,
    /// Sellable stock reported by the catalog. Informational only; the
    /// store never enforces it.
    #[serde(default)]
    pub stock_limit: Option<u32>,
    /// Catalog category label, display metadata only.
    #[serde(default)]
    pub category: Option<String>,
    /// Image reference, display metadata only.
    #[serde(default)]
    pub image: Option<String>,
    /// Which field supplied the unit price.
    #[serde(default)]
    pub price_source: PriceSource,
}

impl LineItem {
    /// Build a line from a parsed product.
    #[must_use]
    pub fn from_product(product: &Product, price_source: PriceSource, quantity: u32) -> Self {
        Self {
            id: product.id().clone(),
            display_name: product.display_name().to_owned(),
            unit_price: product.unit_price(),
            quantity,
            stock_limit: product.stock_limit(),
            category: product.category().map(str::to_owned),
            image: product.image().map(str::to_owned),
            price_source,
        }
    }

    /// Price contribution of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }

    /// Listing type this line was priced as, derived from the price field
    /// that resolved at add time.
    #[must_use]
    pub const fn product_kind(&self) -> ProductKind {
        match self.price_source {
            PriceSource::PerPair => ProductKind::BreedingPair,
            PriceSource::Listed | PriceSource::Defaulted => ProductKind::Retail,
        }
    }

    /// Check the requested quantity against the reported stock.
    #[must_use]
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::check(self.quantity, self.stock_limit)
    }
}

/// Derived cart totals. Recomputed on every read, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Totals {
    /// Sum over all lines of unit price times quantity. There is no tax,
    /// discount, or shipping computation; the subtotal is the final total.
    pub subtotal: Decimal,
    /// Sum of all line quantities.
    pub item_count: u32,
}

impl Totals {
    /// Compute totals for a set of lines.
    #[must_use]
    pub fn from_lines(lines: &[LineItem]) -> Self {
        let mut totals = Self::default();
        for line in lines {
            totals.subtotal += line.line_total();
            totals.item_count = totals.item_count.saturating_add(line.quantity);
        }
        totals
    }
}
