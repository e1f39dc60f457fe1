//! The cart store.
//!
//! Holds the ordered list of line items and the recent-items preview list,
//! persisting both after every mutation. Absorbable anomalies (unresolvable
//! prices, malformed persisted payloads, failed best-effort writes) degrade
//! to a safe default and are logged; invalid caller input (zero quantities,
//! unknown ids) is an explicit error that leaves state untouched.

use aqua_peak_core::{PriceSource, Product, ProductError, ProductId, ProductKind};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::line::{LineItem, Totals};
use crate::recent::RecentItems;
use crate::storage::{CART_KEY, RECENT_KEY, StateStore};

/// Errors returned by cart operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    /// Quantities below 1 are rejected; removal is a separate operation.
    #[error("quantity must be at least 1, got {given}")]
    InvalidQuantity {
        /// The rejected quantity.
        given: u32,
    },

    /// No line with the given product id exists.
    #[error("no cart line for product {0}")]
    UnknownLine(ProductId),

    /// The raw catalog record could not be parsed.
    #[error(transparent)]
    Product(#[from] ProductError),
}

/// The cart: an ordered list of line items plus the recent-items preview,
/// backed by an injected storage backend.
///
/// Line order is insertion order and carries no pricing meaning. There is
/// exactly one line per product id; re-adding merges quantities and keeps
/// the originally resolved unit price.
pub struct Cart {
    lines: Vec<LineItem>,
    recent: RecentItems,
    storage: Box<dyn StateStore>,
}

impl std::fmt::Debug for Cart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cart")
            .field("lines", &self.lines)
            .field("recent", &self.recent)
            .finish_non_exhaustive()
    }
}

impl Cart {
    /// Create an empty cart without consulting storage.
    #[must_use]
    pub fn new(storage: Box<dyn StateStore>) -> Self {
        Self {
            lines: Vec::new(),
            recent: RecentItems::new(),
            storage,
        }
    }

    /// Hydrate a cart from storage.
    ///
    /// Missing keys load as empty lists. A malformed top-level payload is
    /// discarded (logged) and loads as empty; individually malformed
    /// entries are skipped (logged) so one bad record never takes the rest
    /// of the cart with it.
    #[must_use]
    pub fn load(storage: Box<dyn StateStore>) -> Self {
        let lines = hydrate_lines(&*storage, CART_KEY);
        let recent = RecentItems::from_entries(hydrate_lines(&*storage, RECENT_KEY));
        Self {
            lines,
            recent,
            storage,
        }
    }

    /// Add a parsed product to the cart.
    ///
    /// If a line with the same id exists its quantity is incremented and
    /// its unit price kept; otherwise a new line is appended. Either way
    /// the item moves to the front of the recent-items list. Returns a
    /// snapshot of the affected line.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] when `quantity` is zero.
    pub fn add_item(&mut self, product: &Product, quantity: u32) -> Result<LineItem, CartError> {
        let source = match product.kind() {
            ProductKind::Retail => PriceSource::Listed,
            ProductKind::BreedingPair => PriceSource::PerPair,
        };
        self.merge_or_insert(LineItem::from_product(product, source, quantity))
    }

    /// Add a raw catalog record to the cart.
    ///
    /// The unit price is resolved through the fallback chain (`price`, then
    /// `PricePerCouple`); a record with no resolvable price is still added,
    /// priced at zero, with the defaulting recorded on the line and logged.
    /// Returns a snapshot of the affected line.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] when `quantity` is zero, or
    /// [`CartError::Product`] when the record has no id or display name.
    pub fn add_record(&mut self, record: &Value, quantity: u32) -> Result<LineItem, CartError> {
        let (product, source) = Product::parse_lenient(record)?;
        if source == PriceSource::Defaulted {
            warn!(
                "no resolvable price on catalog record {}; pricing line at zero",
                product.id()
            );
        }
        self.merge_or_insert(LineItem::from_product(&product, source, quantity))
    }

    /// Remove the line with the given id from the cart and the recent-items
    /// list. Returns the removed line, or `None` when no such line exists.
    pub fn remove_item(&mut self, id: &ProductId) -> Option<LineItem> {
        let position = self.lines.iter().position(|line| &line.id == id)?;
        let removed = self.lines.remove(position);
        self.recent.remove(id);
        self.persist();
        debug!("removed cart line {id}");
        Some(removed)
    }

    /// Set the quantity of an existing line, in both lists.
    ///
    /// Stock limits are not consulted; callers check
    /// [`StockStatus`](aqua_peak_core::StockStatus) themselves before
    /// calling if they care.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] when `quantity` is below 1,
    /// or [`CartError::UnknownLine`] when no line has the given id. State
    /// is untouched on error.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: u32) -> Result<(), CartError> {
        if quantity < 1 {
            return Err(CartError::InvalidQuantity { given: quantity });
        }
        let line = self
            .lines
            .iter_mut()
            .find(|line| &line.id == id)
            .ok_or_else(|| CartError::UnknownLine(id.clone()))?;
        line.quantity = quantity;
        self.recent.set_quantity(id, quantity);
        self.persist();
        Ok(())
    }

    /// Empty both the cart and the recent-items list.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.recent.clear();
        self.persist();
        debug!("cart cleared");
    }

    /// The cart lines, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.lines
    }

    /// The recent-items preview, most recent first.
    #[must_use]
    pub fn recent_items(&self) -> &[LineItem] {
        self.recent.as_slice()
    }

    /// Derived totals, recomputed on every call.
    #[must_use]
    pub fn totals(&self) -> Totals {
        Totals::from_lines(&self.lines)
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Merge an incoming line into an existing one by id, or append it,
    /// then update the recent-items list and persist.
    fn merge_or_insert(&mut self, incoming: LineItem) -> Result<LineItem, CartError> {
        if incoming.quantity < 1 {
            return Err(CartError::InvalidQuantity {
                given: incoming.quantity,
            });
        }

        let snapshot = if let Some(line) = self.lines.iter_mut().find(|line| line.id == incoming.id)
        {
            // Merge: bump the quantity, keep the frozen unit price.
            line.quantity = line.quantity.saturating_add(incoming.quantity);
            line.clone()
        } else {
            self.lines.push(incoming.clone());
            incoming
        };

        self.recent.record(snapshot.clone());
        self.persist();
        Ok(snapshot)
    }

    /// Serialize both lists and write them under their fixed keys.
    ///
    /// Best-effort: a failed write is logged and the in-memory state stays
    /// authoritative for the rest of the session.
    fn persist(&mut self) {
        persist_list(&mut *self.storage, CART_KEY, &self.lines);
        persist_list(&mut *self.storage, RECENT_KEY, self.recent.as_slice());
    }
}

fn persist_list(storage: &mut dyn StateStore, key: &str, lines: &[LineItem]) {
    match serde_json::to_string(lines) {
        Ok(payload) => {
            if let Err(err) = storage.write(key, &payload) {
                error!("failed to persist {key}: {err}");
            }
        }
        Err(err) => error!("failed to serialize {key}: {err}"),
    }
}

/// Read and leniently decode a stored line list.
fn hydrate_lines(storage: &dyn StateStore, key: &str) -> Vec<LineItem> {
    let payload = match storage.read(key) {
        Ok(Some(payload)) => payload,
        Ok(None) => return Vec::new(),
        Err(err) => {
            error!("failed to read stored state under {key}: {err}");
            return Vec::new();
        }
    };

    let entries: Vec<Value> = match serde_json::from_str(&payload) {
        Ok(entries) => entries,
        Err(err) => {
            warn!("stored state under {key} is malformed, starting empty: {err}");
            return Vec::new();
        }
    };

    entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value::<LineItem>(entry) {
            Ok(line) => Some(line),
            Err(err) => {
                warn!("skipping malformed stored line under {key}: {err}");
                None
            }
        })
        .collect()
}
