//! Bounded most-recently-added preview list.
//!
//! A small sidebar view of what the shopper touched last. Independent from
//! the main cart: entries are evicted by recency once the bound is hit, and
//! the list never contributes to price calculations.

use aqua_peak_core::ProductId;

use crate::line::LineItem;

/// Maximum number of entries kept in the preview list.
pub const RECENT_ITEMS_CAP: usize = 3;

/// Most-recent-first list of the last products added to the cart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentItems {
    entries: Vec<LineItem>,
}

impl RecentItems {
    /// Create an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Rebuild a list from hydrated entries, most recent first.
    ///
    /// Duplicate ids keep their most recent entry and the bound is
    /// re-applied, so oversized or repetitive persisted payloads load into
    /// a well-formed list.
    #[must_use]
    pub fn from_entries(entries: Vec<LineItem>) -> Self {
        let mut list = Self::new();
        for item in entries.into_iter().rev() {
            list.record(item);
        }
        list
    }

    /// Record an item as most recently added.
    ///
    /// An existing entry with the same id is replaced and moved to the
    /// front; the list is then truncated to [`RECENT_ITEMS_CAP`].
    pub fn record(&mut self, item: LineItem) {
        self.entries.retain(|entry| entry.id != item.id);
        self.entries.insert(0, item);
        self.entries.truncate(RECENT_ITEMS_CAP);
    }

    /// Remove the entry with the given id, if present.
    pub fn remove(&mut self, id: &ProductId) {
        self.entries.retain(|entry| &entry.id != id);
    }

    /// Update the quantity shown for an entry, if present.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: u32) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| &entry.id == id) {
            entry.quantity = quantity;
        }
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The entries, most recent first.
    #[must_use]
    pub fn as_slice(&self) -> &[LineItem] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
