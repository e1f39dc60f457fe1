//! Integration tests for Aqua Peak.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p aqua-peak-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Cart store invariants through the public API
//! - `persistence` - File-backed state round-trips and degraded payloads
//! - `checkout_flow` - Order drafting and gateway handoff

#![cfg_attr(not(test), forbid(unsafe_code))]

use aqua_peak_cart::Cart;
use aqua_peak_cart::storage::FileStore;

/// A cart backed by a throwaway state directory.
///
/// The directory lives until the returned guard is dropped; reopen the
/// same path with [`reload`] to simulate a fresh session.
///
/// # Panics
///
/// Panics if the temporary directory or store cannot be created; tests
/// have no better recovery.
#[must_use]
pub fn temp_cart() -> (tempfile::TempDir, Cart) {
    let dir = tempfile::tempdir().expect("create temp state dir");
    let store = FileStore::open(dir.path()).expect("open file store");
    (dir, Cart::load(Box::new(store)))
}

/// Reopen a cart from an existing state directory.
///
/// # Panics
///
/// Panics if the store cannot be opened.
#[must_use]
pub fn reload(dir: &tempfile::TempDir) -> Cart {
    let store = FileStore::open(dir.path()).expect("open file store");
    Cart::load(Box::new(store))
}
