//! Aqua Peak Cart - cart and checkout state management.
//!
//! The cart is an in-memory list of line items backed by durable key-value
//! storage. Every mutation persists the full state of both the cart and the
//! bounded recent-items preview list; loading hydrates both, tolerating
//! missing or malformed payloads.
//!
//! # Architecture
//!
//! There is no ambient state: a [`Cart`] is constructed with an injected
//! [`storage::StateStore`] backend and owns everything it needs. Persistence
//! is best-effort fire-and-forget; storage failures are logged and never
//! surface to the caller.
//!
//! # Example
//!
//! ```rust
//! use aqua_peak_cart::{Cart, storage::MemoryStore};
//! use serde_json::json;
//!
//! let mut cart = Cart::load(Box::new(MemoryStore::default()));
//! let record = json!({ "_id": "p1", "name": "Koi pellets", "price": 34.5 });
//! cart.add_record(&record, 2).expect("well-formed record");
//! assert_eq!(cart.totals().item_count, 2);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod checkout;
pub mod line;
pub mod recent;
pub mod storage;
pub mod store;

pub use checkout::{CheckoutError, GatewayError, OrderDraft, OrderGateway, OrderLine, OrderReceipt};
pub use line::{LineItem, Totals};
pub use recent::{RECENT_ITEMS_CAP, RecentItems};
pub use store::{Cart, CartError};
