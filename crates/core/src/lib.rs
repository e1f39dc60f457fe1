//! Aqua Peak Core - Shared types library.
//!
//! This crate provides common types used across all Aqua Peak components:
//! - `cart` - Cart and checkout state management
//! - `cli` - Command-line tools for inspecting and driving a cart state
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! network clients. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype ids, product variants, price resolution, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
