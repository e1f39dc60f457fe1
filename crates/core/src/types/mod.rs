//! Core types for Aqua Peak.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod product;
pub mod status;

pub use id::*;
pub use price::{PriceResolution, PriceSource};
pub use product::{BreedingPairProduct, Product, ProductError, ProductKind, RetailProduct};
pub use status::*;
