//! Checkout: mapping cart lines into order submissions.
//!
//! The order service itself is external; this module owns the submission
//! payload shape and the seam ([`OrderGateway`]) through which a draft is
//! handed off. The cart is cleared only after the gateway accepts.

use aqua_peak_core::{OrderId, OrderStatus, ProductId, ProductKind};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::line::LineItem;
use crate::store::Cart;

/// One cart line as the order service expects it.
///
/// Field names are fixed by the order-submission API, hence the camelCase
/// rename. The category derives from the line's shape: lines priced per
/// pair submit as `breeding`, everything else as `product`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    /// Catalog id of the purchased product.
    pub product_ref: ProductId,
    /// Listing category the order service files the line under.
    pub product_category: ProductKind,
    /// Units purchased.
    pub quantity: u32,
    /// Unit price as frozen in the cart.
    pub price: Decimal,
}

impl From<&LineItem> for OrderLine {
    fn from(line: &LineItem) -> Self {
        Self {
            product_ref: line.id.clone(),
            product_category: line.product_kind(),
            quantity: line.quantity,
            price: line.unit_price,
        }
    }
}

/// A complete order submission built from the cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    /// Client-minted draft id.
    pub id: OrderId,
    /// The submission lines.
    pub lines: Vec<OrderLine>,
    /// Cart subtotal; the final total in this system.
    pub subtotal: Decimal,
    /// When the draft was assembled.
    pub created_at: DateTime<Utc>,
}

impl OrderDraft {
    /// Build a draft from the current cart contents.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] when there is nothing to order.
    pub fn from_cart(cart: &Cart) -> Result<Self, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        Ok(Self {
            id: OrderId::new(Uuid::new_v4().to_string()),
            lines: cart.items().iter().map(OrderLine::from).collect(),
            subtotal: cart.totals().subtotal,
            created_at: Utc::now(),
        })
    }
}

/// What the order service reported back for an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
    /// Reference the order service assigned.
    pub order_ref: String,
    /// Lifecycle status the order entered.
    pub status: OrderStatus,
}

/// Errors reported by an order gateway.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The order service refused the submission.
    #[error("order rejected: {0}")]
    Rejected(String),

    /// The order service could not be reached.
    #[error("order service unavailable: {0}")]
    Unavailable(String),
}

/// The seam to the external order-submission endpoint.
pub trait OrderGateway {
    /// Submit a draft and return the service's receipt.
    ///
    /// # Errors
    ///
    /// Returns an error when the service rejects the draft or cannot be
    /// reached.
    fn submit(&mut self, draft: &OrderDraft) -> Result<OrderReceipt, GatewayError>;
}

/// Errors that can occur during checkout.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// Checkout over an empty cart.
    #[error("cart is empty")]
    EmptyCart,

    /// The gateway failed; the cart is left intact.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Draft, submit, and clear.
///
/// On success both the cart and its recent-items list are cleared. On any
/// failure the cart is left exactly as it was so the shopper can retry.
///
/// # Errors
///
/// Returns [`CheckoutError::EmptyCart`] for an empty cart, or the gateway's
/// error when submission fails.
pub fn submit(cart: &mut Cart, gateway: &mut dyn OrderGateway) -> Result<OrderReceipt, CheckoutError> {
    let draft = OrderDraft::from_cart(cart)?;
    let receipt = gateway.submit(&draft)?;
    debug!(
        "order draft {} accepted as {} ({})",
        draft.id, receipt.order_ref, receipt.status
    );
    cart.clear();
    Ok(receipt)
}
