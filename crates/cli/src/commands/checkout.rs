//! Checkout drafting command.
//!
//! Prints the submission payload the order service would receive. Actual
//! submission goes through an [`aqua_peak_cart::OrderGateway`] wired up by
//! the embedding application; the CLI only drafts.

use aqua_peak_cart::{Cart, CheckoutError, OrderDraft};
use thiserror::Error;

/// Errors that can occur while drafting a checkout payload.
#[derive(Debug, Error)]
pub enum CheckoutCommandError {
    /// The cart could not be drafted (e.g. it is empty).
    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    /// The draft could not be serialized.
    #[error("failed to serialize order draft: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Print the order submission payload for the current cart.
///
/// # Errors
///
/// Returns an error if the cart is empty or the draft cannot be serialized.
#[allow(clippy::print_stdout)]
pub fn emit(cart: &Cart) -> Result<(), CheckoutCommandError> {
    let draft = OrderDraft::from_cart(cart)?;
    println!("{}", serde_json::to_string_pretty(&draft)?);
    Ok(())
}
