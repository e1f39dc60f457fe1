//! Cart manipulation commands.

use aqua_peak_cart::{Cart, CartError};
use aqua_peak_core::{ProductId, StockStatus};
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while running cart commands.
#[derive(Debug, Error)]
pub enum CartCommandError {
    /// The `--record` argument was not valid JSON.
    #[error("record is not valid JSON: {0}")]
    InvalidRecord(#[from] serde_json::Error),

    /// The cart rejected the operation.
    #[error(transparent)]
    Cart(#[from] CartError),
}

/// Parse a raw catalog record and add it to the cart.
///
/// # Errors
///
/// Returns an error if the record is not valid JSON or the cart rejects it.
pub fn add(cart: &mut Cart, record: &str, quantity: u32) -> Result<(), CartCommandError> {
    let record = serde_json::from_str(record)?;
    let line = cart.add_record(&record, quantity)?;
    info!(
        "added {} (now x{}) at {} each",
        line.display_name, line.quantity, line.unit_price
    );
    if line.stock_status() == StockStatus::Exceeded {
        warn!(
            "requested quantity {} exceeds reported stock {:?}",
            line.quantity, line.stock_limit
        );
    }
    Ok(())
}

/// Remove a line by product id. Absent ids are reported, not errors.
pub fn remove(cart: &mut Cart, id: &str) {
    match cart.remove_item(&ProductId::from(id)) {
        Some(line) => info!("removed {}", line.display_name),
        None => warn!("no cart line for product {id}"),
    }
}

/// Set a line's quantity.
///
/// # Errors
///
/// Returns an error for quantities below 1 or unknown product ids.
pub fn set_qty(cart: &mut Cart, id: &str, quantity: u32) -> Result<(), CartCommandError> {
    let id = ProductId::from(id);
    cart.set_quantity(&id, quantity)?;
    info!("set {id} to x{quantity}");
    Ok(())
}

/// Print cart lines, recent items, and totals.
#[allow(clippy::print_stdout)]
pub fn list(cart: &Cart) {
    if cart.is_empty() {
        println!("cart is empty");
        return;
    }

    for line in cart.items() {
        let stock_note = match line.stock_status() {
            StockStatus::Exceeded => "  [exceeds stock]",
            StockStatus::Within | StockStatus::Unknown => "",
        };
        println!(
            "{}  x{}  @ ${:.2}  = ${:.2}{stock_note}",
            line.display_name,
            line.quantity,
            line.unit_price,
            line.line_total(),
        );
    }

    let totals = cart.totals();
    println!("---");
    println!("{} items, subtotal ${:.2}", totals.item_count, totals.subtotal);

    if !cart.recent_items().is_empty() {
        let recent: Vec<&str> = cart
            .recent_items()
            .iter()
            .map(|line| line.display_name.as_str())
            .collect();
        println!("recently added: {}", recent.join(", "));
    }
}

/// Empty the cart and the recent-items list.
pub fn clear(cart: &mut Cart) {
    cart.clear();
    info!("cart cleared");
}
