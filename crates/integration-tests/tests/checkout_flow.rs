//! Integration tests for order drafting and gateway handoff.

#![allow(clippy::unwrap_used)]

use aqua_peak_cart::{
    CheckoutError, GatewayError, OrderDraft, OrderGateway, OrderReceipt, checkout,
};
use aqua_peak_core::{OrderStatus, ProductKind};
use aqua_peak_integration_tests::{reload, temp_cart};
use rust_decimal::Decimal;
use serde_json::json;

struct RecordingGateway {
    accept: bool,
    drafts: Vec<OrderDraft>,
}

impl RecordingGateway {
    const fn accepting() -> Self {
        Self {
            accept: true,
            drafts: Vec::new(),
        }
    }

    const fn rejecting() -> Self {
        Self {
            accept: false,
            drafts: Vec::new(),
        }
    }
}

impl OrderGateway for RecordingGateway {
    fn submit(&mut self, draft: &OrderDraft) -> Result<OrderReceipt, GatewayError> {
        self.drafts.push(draft.clone());
        if self.accept {
            Ok(OrderReceipt {
                order_ref: "farm-0042".to_owned(),
                status: OrderStatus::Pending,
            })
        } else {
            Err(GatewayError::Unavailable("maintenance window".to_owned()))
        }
    }
}

// =============================================================================
// Draft Mapping
// =============================================================================

#[test]
fn test_draft_categories_follow_line_shape() {
    let (_dir, mut cart) = temp_cart();
    cart.add_record(&json!({ "_id": "p1", "name": "Koi pellets", "price": 100 }), 2)
        .unwrap();
    cart.add_record(
        &json!({ "_id": "b1", "species": "Oscar", "PricePerCouple": 250 }),
        1,
    )
    .unwrap();

    let draft = OrderDraft::from_cart(&cart).unwrap();
    let categories: Vec<ProductKind> = draft.lines.iter().map(|l| l.product_category).collect();
    assert_eq!(categories, vec![ProductKind::Retail, ProductKind::BreedingPair]);
    assert_eq!(draft.subtotal, Decimal::from(450));
}

#[test]
fn test_draft_submission_wire_shape() {
    let (_dir, mut cart) = temp_cart();
    cart.add_record(
        &json!({ "_id": "b1", "species": "Oscar", "PricePerCouple": 250 }),
        2,
    )
    .unwrap();

    let draft = OrderDraft::from_cart(&cart).unwrap();
    let wire = serde_json::to_value(&draft).unwrap();
    let line = wire
        .get("lines")
        .and_then(|l| l.as_array())
        .and_then(|l| l.first())
        .unwrap();

    assert_eq!(line.get("productRef").and_then(|v| v.as_str()), Some("b1"));
    assert_eq!(
        line.get("productCategory").and_then(|v| v.as_str()),
        Some("breeding")
    );
    assert_eq!(line.get("quantity").and_then(serde_json::Value::as_u64), Some(2));
    assert!(wire.get("createdAt").is_some());
}

#[test]
fn test_empty_cart_cannot_be_drafted() {
    let (_dir, cart) = temp_cart();
    assert!(matches!(
        OrderDraft::from_cart(&cart),
        Err(CheckoutError::EmptyCart)
    ));
}

// =============================================================================
// Submission Outcomes
// =============================================================================

#[test]
fn test_successful_submission_clears_persisted_state() {
    let (dir, mut cart) = temp_cart();
    cart.add_record(&json!({ "_id": "p1", "name": "Koi pellets", "price": 100 }), 1)
        .unwrap();

    let mut gateway = RecordingGateway::accepting();
    let receipt = checkout::submit(&mut cart, &mut gateway).unwrap();

    assert_eq!(receipt.order_ref, "farm-0042");
    assert!(cart.is_empty());
    assert_eq!(gateway.drafts.len(), 1);

    // The cleared state is what a fresh session sees.
    let restored = reload(&dir);
    assert!(restored.is_empty());
    assert!(restored.recent_items().is_empty());
}

#[test]
fn test_failed_submission_leaves_cart_intact() {
    let (dir, mut cart) = temp_cart();
    cart.add_record(&json!({ "_id": "p1", "name": "Koi pellets", "price": 100 }), 3)
        .unwrap();

    let mut gateway = RecordingGateway::rejecting();
    let err = checkout::submit(&mut cart, &mut gateway).unwrap_err();

    assert!(matches!(
        err,
        CheckoutError::Gateway(GatewayError::Unavailable(_))
    ));
    assert_eq!(cart.totals().item_count, 3);

    let restored = reload(&dir);
    assert_eq!(restored.totals().item_count, 3);
}
