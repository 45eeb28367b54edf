//! End-to-end shopping flows against the built-in catalog.
//!
//! These tests drive the cart store the way the three screens do: catalog
//! adds, cart adjustments, then the checkout confirmation handshake.

use petal_market_cart::{CartEvent, SessionError};
use petal_market_core::ProductId;
use petal_market_integration_tests::fixtures::{builtin_session, catalog_product};
use rust_decimal::Decimal;
use std::sync::{Arc, Mutex};

// =============================================================================
// Checkout Flow Tests
// =============================================================================

#[test]
fn test_full_purchase_flow_clears_and_restarts() {
    let (session, catalog) = builtin_session();
    let store = session.store();
    let serenity = catalog_product(&catalog, 1);

    // Two adds of the same product accumulate into one line
    store.add_item(&serenity);
    store.add_item(&serenity);
    let cart = store.cart();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.first().map(|line| line.quantity), Some(2));

    // Snapshot and confirm
    store.proceed_to_checkout();
    assert_eq!(store.checkout_total().amount, Decimal::new(1600, 0));
    store.complete_checkout();
    assert!(store.cart().is_empty());
    assert!(store.checkout().is_empty());

    // The next add starts a fresh cart
    let elegance = catalog_product(&catalog, 2);
    store.add_item(&elegance);
    let cart = store.cart();
    assert_eq!(cart.len(), 1);
    let line = cart.first().expect("one line");
    assert_eq!(line.product_id(), ProductId::new(2));
    assert_eq!(line.quantity, 1);
}

#[test]
fn test_add_then_remove_leaves_empty_cart() {
    let (session, catalog) = builtin_session();
    let store = session.store();

    store.add_item(&catalog_product(&catalog, 3));
    store.remove_item(ProductId::new(3));

    assert!(store.cart().is_empty());
    assert!(store.cart_total().is_zero());
}

#[test]
fn test_cart_edits_after_proceed_do_not_touch_snapshot() {
    let (session, catalog) = builtin_session();
    let store = session.store();

    store.add_item(&catalog_product(&catalog, 1));
    store.add_item(&catalog_product(&catalog, 4));
    store.proceed_to_checkout();
    let snapshot_before = store.checkout();
    let total_before = store.checkout_total();

    // Keep shopping while the confirmation screen is up
    store.add_item(&catalog_product(&catalog, 6));
    store.update_quantity(ProductId::new(1), 3);
    store.remove_item(ProductId::new(4));

    assert_eq!(store.checkout(), snapshot_before);
    assert_eq!(store.checkout_total(), total_before);
}

#[test]
fn test_cancel_checkout_keeps_cart_intact() {
    let (session, catalog) = builtin_session();
    let store = session.store();

    store.add_item(&catalog_product(&catalog, 5));
    store.add_item(&catalog_product(&catalog, 5));
    store.proceed_to_checkout();

    store.cancel_checkout();

    // Items return to being "in cart", not "in checkout"
    assert!(store.checkout().is_empty());
    let cart = store.cart();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.first().map(|line| line.quantity), Some(2));
}

#[test]
fn test_reference_totals_from_catalog_prices() {
    let (session, catalog) = builtin_session();
    let store = session.store();

    // 800 * 1 + 1500 * 2 = 3800
    store.add_item(&catalog_product(&catalog, 1));
    store.add_item(&catalog_product(&catalog, 2));
    store.add_item(&catalog_product(&catalog, 2));

    assert_eq!(store.cart_total().amount, Decimal::new(3800, 0));
}

// =============================================================================
// Observer and Session Lifecycle Tests
// =============================================================================

#[test]
fn test_screens_are_notified_across_the_flow() {
    let (session, catalog) = builtin_session();
    let store = session.store();

    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    store.subscribe(move |event| sink.lock().expect("sink lock").push(event));

    store.add_item(&catalog_product(&catalog, 7));
    store.proceed_to_checkout();
    store.complete_checkout();

    let seen = events.lock().expect("sink lock").clone();
    assert_eq!(
        seen,
        vec![
            CartEvent::CartUpdated,
            CartEvent::CheckoutUpdated,
            CartEvent::CartUpdated,
            CartEvent::CheckoutUpdated,
        ]
    );
}

#[test]
fn test_detached_view_errors_after_session_ends() {
    let (session, catalog) = builtin_session();
    let handle = session.handle();

    handle
        .store()
        .expect("session alive")
        .add_item(&catalog_product(&catalog, 8));
    drop(session);

    assert_eq!(handle.store().unwrap_err(), SessionError::SessionClosed);
}
