//! Petal Market Storefront - in-memory shopping session demo.
//!
//! Walks the storefront's happy path against a fresh session: browse the
//! catalog, fill the cart, adjust quantities, take a checkout snapshot and
//! complete the purchase. Everything is held in memory for the lifetime of
//! the process; there is no persistence and no network.
//!
//! # Architecture
//!
//! - `petal-market-cart` owns the session state (working cart + checkout
//!   snapshot) and notifies observers after each mutation
//! - `petal-market-storefront` supplies the static catalog and the display
//!   view models used below
//!
//! Output goes through `tracing`; set `RUST_LOG` to adjust verbosity.

#![cfg_attr(not(test), forbid(unsafe_code))]

use petal_market_cart::Session;
use petal_market_core::ProductId;
use petal_market_storefront::catalog::Catalog;
use petal_market_storefront::config::StorefrontConfig;
use petal_market_storefront::views::{CartView, CheckoutView, catalog_items};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Load configuration from environment
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "petal_market_storefront=info,petal_market_cart=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load the catalog (embedded unless a path is configured)
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path).expect("Failed to load catalog"),
        None => Catalog::builtin(),
    };
    tracing::info!(products = catalog.len(), "catalog ready");

    // One session per process run; views would hold session.handle() in a
    // real UI and rebuild themselves on observer callbacks.
    let session = Session::new(config.currency);
    let store = session.store();
    let _observer = store.subscribe(|event| tracing::debug!(?event, "store changed"));

    run_walkthrough(&session, &catalog);
}

/// Drive the catalog -> cart -> checkout flow once.
fn run_walkthrough(session: &Session, catalog: &Catalog) {
    let store = session.store();

    // Browse the catalog
    for item in catalog_items(catalog.products()) {
        tracing::info!(id = %item.id, price = %item.price, "{}", item.name);
    }

    // Add a few items; the repeat add accumulates into one line
    for id in [1, 2, 1, 5] {
        if let Some(product) = catalog.get(ProductId::new(id)) {
            store.add_item(product);
        }
    }

    // Grow one line, shrink another to zero (which removes it)
    store.update_quantity(ProductId::new(2), 1);
    store.update_quantity(ProductId::new(5), -1);

    let cart = CartView::from_store(store);
    for item in &cart.items {
        tracing::info!(
            quantity = item.quantity,
            line_total = %item.line_total,
            "in cart: {}",
            item.name
        );
    }
    tracing::info!(subtotal = %cart.subtotal, items = cart.item_count, "cart ready");

    // Take the checkout snapshot and confirm the order
    store.proceed_to_checkout();
    let checkout = CheckoutView::from_store(store);
    tracing::info!(total = %checkout.total, "order confirmation");
    store.complete_checkout();

    // Both collections are empty; the next add starts a fresh cart
    let cleared = CartView::from_store(store);
    tracing::info!(items = cleared.item_count, "purchase complete, cart cleared");

    if let Some(product) = catalog.get(ProductId::new(3)) {
        store.add_item(product);
    }
    let fresh = CartView::from_store(store);
    tracing::info!(subtotal = %fresh.subtotal, "fresh cart after checkout");
}
