//! The cart store: working cart, checkout snapshot, and observers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use petal_market_core::{CurrencyCode, Money, Product, ProductId};
use rust_decimal::Decimal;
use tracing::instrument;

use crate::event::{CartEvent, ObserverId};
use crate::line::CartLine;
use crate::session::StoreHandle;

/// Observer callback invoked after each effective mutation.
type ObserverFn = Arc<dyn Fn(CartEvent) + Send + Sync>;

/// Shared handle to one session's cart state.
///
/// `CartStore` is cheaply cloneable; all clones refer to the same underlying
/// state. Each operation locks the state for its full duration, so operations
/// are atomic with respect to each other even when callers introduce an
/// asynchronous boundary. Observers run on the mutating caller's thread,
/// after the state lock is released and before the mutating call returns.
#[derive(Clone)]
pub struct CartStore {
    inner: Arc<StoreInner>,
}

pub(crate) struct StoreInner {
    currency: CurrencyCode,
    state: Mutex<CartState>,
    observers: Mutex<ObserverRegistry>,
}

/// The two line collections behind the store.
#[derive(Debug, Default)]
struct CartState {
    /// Working cart, insertion order preserved.
    cart: Vec<CartLine>,
    /// Snapshot taken when checkout was proceeded to.
    checkout: Vec<CartLine>,
}

#[derive(Default)]
struct ObserverRegistry {
    next_id: u64,
    entries: Vec<(ObserverId, ObserverFn)>,
}

impl CartStore {
    /// Create an empty store. Called by [`Session`](crate::Session).
    pub(crate) fn new(currency: CurrencyCode) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                currency,
                state: Mutex::new(CartState::default()),
                observers: Mutex::new(ObserverRegistry::default()),
            }),
        }
    }

    /// The currency totals are reported in.
    #[must_use]
    pub fn currency(&self) -> CurrencyCode {
        self.inner.currency
    }

    /// Downgrade to a weak [`StoreHandle`] that fails fast once the owning
    /// session is gone.
    #[must_use]
    pub fn downgrade(&self) -> StoreHandle {
        StoreHandle::new(Arc::downgrade(&self.inner))
    }

    pub(crate) fn upgrade(weak: &Weak<StoreInner>) -> Option<Self> {
        weak.upgrade().map(|inner| Self { inner })
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add one unit of `product` to the working cart.
    ///
    /// If a line with the same identifier already exists its quantity grows
    /// by exactly 1 and the line keeps its position; otherwise a new line
    /// with quantity 1 is appended. Accepts any product; there are no error
    /// conditions.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_item(&self, product: &Product) {
        {
            let mut state = self.lock_state();
            match state
                .cart
                .iter_mut()
                .find(|line| line.product_id() == product.id)
            {
                Some(line) => line.quantity = line.quantity.saturating_add(1),
                None => state.cart.push(CartLine::new(product.clone())),
            }
        }
        tracing::debug!("item added to cart");
        self.notify(&[CartEvent::CartUpdated]);
    }

    /// Apply a signed quantity delta to the line with the given identifier.
    ///
    /// Unknown identifiers and zero deltas are no-ops. A delta that drives
    /// the quantity to zero or below removes the line entirely; a stored
    /// line never has a non-positive quantity.
    #[instrument(skip(self))]
    pub fn update_quantity(&self, id: ProductId, delta: i64) {
        if delta == 0 {
            return;
        }
        {
            let mut state = self.lock_state();
            let Some(line) = state.cart.iter_mut().find(|line| line.product_id() == id) else {
                return;
            };
            let quantity = i64::from(line.quantity).saturating_add(delta);
            if quantity > 0 {
                line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
            } else {
                state.cart.retain(|line| line.product_id() != id);
            }
        }
        tracing::debug!("cart quantity updated");
        self.notify(&[CartEvent::CartUpdated]);
    }

    /// Remove the line with the given identifier, if present.
    ///
    /// Unconditional: confirmation prompts belong to the caller, not here.
    #[instrument(skip(self))]
    pub fn remove_item(&self, id: ProductId) {
        let changed = {
            let mut state = self.lock_state();
            let before = state.cart.len();
            state.cart.retain(|line| line.product_id() != id);
            state.cart.len() != before
        };
        if changed {
            tracing::debug!("item removed from cart");
            self.notify(&[CartEvent::CartUpdated]);
        }
    }

    /// Copy the working cart's lines into the checkout snapshot.
    ///
    /// The snapshot is independent: later cart mutations do not leak into it
    /// and vice versa. The working cart itself is untouched.
    #[instrument(skip(self))]
    pub fn proceed_to_checkout(&self) {
        let changed = {
            let mut state = self.lock_state();
            let changed = state.checkout != state.cart;
            state.checkout = state.cart.clone();
            changed
        };
        if changed {
            tracing::debug!("checkout snapshot taken");
            self.notify(&[CartEvent::CheckoutUpdated]);
        }
    }

    /// Complete the purchase: clear both the working cart and the snapshot.
    ///
    /// This is the only operation that empties the working cart. Calling it
    /// with nothing in flight is a harmless no-op with the same
    /// postcondition (both collections empty).
    #[instrument(skip(self))]
    pub fn complete_checkout(&self) {
        let (cart_changed, checkout_changed) = {
            let mut state = self.lock_state();
            let changed = (!state.cart.is_empty(), !state.checkout.is_empty());
            state.cart.clear();
            state.checkout.clear();
            changed
        };
        let mut events = Vec::new();
        if cart_changed {
            events.push(CartEvent::CartUpdated);
        }
        if checkout_changed {
            events.push(CartEvent::CheckoutUpdated);
        }
        if !events.is_empty() {
            tracing::debug!("checkout completed");
            self.notify(&events);
        }
    }

    /// Abandon the checkout: clear only the snapshot.
    ///
    /// The working cart is left untouched, so the items return to being
    /// "in cart" rather than "in checkout".
    #[instrument(skip(self))]
    pub fn cancel_checkout(&self) {
        let changed = {
            let mut state = self.lock_state();
            let changed = !state.checkout.is_empty();
            state.checkout.clear();
            changed
        };
        if changed {
            tracing::debug!("checkout cancelled");
            self.notify(&[CartEvent::CheckoutUpdated]);
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// The working cart's lines, in insertion order.
    #[must_use]
    pub fn cart(&self) -> Vec<CartLine> {
        self.lock_state().cart.clone()
    }

    /// The checkout snapshot's lines.
    #[must_use]
    pub fn checkout(&self) -> Vec<CartLine> {
        self.lock_state().checkout.clone()
    }

    /// Sum of unit price times quantity over the working cart.
    #[must_use]
    pub fn cart_total(&self) -> Money {
        let state = self.lock_state();
        Self::total(&state.cart, self.inner.currency)
    }

    /// Sum of unit price times quantity over the checkout snapshot.
    #[must_use]
    pub fn checkout_total(&self) -> Money {
        let state = self.lock_state();
        Self::total(&state.checkout, self.inner.currency)
    }

    /// Total units across all working-cart lines (the cart badge number).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lock_state()
            .cart
            .iter()
            .fold(0u32, |count, line| count.saturating_add(line.quantity))
    }

    /// Whether the working cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock_state().cart.is_empty()
    }

    fn total(lines: &[CartLine], currency: CurrencyCode) -> Money {
        let amount = lines
            .iter()
            .map(|line| line.line_total().amount)
            .sum::<Decimal>();
        Money::new(amount, currency)
    }

    // =========================================================================
    // Observers
    // =========================================================================

    /// Register an observer invoked after each effective mutation.
    ///
    /// Observers run synchronously on the mutating caller's thread, in
    /// registration order, before the mutating call returns. They must not
    /// call back into a mutation from inside the callback.
    pub fn subscribe(&self, observer: impl Fn(CartEvent) + Send + Sync + 'static) -> ObserverId {
        let mut registry = self.lock_observers();
        let id = ObserverId::new(registry.next_id);
        registry.next_id += 1;
        registry.entries.push((id, Arc::new(observer)));
        id
    }

    /// Remove a previously registered observer.
    ///
    /// Returns `false` if the observer was already removed.
    pub fn unsubscribe(&self, id: ObserverId) -> bool {
        let mut registry = self.lock_observers();
        let before = registry.entries.len();
        registry.entries.retain(|(entry_id, _)| *entry_id != id);
        registry.entries.len() != before
    }

    fn notify(&self, events: &[CartEvent]) {
        // Snapshot the registry so callbacks can subscribe/unsubscribe
        // without deadlocking.
        let observers: Vec<ObserverFn> = self
            .lock_observers()
            .entries
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();
        for event in events {
            for observer in &observers {
                observer(*event);
            }
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, CartState> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_observers(&self) -> MutexGuard<'_, ObserverRegistry> {
        self.inner
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock_state();
        f.debug_struct("CartStore")
            .field("currency", &self.inner.currency)
            .field("cart_lines", &state.cart.len())
            .field("checkout_lines", &state.checkout.len())
            .finish()
    }
}
