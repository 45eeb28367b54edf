//! Session lifecycle for the cart store.
//!
//! The store is process-wide state scoped to a single UI session. A
//! [`Session`] is constructed once at session start and handed to every
//! consumer through constructors - never looked up ambiently. Consumers that
//! may outlive the session (detached views, queued callbacks) hold a
//! [`StoreHandle`] instead and get a hard error on first use after teardown.

use std::sync::Weak;

use petal_market_core::CurrencyCode;

use crate::error::SessionError;
use crate::store::{CartStore, StoreInner};

/// Owner of one app-session's cart store.
///
/// Dropping the session (together with any outstanding [`CartStore`] clones)
/// tears the store down; weak handles fail from then on. There is nothing to
/// flush - state is memory-resident only.
#[derive(Debug)]
pub struct Session {
    store: CartStore,
}

impl Session {
    /// Start a session with an empty cart.
    #[must_use]
    pub fn new(currency: CurrencyCode) -> Self {
        tracing::info!(currency = %currency, "cart session started");
        Self {
            store: CartStore::new(currency),
        }
    }

    /// The session's store.
    #[must_use]
    pub const fn store(&self) -> &CartStore {
        &self.store
    }

    /// A weak handle for consumers that may outlive the session.
    #[must_use]
    pub fn handle(&self) -> StoreHandle {
        self.store.downgrade()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(CurrencyCode::default())
    }
}

/// Weak reference to a session's store.
///
/// Upgradeable while the session is alive; afterwards every access returns
/// [`SessionError::SessionClosed`] so that out-of-scope reads surface as
/// errors instead of silently empty data.
#[derive(Debug, Clone)]
pub struct StoreHandle {
    inner: Weak<StoreInner>,
}

impl StoreHandle {
    pub(crate) const fn new(inner: Weak<StoreInner>) -> Self {
        Self { inner }
    }

    /// Access the store.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::SessionClosed`] if the owning session has
    /// been torn down.
    pub fn store(&self) -> Result<CartStore, SessionError> {
        CartStore::upgrade(&self.inner).ok_or(SessionError::SessionClosed)
    }
}
