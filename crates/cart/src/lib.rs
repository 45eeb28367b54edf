//! Petal Market Cart - In-memory cart state container.
//!
//! This crate holds the only stateful component of the storefront demo: the
//! cart store. It maintains the working cart and the checkout snapshot and
//! provides the only legal mutation paths for both.
//!
//! # Architecture
//!
//! - [`Session`] owns one app-session's store. It is created once at session
//!   start and threaded through constructors; there is no ambient lookup.
//! - [`CartStore`] is a cheaply-cloneable handle to the shared state. Every
//!   operation is synchronous, runs to completion, and is atomic with respect
//!   to every other operation.
//! - [`StoreHandle`] is a weak handle for consumers that may outlive the
//!   session. Reading through it after the session ended fails fast with
//!   [`SessionError::SessionClosed`] instead of returning empty data.
//! - Observers registered with [`CartStore::subscribe`] are notified
//!   synchronously after each effective mutation, so presentation code can
//!   re-read its views without polling.
//!
//! Nothing here performs I/O or persists anything; state lives and dies with
//! the session.

#![cfg_attr(not(test), forbid(unsafe_code))]

mod error;
mod event;
mod line;
mod session;
mod store;

pub use error::SessionError;
pub use event::{CartEvent, ObserverId};
pub use line::CartLine;
pub use session::{Session, StoreHandle};
pub use store::CartStore;
