//! Cart store error types.
//!
//! Store operations themselves are total functions: unknown identifiers are
//! no-ops, not failures. The only failure mode is a caller reaching for the
//! store outside an active session.

use thiserror::Error;

/// Errors raised by session-scoped store access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The owning [`Session`](crate::Session) has been torn down.
    ///
    /// Raised at the point of first use so that integration bugs (reading
    /// the store before or after it exists) surface immediately rather than
    /// being masked by empty data.
    #[error("cart store accessed outside an active session")]
    SessionClosed,
}
