//! Petal Market Core - Shared types library.
//!
//! This crate provides common types used across all Petal Market components:
//! - `cart` - In-memory cart state container
//! - `storefront` - Catalog loading and presentation view models
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no shared state, no
//! environment access. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money, and catalog products

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
