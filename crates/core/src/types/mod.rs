//! Core types for Petal Market.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod money;
pub mod product;

pub use id::*;
pub use money::{CurrencyCode, CurrencyCodeError, Money};
pub use product::{ImageRef, Product};
