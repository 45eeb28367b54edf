//! Petal Market Storefront library.
//!
//! The presentation side of the storefront demo: the static product catalog,
//! display view models for the three screens (catalog, cart, checkout), and
//! environment configuration. All of it is thin glue over the cart store in
//! `petal-market-cart`; nothing here owns state of its own.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod views;
