//! Rocket Shoes Core - shared types library.
//!
//! This crate provides the domain types shared by the Rocket Shoes
//! components:
//! - `cart` - The cart state engine
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no storage
//! access. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product identifiers, prices, catalog records, and cart
//!   line items

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
