//! Rocket Shoes cart engine.
//!
//! An in-process shopping-cart state manager: an ordered, id-unique list of
//! [`CartItem`](rocket_shoes_core::CartItem) values, write-through persisted
//! to a key-value medium and validated against a live stock endpoint on
//! every addition or quantity change.
//!
//! The engine owns no UI and no server surface. Callers invoke the
//! [`CartStore`] operations and render the returned snapshot; failures come
//! back as [`CartError`] values for the caller to present however it likes.
//!
//! # Modules
//!
//! - [`store`] - The cart store and its mutation transactions
//! - [`services`] - The stock/product lookup trait and its HTTP client
//! - [`storage`] - The durable key-value storage trait and implementations
//! - [`config`] - Environment-driven configuration
//! - [`error`] - The operation outcome taxonomy

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod services;
pub mod storage;
pub mod store;

pub use config::CartConfig;
pub use error::CartError;
pub use services::{HttpStockService, StockService};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::CartStore;
