//! External service clients consumed by the cart store.

pub mod stock;

pub use stock::{HttpStockService, StockError, StockService};
