//! Catalog records and cart line items.

use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;
use crate::types::price::Price;

/// A catalog product as reported by the products endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub image: String,
    pub price: Price,
}

/// Available stock for a product as reported by the stock endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    pub id: ProductId,
    pub amount: u32,
}

/// One product entry in the cart.
///
/// Display attributes (`title`, `image`, `price`) are copied from the
/// catalog at insertion time and never refreshed afterwards. `amount` is
/// always at least 1; a zero-amount item is removed rather than kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ProductId,
    pub title: String,
    pub image: String,
    pub price: Price,
    pub amount: u32,
}

impl CartItem {
    /// Create a line item for `product` with the given quantity.
    #[must_use]
    pub fn new(product: Product, amount: u32) -> Self {
        debug_assert!(amount >= 1, "cart items hold at least one unit");
        Self {
            id: product.id,
            title: product.title,
            image: product.image,
            price: product.price,
            amount,
        }
    }

    /// Copy of this item with a different quantity.
    ///
    /// Cart mutations build fresh values instead of editing items in
    /// place, so readers holding an old snapshot never see a change.
    #[must_use]
    pub fn with_amount(&self, amount: u32) -> Self {
        debug_assert!(amount >= 1, "cart items hold at least one unit");
        Self {
            amount,
            ..self.clone()
        }
    }
}
