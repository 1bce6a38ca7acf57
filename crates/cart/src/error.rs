//! Operation outcomes for the cart store.
//!
//! Every store operation returns `Result<(), CartError>`; nothing is
//! surfaced through an ambient notification channel. The UI layer maps each
//! variant to whatever presentation it wants ([`CartError::user_message`]
//! provides the stock copy).

use thiserror::Error;

use rocket_shoes_core::ProductId;

use crate::services::StockError;
use crate::storage::StorageError;

/// Why a cart operation did not apply.
#[derive(Debug, Error)]
pub enum CartError {
    /// The requested quantity exceeds available stock. No mutation applied.
    #[error("requested quantity is out of stock")]
    StockExhausted,

    /// The operation targeted a product that is not in the cart.
    #[error("product {0} is not in the cart")]
    NotFound(ProductId),

    /// The stock or product endpoint failed.
    #[error("stock service error: {0}")]
    Stock(#[from] StockError),

    /// Persisting the cart failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl CartError {
    /// Toast-equivalent copy for end users.
    ///
    /// Internal detail (HTTP status, I/O cause) is deliberately not exposed
    /// here; it stays available on the variant for logging.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::StockExhausted => "Requested quantity is out of stock",
            Self::NotFound(_) => "Product is not in the cart",
            Self::Stock(_) | Self::Storage(_) => "Something went wrong updating your cart",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_error_display() {
        assert_eq!(
            CartError::StockExhausted.to_string(),
            "requested quantity is out of stock"
        );
        assert_eq!(
            CartError::NotFound(ProductId::new(9)).to_string(),
            "product 9 is not in the cart"
        );
    }

    #[test]
    fn test_user_message_hides_internal_detail() {
        let err = CartError::Stock(StockError::Api {
            status: 503,
            message: "upstream exploded".to_string(),
        });
        assert!(!err.user_message().contains("503"));
        assert!(!err.user_message().contains("upstream"));
    }
}
