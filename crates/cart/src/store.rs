//! The cart store: in-memory cart state with write-through persistence.
//!
//! Every mutation is a read-validate-persist-swap transaction. The next
//! cart is built as a fresh value (existing items are never edited in
//! place), written to storage, and only then swapped into the visible
//! snapshot. A failed persist leaves the snapshot untouched.
//!
//! Methods take `&mut self`, so the borrow checker enforces the one
//! operation at a time discipline the storefront UI provides naturally.

use std::collections::HashSet;

use tracing::{instrument, warn};

use rocket_shoes_core::{CartItem, ProductId};

use crate::error::CartError;
use crate::services::StockService;
use crate::storage::{CART_KEY, KeyValueStorage, StorageError};

/// The cart state manager.
///
/// Holds the ordered, id-unique list of cart items, validates additions and
/// quantity changes against live stock, and write-through persists every
/// successful mutation.
pub struct CartStore<S, P> {
    stock: S,
    storage: P,
    cart: Vec<CartItem>,
}

impl<S: StockService, P: KeyValueStorage> CartStore<S, P> {
    /// Create a store, restoring any previously persisted cart.
    ///
    /// Missing state yields an empty cart. State that is present but
    /// unreadable also yields an empty cart, with a warning; stale cosmetic
    /// state is not worth refusing to start over.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Storage`] if the medium itself cannot be read.
    pub fn new(stock: S, storage: P) -> Result<Self, CartError> {
        let cart = restore(&storage)?;
        debug_assert!(has_unique_ids(&cart), "restored cart held duplicate ids");
        Ok(Self {
            stock,
            storage,
            cart,
        })
    }

    /// The current cart contents, in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> &[CartItem] {
        &self.cart
    }

    /// Add one unit of `id` to the cart.
    ///
    /// An item already in the cart is incremented by one; an unknown item
    /// is inserted with amount 1, copying its display attributes from the
    /// catalog. Either path requires live stock to cover the new amount.
    ///
    /// # Errors
    ///
    /// [`CartError::StockExhausted`] if stock cannot cover one more unit,
    /// [`CartError::Stock`] if a catalog lookup fails, and
    /// [`CartError::Storage`] if persisting fails. The cart is unchanged in
    /// every error case.
    #[instrument(skip(self))]
    pub async fn add_one(&mut self, id: ProductId) -> Result<(), CartError> {
        let available = self.stock.stock(id).await?.amount;

        let next = if let Some(existing) = self.cart.iter().find(|item| item.id == id) {
            if available.saturating_sub(existing.amount) < 1 {
                return Err(CartError::StockExhausted);
            }
            self.cart
                .iter()
                .map(|item| {
                    if item.id == id {
                        item.with_amount(item.amount + 1)
                    } else {
                        item.clone()
                    }
                })
                .collect()
        } else {
            if available < 1 {
                return Err(CartError::StockExhausted);
            }
            let product = self.stock.product(id).await?;
            let mut next = self.cart.clone();
            next.push(CartItem::new(product, 1));
            next
        };

        self.commit(next)
    }

    /// Remove the item with `id` from the cart.
    ///
    /// # Errors
    ///
    /// [`CartError::NotFound`] if no item has that id (the cart is
    /// unchanged), [`CartError::Storage`] if persisting fails.
    #[instrument(skip(self))]
    pub fn remove_one(&mut self, id: ProductId) -> Result<(), CartError> {
        if !self.cart.iter().any(|item| item.id == id) {
            return Err(CartError::NotFound(id));
        }

        // Removal is by id, not positional index, so a duplicate id in a
        // corrupt persisted cart can never leave a phantom entry behind.
        let next: Vec<CartItem> = self
            .cart
            .iter()
            .filter(|item| item.id != id)
            .cloned()
            .collect();

        self.commit(next)
    }

    /// Set the quantity of the item with `id` to `amount`.
    ///
    /// A non-positive `amount` is a defined no-op: it neither removes the
    /// item nor errors. A positive `amount` requires live stock to cover it
    /// in full. An id not present in the cart leaves the cart as it was.
    ///
    /// # Errors
    ///
    /// [`CartError::StockExhausted`] if stock cannot cover `amount`,
    /// [`CartError::Stock`] on lookup failure, [`CartError::Storage`] on
    /// persist failure. The cart is unchanged in every error case.
    #[instrument(skip(self))]
    pub async fn set_amount(&mut self, id: ProductId, amount: i64) -> Result<(), CartError> {
        if amount <= 0 {
            return Ok(());
        }

        let available = self.stock.stock(id).await?.amount;

        // A positive target beyond u32 can never be covered by a u32 stock
        // count, so it fails the stock comparison rather than the guard.
        let Ok(amount) = u32::try_from(amount) else {
            return Err(CartError::StockExhausted);
        };
        if available < amount {
            return Err(CartError::StockExhausted);
        }

        let next = self
            .cart
            .iter()
            .map(|item| {
                if item.id == id {
                    item.with_amount(amount)
                } else {
                    item.clone()
                }
            })
            .collect();

        self.commit(next)
    }

    /// Persist `next`, then make it the visible snapshot.
    fn commit(&mut self, next: Vec<CartItem>) -> Result<(), CartError> {
        let encoded = serde_json::to_string(&next).map_err(StorageError::from)?;
        self.storage.write(CART_KEY, &encoded)?;
        self.cart = next;
        Ok(())
    }
}

/// Load the persisted cart, falling back to empty when absent or unreadable.
fn restore<P: KeyValueStorage>(storage: &P) -> Result<Vec<CartItem>, CartError> {
    let Some(raw) = storage.read(CART_KEY)? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str(&raw) {
        Ok(cart) => Ok(cart),
        Err(e) => {
            warn!(error = %e, "persisted cart is unreadable, starting empty");
            Ok(Vec::new())
        }
    }
}

fn has_unique_ids(cart: &[CartItem]) -> bool {
    let mut seen = HashSet::new();
    cart.iter().all(|item| seen.insert(item.id))
}
