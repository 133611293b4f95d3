//! Guest cart store.
//!
//! All operations are synchronous read-modify-write over the full cart
//! snapshot: each one reads the whole persisted sequence, applies the
//! change, and writes the whole sequence back under a single key. There is
//! no delta persistence and no cross-writer coordination.

use pomelo_core::{CartLine, ProductId};
use rust_decimal::Decimal;

use crate::error::CartError;
use crate::storage::CartStorage;

/// Storage key the cart is persisted under by default.
pub const DEFAULT_CART_KEY: &str = "pomelo_cart";

/// Single source of truth for the guest shopping cart.
///
/// The cart is an ordered sequence of [`CartLine`] items, one per product,
/// in insertion order: the first `add` of a product decides its position,
/// and repeat adds merge into that line. Persistence goes through an
/// injected [`CartStorage`] backend.
///
/// Reads never fail: an absent or unparseable persisted value is an empty
/// cart. Mutations return the resulting sequence, and only a failed
/// persistence write is an error.
#[derive(Debug)]
pub struct CartStore<S> {
    storage: S,
    key: String,
}

impl<S: CartStorage> CartStore<S> {
    /// Create a store persisting under [`DEFAULT_CART_KEY`].
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_CART_KEY)
    }

    /// Create a store persisting under a custom key.
    #[must_use]
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// The storage key this store persists under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current cart contents, in insertion order.
    ///
    /// Absent, unreadable, or unparseable persisted state yields an empty
    /// cart. Corruption is logged at `warn` and otherwise suppressed; the
    /// next successful mutation overwrites it.
    #[must_use]
    pub fn read(&self) -> Vec<CartLine> {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("failed to read cart state under {}: {e}", self.key);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(lines) => lines,
            Err(e) => {
                tracing::warn!("discarding unparseable cart state under {}: {e}", self.key);
                Vec::new()
            }
        }
    }

    /// Add an item to the cart.
    ///
    /// If a line for the same product already exists, its quantity grows by
    /// `item.quantity` and its stored name, image, and price are left as
    /// first written. Otherwise the item is appended as a new line.
    ///
    /// # Errors
    ///
    /// Returns [`CartError`] if persisting the updated cart fails.
    pub fn add(&self, item: CartLine) -> Result<Vec<CartLine>, CartError> {
        let mut lines = self.read();

        match lines.iter_mut().find(|l| l.product_id == item.product_id) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(item.quantity);
            }
            None => lines.push(item),
        }

        self.persist(&lines)?;
        Ok(lines)
    }

    /// Set a line's quantity to exactly `quantity`.
    ///
    /// A quantity of zero or less removes the line. Unlike [`add`], this is
    /// an absolute set, not a merge: the cart page edits quantities in
    /// place, while the catalog's add button accumulates. If no line
    /// matches `product_id` the cart is returned unchanged and nothing is
    /// written.
    ///
    /// [`add`]: CartStore::add
    ///
    /// # Errors
    ///
    /// Returns [`CartError`] if persisting the updated cart fails.
    pub fn update_quantity(
        &self,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<Vec<CartLine>, CartError> {
        let mut lines = self.read();

        if let Some(index) = lines.iter().position(|l| l.product_id == product_id) {
            if quantity <= 0 {
                lines.remove(index);
            } else if let Some(line) = lines.get_mut(index) {
                line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
            }
            self.persist(&lines)?;
        }

        Ok(lines)
    }

    /// Remove the line for `product_id`, if present.
    ///
    /// Removing an absent product is a no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`CartError`] if persisting the updated cart fails.
    pub fn remove(&self, product_id: ProductId) -> Result<Vec<CartLine>, CartError> {
        let mut lines = self.read();
        lines.retain(|l| l.product_id != product_id);
        self.persist(&lines)?;
        Ok(lines)
    }

    /// Empty the cart by deleting its persisted state.
    ///
    /// # Errors
    ///
    /// Returns [`CartError`] if the storage backend fails the removal.
    pub fn clear(&self) -> Result<Vec<CartLine>, CartError> {
        self.storage.remove(&self.key)?;
        Ok(Vec::new())
    }

    /// Total number of items across all lines (sum of quantities).
    #[must_use]
    pub fn count(&self) -> u64 {
        self.read().iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Cart subtotal: sum of price times quantity across all lines.
    ///
    /// A line whose stored price does not parse contributes zero, the same
    /// suppression policy applied to corrupt persisted state.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.read()
            .iter()
            .map(|l| l.line_total().unwrap_or(Decimal::ZERO))
            .sum()
    }

    fn persist(&self, lines: &[CartLine]) -> Result<(), CartError> {
        let raw = serde_json::to_string(lines)?;
        self.storage.set(&self.key, &raw)?;
        Ok(())
    }
}
