//! Cart line items and the aggregate cart state.
//!
//! DESIGN
//! ======
//! `CartState` keeps its fields private. The only way to build one is from a
//! list of items, which recomputes `total` and `item_count`, so the derived
//! aggregates can never drift from `items`.

#[cfg(test)]
#[path = "item_test.rs"]
mod item_test;

use serde::{Deserialize, Serialize};

/// Reason a [`CartItem`] is rejected by [`CartItem::validate`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CartItemError {
    #[error("cart item id is empty")]
    EmptyId,
    #[error("cart item {id} has a non-finite price")]
    NonFinitePrice { id: String },
    #[error("cart item {id} has a negative price: {price}")]
    NegativePrice { id: String, price: f64 },
    #[error("cart item {id} has zero quantity")]
    ZeroQuantity { id: String },
}

/// One distinct purchasable selection.
///
/// `id` already encodes any customization (grade, duration) that changes
/// pricing, so two selections of the same course are two lines.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    /// Unit price captured when the item was added.
    pub price: f64,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
}

impl CartItem {
    /// Create a line with quantity 1 and no display metadata.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            quantity: 1,
            category: None,
            kind: None,
            duration: None,
            level: None,
            image: None,
            instructor: None,
        }
    }

    #[must_use]
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    #[must_use]
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    #[must_use]
    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = Some(instructor.into());
        self
    }

    /// `price × quantity` for this line.
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    /// Check the caller contract for adding this item to a cart.
    ///
    /// The store itself never rejects input; UI boundaries call this before
    /// dispatching an add.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule: empty id, non-finite or negative
    /// price, or zero quantity.
    pub fn validate(&self) -> Result<(), CartItemError> {
        if self.id.trim().is_empty() {
            return Err(CartItemError::EmptyId);
        }
        if !self.price.is_finite() {
            return Err(CartItemError::NonFinitePrice { id: self.id.clone() });
        }
        if self.price < 0.0 {
            return Err(CartItemError::NegativePrice { id: self.id.clone(), price: self.price });
        }
        if self.quantity == 0 {
            return Err(CartItemError::ZeroQuantity { id: self.id.clone() });
        }
        Ok(())
    }
}

/// Aggregate root: ordered lines plus their derived totals.
///
/// Serializes as `{ "items": [...], "total": n, "itemCount": n }`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    items: Vec<CartItem>,
    total: f64,
    item_count: u64,
}

impl CartState {
    /// The empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a state from `items`, recomputing both aggregates.
    ///
    /// Callers are responsible for `items` being unique by id with
    /// non-zero quantities; the reducer maintains that.
    #[must_use]
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let total = items.iter().map(CartItem::line_total).sum();
        let item_count = items.iter().map(|item| u64::from(item.quantity)).sum();
        Self { items, total, item_count }
    }

    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Sum of `price × quantity` across all lines.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.item_count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn line(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub(crate) fn into_items(self) -> Vec<CartItem> {
        self.items
    }
}
