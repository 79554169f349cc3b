//! Pure cart transitions.
//!
//! Each operation takes the current state by reference and returns the next
//! state. Nothing here touches storage; the store decides what to persist.

#[cfg(test)]
#[path = "reducer_test.rs"]
mod reducer_test;

use crate::item::{CartItem, CartState};

/// A cart mutation requested by a UI collaborator.
#[derive(Clone, Debug, PartialEq)]
pub enum CartAction {
    /// Append a line, or grow the quantity of the line with the same id.
    Add(CartItem),
    /// Drop the line with this id.
    Remove(String),
    /// Set a line's quantity. Zero or negative removes the line.
    UpdateQuantity { id: String, quantity: i64 },
    /// Reset to the empty cart.
    Clear,
}

/// Apply `action` to `state`.
#[must_use]
pub fn reduce(state: &CartState, action: &CartAction) -> CartState {
    match action {
        CartAction::Add(item) => add_item(state, item.clone()),
        CartAction::Remove(id) => remove_item(state, id),
        CartAction::UpdateQuantity { id, quantity } => update_quantity(state, id, *quantity),
        CartAction::Clear => clear(),
    }
}

/// Add `item`, merging into an existing line with the same id.
///
/// A merge keeps the existing line's snapshot fields and only grows its
/// quantity by `item.quantity`.
#[must_use]
pub fn add_item(state: &CartState, item: CartItem) -> CartState {
    let mut items = state.items().to_vec();
    match items.iter_mut().find(|line| line.id == item.id) {
        Some(line) => line.quantity = line.quantity.saturating_add(item.quantity),
        None => items.push(item),
    }
    CartState::from_items(items)
}

/// Remove the line with `id`. Unknown ids leave the state unchanged.
#[must_use]
pub fn remove_item(state: &CartState, id: &str) -> CartState {
    if state.line(id).is_none() {
        return state.clone();
    }
    let items = state.items().iter().filter(|line| line.id != id).cloned().collect();
    CartState::from_items(items)
}

/// Set the quantity of the line with `id`.
///
/// `quantity <= 0` is treated as a removal. Quantities above `u32::MAX`
/// saturate.
#[must_use]
pub fn update_quantity(state: &CartState, id: &str, quantity: i64) -> CartState {
    if quantity <= 0 {
        return remove_item(state, id);
    }
    if state.line(id).is_none() {
        return state.clone();
    }
    let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
    let items = state
        .items()
        .iter()
        .map(|line| {
            if line.id == id {
                CartItem { quantity, ..line.clone() }
            } else {
                line.clone()
            }
        })
        .collect();
    CartState::from_items(items)
}

/// The empty cart.
#[must_use]
pub fn clear() -> CartState {
    CartState::empty()
}

/// Fold `incoming` lines into `base` with add semantics.
///
/// Zero-quantity lines are skipped so the result keeps the quantity
/// invariant even for untrusted input.
#[must_use]
pub fn merge(base: CartState, incoming: Vec<CartItem>) -> CartState {
    incoming
        .into_iter()
        .filter(|item| item.quantity > 0)
        .fold(base, |state, item| add_item(&state, item))
}
