//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `cart_storage` is the browser side of the cart persistence port; `money`
//! formats prices for display. Neither depends on components or pages.

pub mod cart_storage;
pub mod money;
