//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the cart from Leptos context and mutate it only through
//! store operations.

pub mod cart_badge;
pub mod cart_line;
pub mod cart_panel;
pub mod course_card;
