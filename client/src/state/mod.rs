//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `cart` holds the injected cart store; `catalog` holds the offerings that
//! become cart lines. Components depend on whichever they render.

pub mod cart;
pub mod catalog;
