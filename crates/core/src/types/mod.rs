//! Core types for Pomelo.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod line;
pub mod order;
pub mod price;

pub use id::*;
pub use line::CartLine;
pub use order::{CreateOrderRequest, OrderItemInput};
pub use price::Price;
