//! Pomelo Core - Shared types library.
//!
//! This crate provides common types used across all Pomelo components:
//! - `cart` - Client-side guest cart store
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices, the cart
//!   line item, and the order-creation payload types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
