//! Pomelo Cart - client-side guest cart store.
//!
//! This crate is the single source of truth for the guest (unauthenticated)
//! shopping cart. The cart lives entirely on the client: an ordered sequence
//! of [`CartLine`](pomelo_core::CartLine) items, keyed by product, persisted
//! as one JSON blob under a single storage key so it survives restarts.
//! There is no network round-trip and no server-side counterpart; checkout
//! maps the cart onto an order request for the external REST API.
//!
//! # Modules
//!
//! - [`storage`] - The [`CartStorage`] abstraction and its backends
//! - [`store`] - The [`CartStore`] operations (read/add/update/remove/clear)
//!
//! # Known limitation
//!
//! Corrupted persisted state is silently treated as an empty cart (logged at
//! `warn`, never surfaced). This is deliberate: the guest cart is a
//! non-critical, easily-recoverable cache, and a parse error should never
//! break browsing. There is no corruption alerting beyond the log line.
//! Likewise, concurrent writers sharing one key (multiple tabs, multiple
//! processes on one file) are last-write-wins with no merge.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod error;
pub mod storage;
pub mod store;

pub use error::{CartError, StorageError};
pub use storage::{CartStorage, FileStorage, MemoryStorage};
pub use store::{CartStore, DEFAULT_CART_KEY};
