//! Key-value persistence for the guest cart.
//!
//! [`CartStorage`] is the seam between the cart's semantics and wherever the
//! serialized cart actually lives. The store only ever uses one key, but the
//! trait is a plain string key-value interface so backends stay generic:
//! an in-memory map for tests, a file per key on desktop, or anything else
//! with get/set/remove semantics.

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::StorageError;

/// A string key-value persistence interface.
///
/// Methods take `&self`, allowing implementations to use interior
/// mutability for shared access.
pub trait CartStorage {
    /// Retrieve a value by key.
    ///
    /// Returns `Ok(None)` if the key does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Insert or replace a value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the write fails.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a value by key.
    ///
    /// Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the removal fails.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
