//! Secret store abstraction.
//!
//! The workflow only needs two calls from a store: read one secret value,
//! and replace the current value of a secret.
//!
//! ## Adding a New Store
//!
//! 1. Implement the `SecretStore` trait
//! 2. Add the implementation in a new file (e.g., `vault.rs`)
//! 3. Re-export from this module

use zeroize::Zeroizing;

use crate::core::types::SecretRef;
use crate::error::Result;

mod aws;
mod memory;

pub use aws::SecretsManager;
pub use memory::Memory;

/// Remote secret store.
pub trait SecretStore {
    /// Store name for logs.
    fn name(&self) -> &'static str;

    /// Read a secret value.
    ///
    /// Honours the version id and stage carried by `secret`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store is unreachable, the secret does not
    /// exist, access is denied, or the secret has no text value.
    fn fetch(&self, secret: &SecretRef) -> Result<Zeroizing<String>>;

    /// Replace the current value of a secret.
    ///
    /// Addressed by id only; always targets the current version.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write is rejected.
    fn update(&self, secret_id: &str, content: &str) -> Result<()>;
}
