//! Core traits and types for secret lookup

use thiserror::Error;

/// Where a secret was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretInfo {
    /// Whether the secret exists
    pub available: bool,
    /// Which store provided the secret (useful for chain stores)
    pub source: String,
}

impl SecretInfo {
    pub fn new(available: bool, source: impl Into<String>) -> Self {
        Self {
            available,
            source: source.into(),
        }
    }

    pub fn not_found() -> Self {
        Self {
            available: false,
            source: "none".to_string(),
        }
    }
}

/// Errors that can occur during secret store operations
#[derive(Error, Debug)]
pub enum SecretStoreError {
    #[error("Store is read-only")]
    ReadOnly,

    #[error("Secret not found: {0}")]
    NotFound(String),

    #[error("Store not available: {0}")]
    NotAvailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store error: {0}")]
    Other(String),
}

pub type SecretStoreResult<T> = Result<T, SecretStoreError>;

/// Key/value source the resolver reads credentials from
///
/// Keys are environment-style names such as `CYGNUS_DEPLOYER` or
/// `RPC_URL_ARBITRUM`. An empty value counts as absent.
///
/// Implementations:
/// - Process environment (`EnvSecretStore`)
/// - A `.env` file (`DotenvSecretStore`)
/// - In-memory for testing (`MemorySecretStore`)
/// - Chained for fallback behavior (`ChainSecretStore`)
/// - Plain `HashMap<String, String>` / `BTreeMap<String, String>`
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use chainconf_core::secrets::SecretStore;
///
/// let mut env = HashMap::new();
/// env.insert("CYGNUS_DEPLOYER".to_string(), "0xabc".to_string());
/// assert!(env.has("CYGNUS_DEPLOYER"));
/// ```
pub trait SecretStore: Send + Sync {
    /// Human-readable name of this store
    fn name(&self) -> &str;

    /// Check if this store is available
    ///
    /// A chain store is unavailable when none of its stores are.
    fn is_available(&self) -> bool {
        true
    }

    /// Retrieve a secret by key
    fn get(&self, key: &str) -> Option<String>;

    /// Store a secret
    ///
    /// Returns `Err(SecretStoreError::ReadOnly)` if the store doesn't support writing.
    fn store(&self, key: &str, value: &str) -> SecretStoreResult<()>;

    /// Delete a secret
    ///
    /// Returns `Err(SecretStoreError::ReadOnly)` if the store doesn't support deletion.
    fn delete(&self, key: &str) -> SecretStoreResult<()>;

    /// Check if a secret exists
    fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Get information about a secret
    fn get_info(&self, key: &str) -> SecretInfo {
        if self.has(key) {
            SecretInfo::new(true, self.name())
        } else {
            SecretInfo::not_found()
        }
    }
}
