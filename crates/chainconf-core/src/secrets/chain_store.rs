//! Chained secret store with fallback behavior

use std::sync::Arc;

use super::traits::{SecretInfo, SecretStore, SecretStoreError, SecretStoreResult};

/// A secret store that chains multiple stores together with fallback behavior
///
/// Reads try each available store in order and return the first match.
/// Writes go to the designated write store (default: first store).
/// A typical deploy setup layers explicit overrides over the process
/// environment over a project `.env` file.
///
/// # Example
///
/// ```
/// use chainconf_core::secrets::{SecretStore, ChainSecretStore, EnvSecretStore, MemorySecretStore};
/// use std::sync::Arc;
///
/// let overrides = Arc::new(MemorySecretStore::new());
/// let env = Arc::new(EnvSecretStore::new());
///
/// let chain = ChainSecretStore::new(vec![overrides.clone(), env]);
/// chain.store("CYGNUS_DEPLOYER", "0xabc").unwrap();
/// assert_eq!(overrides.get("CYGNUS_DEPLOYER"), Some("0xabc".to_string()));
/// ```
pub struct ChainSecretStore {
    stores: Vec<Arc<dyn SecretStore>>,
    write_store_index: usize,
}

impl ChainSecretStore {
    /// Create a new chain store
    ///
    /// The first store is used for writes. An empty chain finds nothing and
    /// rejects writes.
    pub fn new(stores: Vec<Arc<dyn SecretStore>>) -> Self {
        Self {
            stores,
            write_store_index: 0,
        }
    }

    /// Create a chain store with a specific write store
    ///
    /// Returns `None` if `write_store_index` is out of bounds.
    pub fn with_write_store(stores: Vec<Arc<dyn SecretStore>>, write_store_index: usize) -> Option<Self> {
        if write_store_index >= stores.len() {
            return None;
        }
        Some(Self {
            stores,
            write_store_index,
        })
    }

    /// Get the stores in this chain
    pub fn stores(&self) -> &[Arc<dyn SecretStore>] {
        &self.stores
    }

    /// Find which store has a key
    pub fn find_store(&self, key: &str) -> Option<&Arc<dyn SecretStore>> {
        self.stores
            .iter()
            .find(|store| store.is_available() && store.has(key))
    }
}

impl SecretStore for ChainSecretStore {
    fn name(&self) -> &str {
        "chain"
    }

    fn is_available(&self) -> bool {
        self.stores.iter().any(|s| s.is_available())
    }

    fn get(&self, key: &str) -> Option<String> {
        self.stores
            .iter()
            .filter(|store| store.is_available())
            .find_map(|store| store.get(key))
    }

    fn store(&self, key: &str, value: &str) -> SecretStoreResult<()> {
        match self.stores.get(self.write_store_index) {
            Some(store) => store.store(key, value),
            None => Err(SecretStoreError::NotAvailable("empty chain".to_string())),
        }
    }

    fn delete(&self, key: &str) -> SecretStoreResult<()> {
        for store in &self.stores {
            if store.has(key) {
                // read-only stores keep their copy
                let _ = store.delete(key);
            }
        }
        Ok(())
    }

    fn get_info(&self, key: &str) -> SecretInfo {
        match self.find_store(key) {
            Some(store) => SecretInfo::new(true, store.name()),
            None => SecretInfo::not_found(),
        }
    }
}

impl std::fmt::Debug for ChainSecretStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.stores.iter().map(|s| s.name()).collect();
        f.debug_struct("ChainSecretStore")
            .field("stores", &names)
            .field("write_store_index", &self.write_store_index)
            .finish()
    }
}
