//! Environment variable secret store

use std::env;

use super::traits::{SecretStore, SecretStoreError, SecretStoreResult};

/// Secret store that reads from the process environment
///
/// This store is read-only. With a prefix configured, `PREFIX_KEY` is tried
/// before `KEY`, which lets CI pipelines scope deploy secrets
/// (e.g. `CHAINCONF_CYGNUS_DEPLOYER`) without renaming the references in the
/// network table.
///
/// # Example
///
/// ```
/// use chainconf_core::secrets::{SecretStore, EnvSecretStore};
///
/// let store = EnvSecretStore::with_prefix("CHAINCONF_");
/// // store.get("RPC_URL_MAINNET") checks CHAINCONF_RPC_URL_MAINNET, then RPC_URL_MAINNET
/// ```
#[derive(Debug, Default, Clone)]
pub struct EnvSecretStore {
    prefix: Option<String>,
}

impl EnvSecretStore {
    /// Create a store reading variables by their exact name
    pub fn new() -> Self {
        Self { prefix: None }
    }

    /// Create a store that tries `prefix + key` before `key`
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    fn read(name: &str) -> Option<String> {
        env::var(name).ok().filter(|v| !v.is_empty())
    }
}

impl SecretStore for EnvSecretStore {
    fn name(&self) -> &str {
        "env"
    }

    fn get(&self, key: &str) -> Option<String> {
        if let Some(prefix) = &self.prefix {
            if let Some(value) = Self::read(&format!("{}{}", prefix, key)) {
                return Some(value);
            }
        }
        Self::read(key)
    }

    fn store(&self, _key: &str, _value: &str) -> SecretStoreResult<()> {
        Err(SecretStoreError::ReadOnly)
    }

    fn delete(&self, _key: &str) -> SecretStoreResult<()> {
        Err(SecretStoreError::ReadOnly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_store_name() {
        let store = EnvSecretStore::new();
        assert_eq!(store.name(), "env");
    }

    #[test]
    fn test_env_store_read_only() {
        let store = EnvSecretStore::new();
        assert!(matches!(store.store("test", "value"), Err(SecretStoreError::ReadOnly)));
        assert!(matches!(store.delete("test"), Err(SecretStoreError::ReadOnly)));
    }

    #[test]
    fn test_env_store_get_direct() {
        env::set_var("CHAINCONF_TEST_DIRECT_31337", "test_value");

        let store = EnvSecretStore::new();
        assert_eq!(store.get("CHAINCONF_TEST_DIRECT_31337"), Some("test_value".to_string()));

        env::remove_var("CHAINCONF_TEST_DIRECT_31337");
    }

    #[test]
    fn test_env_store_prefix_wins() {
        env::set_var("TEST_PREFIXED_KEY_42161", "plain");
        env::set_var("CI_TEST_PREFIXED_KEY_42161", "scoped");

        let store = EnvSecretStore::with_prefix("CI_");
        assert_eq!(store.get("TEST_PREFIXED_KEY_42161"), Some("scoped".to_string()));
        assert_eq!(EnvSecretStore::new().get("TEST_PREFIXED_KEY_42161"), Some("plain".to_string()));

        env::remove_var("CI_TEST_PREFIXED_KEY_42161");
        assert_eq!(store.get("TEST_PREFIXED_KEY_42161"), Some("plain".to_string()));

        env::remove_var("TEST_PREFIXED_KEY_42161");
    }

    #[test]
    fn test_env_store_empty_is_absent() {
        env::set_var("TEST_EMPTY_SECRET_1101", "");

        let store = EnvSecretStore::new();
        assert_eq!(store.get("TEST_EMPTY_SECRET_1101"), None);
        assert!(!store.get_info("TEST_EMPTY_SECRET_1101").available);

        env::remove_var("TEST_EMPTY_SECRET_1101");
    }

    #[test]
    fn test_env_store_get_not_found() {
        let store = EnvSecretStore::new();
        assert_eq!(store.get("NONEXISTENT_SECRET_XYZ_1442"), None);
    }
}
