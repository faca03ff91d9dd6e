//! `.env` file secret store

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::traits::{SecretStore, SecretStoreError, SecretStoreResult};

/// Secret store backed by a `.env` file
///
/// The file is parsed once into memory. Unlike `dotenv::dotenv()`, nothing is
/// written into the process environment, so several projects' files can be
/// loaded side by side.
#[derive(Debug, Clone)]
pub struct DotenvSecretStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl DotenvSecretStore {
    /// Parse the file at `path`
    // from_path_iter is the only dotenv 0.15 reader that leaves the process env alone
    #[allow(deprecated)]
    pub fn load(path: impl AsRef<Path>) -> SecretStoreResult<Self> {
        let path = path.as_ref().to_path_buf();
        let iter = dotenv::from_path_iter(&path).map_err(|e| match e {
            dotenv::Error::Io(io) => SecretStoreError::Io(io),
            other => SecretStoreError::Other(format!("{}: {}", path.display(), other)),
        })?;

        let mut values = HashMap::new();
        for item in iter {
            let (key, value) = item
                .map_err(|e| SecretStoreError::Other(format!("{}: {}", path.display(), e)))?;
            values.insert(key, value);
        }

        crate::logging::debug(
            "dotenv_store",
            &format!("loaded {} keys from {}", values.len(), path.display()),
        );

        Ok(Self { path, values })
    }

    /// Parse `<dir>/.env`
    pub fn from_dir(dir: impl AsRef<Path>) -> SecretStoreResult<Self> {
        Self::load(dir.as_ref().join(".env"))
    }

    /// Path the store was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of keys in the file
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SecretStore for DotenvSecretStore {
    fn name(&self) -> &str {
        "dotenv"
    }

    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).filter(|v| !v.is_empty()).cloned()
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
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_dotenv_store_load() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(".env"),
            "# deploy secrets\nCYGNUS_DEPLOYER=0xabc\nRPC_URL_ARBITRUM=\"https://arb.example.org\"\nETHERSCAN_KEY_ZKEVM=\n",
        )
        .unwrap();

        let store = DotenvSecretStore::from_dir(dir.path()).unwrap();

        assert_eq!(store.name(), "dotenv");
        assert_eq!(store.len(), 3);
        assert_eq!(store.get("CYGNUS_DEPLOYER"), Some("0xabc".to_string()));
        assert_eq!(store.get("RPC_URL_ARBITRUM"), Some("https://arb.example.org".to_string()));
        assert_eq!(store.get("ETHERSCAN_KEY_ZKEVM"), None);
    }

    #[test]
    fn test_dotenv_store_missing_file() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            DotenvSecretStore::from_dir(dir.path()),
            Err(SecretStoreError::Io(_))
        ));
    }

    #[test]
    fn test_dotenv_store_read_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("deploy.env");
        fs::write(&path, "A=1\n").unwrap();

        let store = DotenvSecretStore::load(&path).unwrap();
        assert_eq!(store.path(), path.as_path());
        assert!(matches!(store.store("A", "2"), Err(SecretStoreError::ReadOnly)));
        assert!(matches!(store.delete("A"), Err(SecretStoreError::ReadOnly)));
    }
}
