//! `SecretStore` for plain string maps
//!
//! Lets callers hand a `HashMap` or `BTreeMap` straight to the resolver.
//! Maps are read-only through this interface.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use super::traits::{SecretStore, SecretStoreError, SecretStoreResult};

impl<S> SecretStore for HashMap<String, String, S>
where
    S: BuildHasher + Send + Sync,
{
    fn name(&self) -> &str {
        "map"
    }

    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).filter(|v| !v.is_empty()).cloned()
    }

    fn store(&self, _key: &str, _value: &str) -> SecretStoreResult<()> {
        Err(SecretStoreError::ReadOnly)
    }

    fn delete(&self, _key: &str) -> SecretStoreResult<()> {
        Err(SecretStoreError::ReadOnly)
    }
}

impl SecretStore for BTreeMap<String, String> {
    fn name(&self) -> &str {
        "map"
    }

    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).filter(|v| !v.is_empty()).cloned()
    }

    fn store(&self, _key: &str, _value: &str) -> SecretStoreResult<()> {
        Err(SecretStoreError::ReadOnly)
    }

    fn delete(&self, _key: &str) -> SecretStoreResult<()> {
        Err(SecretStoreError::ReadOnly)
    }
}
