//! Registry of named network profiles
//!
//! The registry is owned by the caller and passed by reference to a
//! [`ConfigResolver`](super::ConfigResolver). It is guarded by a read-write
//! lock: registration takes the write lock, lookups take the read lock, so
//! registering and resolving from different threads is safe.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::logging::file_logger as log;
use crate::types::NetworkProfile;
use super::error::{ResolveError, ResolveResult};

#[derive(Debug, Default)]
struct RegistryState {
    /// Profiles in registration order
    profiles: Vec<NetworkProfile>,
    /// Name -> index into `profiles`
    by_name: HashMap<String, usize>,
    /// Chain id -> index into `profiles`
    by_chain_id: HashMap<u64, usize>,
}

/// Insertion-ordered set of network profiles with unique names and chain ids
///
/// Names are matched exactly, so `zkevm` and `ZKEVM` are different networks.
///
/// # Example
///
/// ```
/// use chainconf_core::resolver::NetworkRegistry;
/// use chainconf_core::types::NetworkProfile;
///
/// let registry = NetworkRegistry::new();
/// registry
///     .register_network(NetworkProfile::new("bsc", 56, "https://rpc.ankr.com/bsc").credentials_optional())
///     .unwrap();
/// assert!(registry.contains("bsc"));
/// assert!(!registry.contains("BSC"));
/// ```
#[derive(Debug, Default)]
pub struct NetworkRegistry {
    state: RwLock<RegistryState>,
}

impl NetworkRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            state: RwLock::new(RegistryState::default()),
        }
    }

    /// Create a registry from a list of profiles, stopping at the first conflict
    pub fn with_networks(profiles: impl IntoIterator<Item = NetworkProfile>) -> ResolveResult<Self> {
        let registry = Self::new();
        for profile in profiles {
            registry.register_network(profile)?;
        }
        Ok(registry)
    }

    /// Add a profile
    ///
    /// Fails with `DuplicateNetwork` if the name is taken and with
    /// `DuplicateChainId` if another network already uses the chain id.
    pub fn register_network(&self, profile: NetworkProfile) -> ResolveResult<()> {
        validate_name(&profile.name)?;

        let mut state = self.state.write();
        let key = profile.name.clone();

        if state.by_name.contains_key(&key) {
            return Err(ResolveError::DuplicateNetwork(profile.name));
        }
        if let Some(&idx) = state.by_chain_id.get(&profile.chain_id) {
            return Err(ResolveError::DuplicateChainId {
                chain_id: profile.chain_id,
                existing: state.profiles[idx].name.clone(),
                attempted: profile.name,
            });
        }

        log::debug(
            "registry",
            &format!("register_network: {} (chain id {})", profile.name, profile.chain_id),
        );

        let idx = state.profiles.len();
        state.by_name.insert(key, idx);
        state.by_chain_id.insert(profile.chain_id, idx);
        state.profiles.push(profile);
        Ok(())
    }

    /// Get a copy of a profile by name
    pub fn get(&self, name: &str) -> Option<NetworkProfile> {
        let state = self.state.read();
        state
            .by_name
            .get(name)
            .map(|&idx| state.profiles[idx].clone())
    }

    /// Get a copy of the profile registered for a chain id
    pub fn find_by_chain_id(&self, chain_id: u64) -> Option<NetworkProfile> {
        let state = self.state.read();
        state
            .by_chain_id
            .get(&chain_id)
            .map(|&idx| state.profiles[idx].clone())
    }

    /// Check if a network is registered
    pub fn contains(&self, name: &str) -> bool {
        self.state.read().by_name.contains_key(name)
    }

    /// Number of registered networks
    pub fn len(&self) -> usize {
        self.state.read().profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Names of all registered networks, in registration order
    ///
    /// The iterator works on a snapshot taken at call time, so it holds no
    /// lock and can be cloned to iterate again.
    pub fn list_networks(&self) -> NetworkNames {
        let names: Vec<String> = self
            .state
            .read()
            .profiles
            .iter()
            .map(|p| p.name.clone())
            .collect();
        NetworkNames {
            inner: names.into_iter(),
        }
    }

    /// Copies of all profiles, in registration order
    pub fn profiles(&self) -> Vec<NetworkProfile> {
        self.state.read().profiles.clone()
    }
}

pub(crate) fn validate_name(name: &str) -> ResolveResult<()> {
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        return Err(ResolveError::InvalidNetworkName(name.to_string()));
    }
    Ok(())
}

/// Iterator over registered network names
#[derive(Debug, Clone)]
pub struct NetworkNames {
    inner: std::vec::IntoIter<String>,
}

impl Iterator for NetworkNames {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for NetworkNames {}
