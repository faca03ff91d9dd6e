//! In-memory configuration provider

use parking_lot::RwLock;

use crate::types::NetworkProfile;
use super::deployment::DeploymentConfig;
use super::traits::{ConfigProvider, ConfigResult};

/// In-memory configuration provider for testing
#[derive(Debug, Default)]
pub struct MemoryConfigProvider {
    config: RwLock<DeploymentConfig>,
}

impl MemoryConfigProvider {
    /// Create a provider holding an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider holding `config`
    pub fn with_config(config: DeploymentConfig) -> Self {
        Self {
            config: RwLock::new(config),
        }
    }

    /// Replace the whole configuration
    pub fn set_config(&self, config: DeploymentConfig) {
        *self.config.write() = config;
    }

    /// Drop all networks, keeping compiler and optimizer settings
    pub fn clear(&self) {
        let mut guard = self.config.write();
        guard.networks.clear();
        guard.default_network = None;
    }
}

impl ConfigProvider for MemoryConfigProvider {
    fn load(&self) -> ConfigResult<DeploymentConfig> {
        Ok(self.config.read().clone())
    }

    fn add_network(&self, profile: NetworkProfile) -> ConfigResult<()> {
        self.config.write().add_network(profile)
    }

    fn update_network(&self, name: &str, profile: NetworkProfile) -> ConfigResult<()> {
        self.config.write().update_network(name, profile)
    }

    fn remove_network(&self, name: &str) -> ConfigResult<()> {
        self.config.write().remove_network(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::presets;

    #[test]
    fn test_memory_config_provider() {
        let config = MemoryConfigProvider::new();

        // Initially empty
        assert!(config.get_networks().unwrap().is_empty());

        let arbitrum = NetworkProfile::new("arbitrum", 42161, "${RPC_URL_ARBITRUM}")
            .with_account("CYGNUS_DEPLOYER");
        config.add_network(arbitrum).unwrap();
        assert_eq!(config.get_networks().unwrap().len(), 1);

        // Can't add duplicate
        let duplicate = NetworkProfile::new("arbitrum", 42170, "${RPC_URL_NOVA}");
        assert!(matches!(config.add_network(duplicate), Err(ConfigError::NetworkExists(_))));

        let updated = NetworkProfile::new("arbitrum", 42161, "https://arb1.arbitrum.io/rpc")
            .credentials_optional();
        assert!(matches!(
            config.update_network("ARBITRUM", updated.clone()),
            Err(ConfigError::NetworkNotFound(_))
        ));
        config.update_network("arbitrum", updated).unwrap();

        let networks = config.get_networks().unwrap();
        assert!(!networks[0].credentials_required);

        config.remove_network("arbitrum").unwrap();
        assert!(config.get_networks().unwrap().is_empty());

        // Can't remove non-existent
        assert!(matches!(
            config.remove_network("arbitrum"),
            Err(ConfigError::NetworkNotFound(_))
        ));
    }

    #[test]
    fn test_clear_keeps_compiler() {
        let config = MemoryConfigProvider::with_config(presets::default_deployment_config());
        config.clear();

        let loaded = config.load().unwrap();
        assert!(loaded.networks.is_empty());
        assert!(loaded.default_network.is_none());
        assert_eq!(loaded.compiler, presets::default_compiler());
    }

    #[test]
    fn test_loaded_config_builds_registry() {
        let config = MemoryConfigProvider::with_config(presets::default_deployment_config());
        let registry = config.load().unwrap().build_registry().unwrap();
        assert_eq!(registry.len(), presets::builtin_networks().len());
    }
}
