//! Configuration provider trait

use crate::resolver::ResolveError;
use crate::types::NetworkProfile;
use super::deployment::DeploymentConfig;

/// Source of the static deployment configuration
///
/// Implementations:
/// - `MemoryConfigProvider`: In-memory for testing
/// - `FileConfigProvider`: YAML file (~/.config/chainconf/networks.yaml)
pub trait ConfigProvider: Send + Sync {
    /// Load the full configuration
    fn load(&self) -> ConfigResult<DeploymentConfig>;

    /// Get all configured networks
    fn get_networks(&self) -> ConfigResult<Vec<NetworkProfile>> {
        Ok(self.load()?.networks)
    }

    /// Add a new network
    fn add_network(&self, profile: NetworkProfile) -> ConfigResult<()>;

    /// Replace the network called `name`
    fn update_network(&self, name: &str, profile: NetworkProfile) -> ConfigResult<()>;

    /// Remove a network
    fn remove_network(&self, name: &str) -> ConfigResult<()>;
}

/// Errors that can occur during configuration operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Network not found: {0}")]
    NetworkNotFound(String),

    #[error("Network already exists: {0}")]
    NetworkExists(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("Configuration error: {0}")]
    Other(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
