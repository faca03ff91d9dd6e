//! File-based configuration provider (YAML)
//!
//! Supports user-level (~/.config/chainconf/networks.yaml) and workspace-level
//! (.config/chainconf/networks.yaml) config.

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use crate::logging;
use crate::types::NetworkProfile;
use super::deployment::DeploymentConfig;
use super::traits::{ConfigProvider, ConfigResult};

const FILE_NAME: &str = "networks.yaml";

/// Config level (user or workspace)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigLevel {
    /// User-level config (~/.config/chainconf/networks.yaml)
    User,
    /// Workspace-level config (.config/chainconf/networks.yaml in workspace root)
    Workspace,
}

impl ConfigLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigLevel::User => "user",
            ConfigLevel::Workspace => "workspace",
        }
    }
}

/// File-based configuration provider
///
/// Reads and writes a [`DeploymentConfig`] as YAML. A missing file reads as
/// the default (empty) configuration.
///
/// # Example
///
/// ```no_run
/// use chainconf_core::config::{ConfigProvider, FileConfigProvider};
///
/// let config = FileConfigProvider::workspace("/path/to/contracts").load()?;
/// let registry = config.build_registry()?;
/// # Ok::<(), chainconf_core::config::ConfigError>(())
/// ```
pub struct FileConfigProvider {
    path: PathBuf,
    level: ConfigLevel,
    cache: RwLock<Option<DeploymentConfig>>,
}

impl FileConfigProvider {
    /// Create a new file config provider for a specific path
    pub fn new(path: impl Into<PathBuf>, level: ConfigLevel) -> Self {
        Self {
            path: path.into(),
            level,
            cache: RwLock::new(None),
        }
    }

    /// Create a user-level config provider
    pub fn user() -> Self {
        // XDG config directory on Linux, Application Support on macOS
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        Self::new(config_dir.join("chainconf").join(FILE_NAME), ConfigLevel::User)
    }

    /// Create a workspace-level config provider
    pub fn workspace(workspace_root: impl AsRef<Path>) -> Self {
        let path = workspace_root.as_ref().join(".config").join("chainconf").join(FILE_NAME);
        Self::new(path, ConfigLevel::Workspace)
    }

    /// The workspace file if it exists, otherwise the user file
    pub fn discover(workspace_root: impl AsRef<Path>) -> Self {
        let workspace = Self::workspace(workspace_root);
        if workspace.exists() {
            workspace
        } else {
            Self::user()
        }
    }

    /// Get the config file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the config level
    pub fn level(&self) -> ConfigLevel {
        self.level
    }

    /// Check if the config file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn read_file(&self) -> ConfigResult<DeploymentConfig> {
        if !self.path.exists() {
            return Ok(DeploymentConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        let config: DeploymentConfig = serde_yaml::from_str(&content)?;
        logging::debug(
            "config",
            &format!(
                "Loaded {} config from {} ({} networks)",
                self.level.as_str(),
                self.path.display(),
                config.networks.len()
            ),
        );
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self, config: &DeploymentConfig) -> ConfigResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(config)?;
        fs::write(&self.path, content)?;

        *self.cache.write() = Some(config.clone());
        Ok(())
    }

    /// Get cached or load config
    fn get_config(&self) -> ConfigResult<DeploymentConfig> {
        if let Some(config) = self.cache.read().as_ref() {
            return Ok(config.clone());
        }

        let config = self.read_file()?;
        *self.cache.write() = Some(config.clone());
        Ok(config)
    }

    fn edit(&self, f: impl FnOnce(&mut DeploymentConfig) -> ConfigResult<()>) -> ConfigResult<()> {
        let mut config = self.get_config()?;
        f(&mut config)?;
        self.save(&config)
    }

    /// Reload config from disk (invalidate cache)
    pub fn reload(&self) -> ConfigResult<DeploymentConfig> {
        let config = self.read_file()?;
        *self.cache.write() = Some(config.clone());
        Ok(config)
    }

    /// Set the network used when none is named
    pub fn set_default_network(&self, name: Option<String>) -> ConfigResult<()> {
        self.edit(|config| {
            config.default_network = name;
            Ok(())
        })
    }

    /// Create a backup of the current config file
    pub fn backup(&self) -> ConfigResult<Option<PathBuf>> {
        if !self.exists() {
            return Ok(None);
        }

        let backup_path = self.path.with_extension("yaml.backup");
        fs::copy(&self.path, &backup_path)?;
        Ok(Some(backup_path))
    }

    /// Export config as pretty JSON
    pub fn export_json(&self) -> ConfigResult<String> {
        let config = self.get_config()?;
        Ok(serde_json::to_string_pretty(&config)?)
    }

    /// Replace the config with one read from JSON
    pub fn import_json(&self, json: &str) -> ConfigResult<()> {
        let config: DeploymentConfig = serde_json::from_str(json)?;
        self.save(&config)
    }
}

impl std::fmt::Debug for FileConfigProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileConfigProvider")
            .field("path", &self.path)
            .field("level", &self.level)
            .field("exists", &self.exists())
            .finish()
    }
}

impl ConfigProvider for FileConfigProvider {
    fn load(&self) -> ConfigResult<DeploymentConfig> {
        self.get_config()
    }

    fn add_network(&self, profile: NetworkProfile) -> ConfigResult<()> {
        self.edit(|config| config.add_network(profile))
    }

    fn update_network(&self, name: &str, profile: NetworkProfile) -> ConfigResult<()> {
        self.edit(|config| config.update_network(name, profile))
    }

    fn remove_network(&self, name: &str) -> ConfigResult<()> {
        self.edit(|config| config.remove_network(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::presets;
    use tempfile::tempdir;

    #[test]
    fn test_file_config_provider() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);
        let provider = FileConfigProvider::new(&path, ConfigLevel::User);

        // Initially empty
        assert!(!provider.exists());
        assert!(provider.get_networks().unwrap().is_empty());

        let optimism = NetworkProfile::new("optimism", 10, "${RPC_URL_OPTIMISM}")
            .with_account("CYGNUS_DEPLOYER");
        provider.add_network(optimism).unwrap();

        // File should exist now
        assert!(provider.exists());
        assert_eq!(provider.get_networks().unwrap().len(), 1);

        // Reload and verify persistence
        provider.reload().unwrap();
        assert_eq!(provider.get_networks().unwrap().len(), 1);

        let other = FileConfigProvider::new(&path, ConfigLevel::User);
        assert_eq!(other.load().unwrap().networks[0].name, "optimism");
    }

    #[test]
    fn test_failed_edit_leaves_file_alone() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);
        let provider = FileConfigProvider::new(&path, ConfigLevel::User);
        provider.add_network(NetworkProfile::new("polygon", 137, "${RPC_URL_POLYGON}")).unwrap();
        let before = fs::read_to_string(&path).unwrap();

        let fork = NetworkProfile::new("devnet", 137, "https://rpc.vnet.example.org");
        assert!(matches!(provider.add_network(fork), Err(ConfigError::Resolve(_))));
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_invalid_name_never_reaches_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);
        let provider = FileConfigProvider::new(&path, ConfigLevel::User);

        let bad = NetworkProfile::new("has space", 1, "https://rpc.example.org");
        assert!(matches!(provider.add_network(bad), Err(ConfigError::Resolve(_))));
        assert!(!provider.exists());

        provider.add_network(NetworkProfile::new("mainnet", 1, "${RPC_URL_MAINNET}")).unwrap();
        assert!(provider.reload().unwrap().build_registry().is_ok());
    }

    #[test]
    fn test_yaml_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);
        let provider = FileConfigProvider::new(&path, ConfigLevel::User);

        provider.save(&presets::default_deployment_config()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("zkevmTestnet"));
        assert!(content.contains("RPC_URL_ARBITRUM"));
        assert!(content.contains("credentials_required: false"));
    }

    #[test]
    fn test_bad_yaml_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);
        fs::write(&path, "networks: [{ name: x, chain_id: not-a-number }]").unwrap();

        let provider = FileConfigProvider::new(&path, ConfigLevel::User);
        assert!(matches!(provider.load(), Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_json_export_import() {
        let dir = tempdir().unwrap();
        let source = FileConfigProvider::new(dir.path().join("a.yaml"), ConfigLevel::User);
        source.save(&presets::default_deployment_config()).unwrap();
        source.set_default_network(Some("arbitrum".to_string())).unwrap();

        let json = source.export_json().unwrap();
        assert!(json.contains("\"default_network\": \"arbitrum\""));

        let target = FileConfigProvider::new(dir.path().join("b.yaml"), ConfigLevel::Workspace);
        target.import_json(&json).unwrap();
        assert_eq!(target.reload().unwrap(), source.load().unwrap());

        assert!(matches!(target.import_json("{"), Err(ConfigError::Serialization(_))));
    }

    #[test]
    fn test_workspace_paths() {
        let dir = tempdir().unwrap();
        let workspace = FileConfigProvider::workspace(dir.path());
        assert_eq!(workspace.level(), ConfigLevel::Workspace);
        assert!(workspace.path().ends_with(".config/chainconf/networks.yaml"));

        // falls back to the user file until the workspace file exists
        assert_eq!(FileConfigProvider::discover(dir.path()).level(), ConfigLevel::User);
        workspace.save(&DeploymentConfig::default()).unwrap();
        assert_eq!(FileConfigProvider::discover(dir.path()).level(), ConfigLevel::Workspace);
    }

    #[test]
    fn test_backup() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);
        let provider = FileConfigProvider::new(&path, ConfigLevel::User);

        // No backup if file doesn't exist
        assert!(provider.backup().unwrap().is_none());

        fs::write(&path, "networks: []").unwrap();

        let backup_path = provider.backup().unwrap().unwrap();
        assert!(backup_path.exists());
        assert!(backup_path.to_string_lossy().contains("backup"));
    }
}
