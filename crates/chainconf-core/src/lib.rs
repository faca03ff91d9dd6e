//! ChainConf Core
//!
//! Deployment configuration for smart-contract toolchains targeting several
//! EVM networks. A static table of network profiles is turned, per run, into a
//! validated and immutable [`ResolvedConfig`]: RPC endpoint, signing accounts,
//! explorer verification endpoints, plus the shared compiler and optimizer
//! settings. Secrets come from an injected [`SecretStore`], never from globals.
//!
//! ```rust,ignore
//! use chainconf_core::{presets, ConfigResolver, EnvSecretStore};
//!
//! let registry = presets::builtin_registry()?;
//! let resolver = ConfigResolver::new(&registry, presets::default_compiler(), presets::default_optimizer());
//!
//! let config = resolver.resolve("arbitrum", &EnvSecretStore::new())?;
//! println!("{} -> {}", config.network().name(), config.network().rpc_url());
//! ```

pub mod types;
pub mod secrets;
pub mod logging;
pub mod config;
pub mod resolver;
pub mod presets;

// Re-export commonly used types
pub use types::{
    CredentialRef, NetworkProfile, VerificationSettings,
    OptimizerPass, OptimizerProfile,
    BytecodeHash, CompilerSettings,
};

pub use secrets::{
    SecretStore, SecretInfo, SecretStoreError, SecretStoreResult,
    EnvSecretStore, DotenvSecretStore, MemorySecretStore, ChainSecretStore,
};

pub use logging::{Logger, NoOpLogger, ConsoleLogger};

pub use config::{
    ConfigProvider, ConfigError, ConfigResult, DeploymentConfig,
    MemoryConfigProvider, FileConfigProvider,
};

pub use resolver::{
    NetworkRegistry, ConfigResolver,
    ResolvedConfig, ResolvedNetwork, ResolvedVerification, SecretValue,
    ResolveError, ResolveResult,
};
