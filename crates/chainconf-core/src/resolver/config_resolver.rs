//! Turns a network name plus a secret source into a `ResolvedConfig`
//!
//! Resolution order for one network:
//! 1. Look the profile up in the registry
//! 2. Materialize account and explorer API key credentials
//! 3. Expand and parse the RPC URL, parse explorer URLs
//! 4. Check the chain id range
//! 5. Validate and attach the shared compiler and optimizer settings
//!
//! The first failure aborts the call; nothing partial is returned. No network
//! I/O happens here.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::logging::{file_logger as log, NoOpLogger, SharedLogger};
use crate::secrets::SecretStore;
use crate::types::{CompilerSettings, NetworkProfile, OptimizerProfile};
use super::error::{ResolveError, ResolveResult};
use super::registry::{NetworkNames, NetworkRegistry};
use super::resolved::{ResolvedConfig, ResolvedNetwork, ResolvedVerification, SecretValue};

/// Largest chain id usable in EIP-155 signatures (EIP-2294)
pub const MAX_CHAIN_ID: u64 = 9_223_372_036_854_775_771;

const RPC_SCHEMES: &[&str] = &["http", "https", "ws", "wss"];
const EXPLORER_SCHEMES: &[&str] = &["http", "https"];

/// Resolves registered networks against a secret source
///
/// Borrows the caller's [`NetworkRegistry`]; compiler and optimizer settings
/// are shared by every network it resolves. Resolution is a pure function of
/// (registry contents, name, secrets), so repeated calls with the same inputs
/// return equal results.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use chainconf_core::presets;
/// use chainconf_core::resolver::ConfigResolver;
///
/// let registry = presets::builtin_registry().unwrap();
/// let resolver = ConfigResolver::new(&registry, presets::default_compiler(), presets::default_optimizer());
///
/// let env: HashMap<String, String> = HashMap::new();
/// let config = resolver.resolve("bsc", &env).unwrap();
/// assert_eq!(config.chain_id(), 56);
/// assert!(config.network().accounts().is_empty());
/// ```
#[derive(Clone)]
pub struct ConfigResolver<'r> {
    registry: &'r NetworkRegistry,
    compiler: CompilerSettings,
    optimizer: OptimizerProfile,
    default_network: Option<String>,
    logger: SharedLogger,
}

impl<'r> ConfigResolver<'r> {
    /// Create a resolver over `registry`
    pub fn new(registry: &'r NetworkRegistry, compiler: CompilerSettings, optimizer: OptimizerProfile) -> Self {
        Self {
            registry,
            compiler,
            optimizer,
            default_network: None,
            logger: Arc::new(NoOpLogger::new()),
        }
    }

    /// Set the network used by [`resolve_default`](Self::resolve_default)
    pub fn with_default_network(mut self, name: impl Into<String>) -> Self {
        self.default_network = Some(name.into());
        self
    }

    /// Send warnings (e.g. omitted optional credentials) to `logger`
    pub fn with_logger(mut self, logger: SharedLogger) -> Self {
        self.logger = logger;
        self
    }

    pub fn registry(&self) -> &NetworkRegistry {
        self.registry
    }

    pub fn compiler(&self) -> &CompilerSettings {
        &self.compiler
    }

    pub fn optimizer(&self) -> &OptimizerProfile {
        &self.optimizer
    }

    pub fn default_network(&self) -> Option<&str> {
        self.default_network.as_deref()
    }

    /// Register a network in the underlying registry
    pub fn register_network(&self, profile: NetworkProfile) -> ResolveResult<()> {
        self.registry.register_network(profile)
    }

    /// Names of registered networks, in registration order
    pub fn list_networks(&self) -> NetworkNames {
        self.registry.list_networks()
    }

    /// Resolve `name` using credentials from `env`
    pub fn resolve(&self, name: &str, env: &dyn SecretStore) -> ResolveResult<ResolvedConfig> {
        let profile = self
            .registry
            .get(name)
            .ok_or_else(|| ResolveError::UnknownNetwork(name.to_string()))?;

        log::debug(
            "config_resolver",
            &format!("resolve: {} via {} store", profile.name, env.name()),
        );

        let result = self.resolve_profile(&profile, env);
        if let Err(e) = &result {
            log::debug("config_resolver", &format!("resolve: {} failed: {}", profile.name, e));
        }
        result
    }

    /// Resolve the default network
    ///
    /// Fails with `UnknownNetwork` when no default is set.
    pub fn resolve_default(&self, env: &dyn SecretStore) -> ResolveResult<ResolvedConfig> {
        match &self.default_network {
            Some(name) => self.resolve(name, env),
            None => Err(ResolveError::UnknownNetwork("<default>".to_string())),
        }
    }

    /// Resolve every registered network, in registration order
    ///
    /// Failures are reported per network instead of aborting the sweep.
    pub fn resolve_all(&self, env: &dyn SecretStore) -> Vec<(String, ResolveResult<ResolvedConfig>)> {
        self.list_networks()
            .map(|name| {
                let result = self.resolve(&name, env);
                (name, result)
            })
            .collect()
    }

    /// Every secret key `name` reads: accounts, explorer key, URL placeholders
    pub fn required_credentials(&self, name: &str) -> ResolveResult<Vec<String>> {
        let profile = self
            .registry
            .get(name)
            .ok_or_else(|| ResolveError::UnknownNetwork(name.to_string()))?;

        let mut keys: Vec<String> = profile.credential_refs().map(|r| r.key().to_string()).collect();
        keys.extend(rpc_url_keys(&profile.name, &profile.rpc_url)?);

        let mut seen = HashSet::new();
        keys.retain(|key| seen.insert(key.clone()));
        Ok(keys)
    }

    fn resolve_profile(&self, profile: &NetworkProfile, env: &dyn SecretStore) -> ResolveResult<ResolvedConfig> {
        let network = profile.name.as_str();

        let mut accounts = Vec::with_capacity(profile.accounts.len());
        for account in &profile.accounts {
            match lookup(env, account.key()) {
                Some(value) => accounts.push(SecretValue::new(account.key(), value)),
                None if profile.credentials_required => {
                    return Err(ResolveError::missing_credential(network, account.key()));
                }
                None => self.warn(&format!("{}: account {} not set, omitting", network, account.key())),
            }
        }

        let api_key = match &profile.verification {
            Some(verification) => {
                let key = verification.api_key_ref.key();
                match lookup(env, key) {
                    Some(value) => Some(SecretValue::new(key, value)),
                    None if profile.credentials_required => {
                        return Err(ResolveError::missing_credential(network, key));
                    }
                    None => {
                        self.warn(&format!("{}: {} not set, omitting verification", network, key));
                        None
                    }
                }
            }
            None => None,
        };

        rpc_url_keys(network, &profile.rpc_url)?;
        let rpc_url = shellexpand::env_with_context(profile.rpc_url.as_str(), |key: &str| match lookup(env, key) {
            Some(value) => Ok(Some(value)),
            None => Err(ResolveError::missing_credential(network, key)),
        })
        .map_err(|e| e.cause)?;
        let rpc_url = parse_url(network, "rpc_url", &rpc_url, RPC_SCHEMES)?;

        let verification = match &profile.verification {
            Some(settings) => {
                let api_url = parse_url(network, "verification.api_url", &settings.api_url, EXPLORER_SCHEMES)?;
                let browser_url =
                    parse_url(network, "verification.browser_url", &settings.browser_url, EXPLORER_SCHEMES)?;
                api_key.map(|api_key| ResolvedVerification {
                    api_key,
                    api_url,
                    browser_url,
                })
            }
            None => None,
        };

        if profile.chain_id == 0 || profile.chain_id > MAX_CHAIN_ID {
            return Err(ResolveError::InvalidChainId {
                network: network.to_string(),
                chain_id: profile.chain_id,
            });
        }

        self.optimizer.validate()?;
        self.compiler.validate()?;

        Ok(ResolvedConfig {
            network: ResolvedNetwork {
                name: profile.name.clone(),
                chain_id: profile.chain_id,
                rpc_url,
                accounts,
                verification,
                timeout: profile.timeout_ms.map(Duration::from_millis),
            },
            optimizer: self.optimizer.clone(),
            compiler: self.compiler.clone(),
        })
    }

    fn warn(&self, message: &str) {
        log::warn("config_resolver", message);
        self.logger.warn(message);
    }
}

impl std::fmt::Debug for ConfigResolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigResolver")
            .field("networks", &self.registry.len())
            .field("compiler", &self.compiler)
            .field("optimizer", &self.optimizer)
            .field("default_network", &self.default_network)
            .finish()
    }
}

/// Non-empty, trimmed value for `key`
fn lookup(env: &dyn SecretStore, key: &str) -> Option<String> {
    env.get(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Secret keys an RPC URL template reads through `${KEY}` or `$KEY`
fn rpc_url_keys(network: &str, template: &str) -> ResolveResult<Vec<String>> {
    let mut keys = Vec::new();
    let stripped = shellexpand::env_with_context_no_errors(template, |key: &str| {
        keys.push(key.to_string());
        Some("")
    });

    if stripped.contains("${") {
        return Err(ResolveError::invalid_url(network, "rpc_url", "unterminated placeholder"));
    }
    if keys.iter().any(String::is_empty) {
        return Err(ResolveError::invalid_url(network, "rpc_url", "empty placeholder"));
    }
    Ok(keys)
}

/// Parse `raw` and check scheme and host
///
/// The URL text is left out of error messages since it may embed a key.
fn parse_url(network: &str, field: &str, raw: &str, schemes: &[&str]) -> ResolveResult<Url> {
    let url = Url::parse(raw).map_err(|e| ResolveError::invalid_url(network, field, e.to_string()))?;

    if !schemes.contains(&url.scheme()) {
        return Err(ResolveError::invalid_url(
            network,
            field,
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    if url.host().is_none() {
        return Err(ResolveError::invalid_url(network, field, "missing host"));
    }
    Ok(url)
}
