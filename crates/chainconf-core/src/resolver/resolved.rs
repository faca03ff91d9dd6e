//! Immutable resolution results

use std::fmt;
use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::types::{CompilerSettings, OptimizerProfile};

/// A materialized secret
///
/// `Debug` and `Display` never print the value; call [`SecretValue::expose`]
/// when handing it to a signer or HTTP client.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretValue {
    key: String,
    value: String,
}

impl SecretValue {
    pub(crate) fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Name of the credential this value was read from
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The raw secret
    pub fn expose(&self) -> &str {
        &self.value
    }
}

impl fmt::Debug for SecretValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretValue")
            .field("key", &self.key)
            .field("value", &"<redacted>")
            .finish()
    }
}

impl fmt::Display for SecretValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=<redacted>", self.key)
    }
}

/// Verification settings with the API key filled in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVerification {
    pub(crate) api_key: SecretValue,
    pub(crate) api_url: Url,
    pub(crate) browser_url: Url,
}

impl ResolvedVerification {
    pub fn api_key(&self) -> &SecretValue {
        &self.api_key
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    pub fn browser_url(&self) -> &Url {
        &self.browser_url
    }
}

/// A network profile with every credential materialized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedNetwork {
    pub(crate) name: String,
    pub(crate) chain_id: u64,
    pub(crate) rpc_url: Url,
    pub(crate) accounts: Vec<SecretValue>,
    pub(crate) verification: Option<ResolvedVerification>,
    pub(crate) timeout: Option<Duration>,
}

impl ResolvedNetwork {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// RPC endpoint, placeholders already expanded
    ///
    /// May embed a provider key; treat it as sensitive.
    pub fn rpc_url(&self) -> &Url {
        &self.rpc_url
    }

    /// Deployer keys, in profile order
    ///
    /// Empty for networks without accounts, and for lenient networks whose
    /// account credentials were not supplied.
    pub fn accounts(&self) -> &[SecretValue] {
        &self.accounts
    }

    pub fn verification(&self) -> Option<&ResolvedVerification> {
        self.verification.as_ref()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

/// Ready-to-use configuration for exactly one network
///
/// Built by [`ConfigResolver::resolve`](super::ConfigResolver::resolve) and
/// never mutated afterwards. Owns all of its data, so it can be moved or
/// shared across threads freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub(crate) network: ResolvedNetwork,
    pub(crate) optimizer: OptimizerProfile,
    pub(crate) compiler: CompilerSettings,
}

impl ResolvedConfig {
    pub fn network(&self) -> &ResolvedNetwork {
        &self.network
    }

    pub fn optimizer(&self) -> &OptimizerProfile {
        &self.optimizer
    }

    pub fn compiler(&self) -> &CompilerSettings {
        &self.compiler
    }

    pub fn compiler_version(&self) -> &str {
        &self.compiler.version
    }

    /// Shorthand for `network().chain_id()`
    pub fn chain_id(&self) -> u64 {
        self.network.chain_id
    }

    /// solc standard-JSON `settings` object for this build
    pub fn solc_settings(&self) -> Value {
        self.compiler.solc_settings(&self.optimizer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_value_redacted() {
        let secret = SecretValue::new("CYGNUS_DEPLOYER", "0xdeadbeef");

        assert_eq!(secret.expose(), "0xdeadbeef");
        assert_eq!(secret.key(), "CYGNUS_DEPLOYER");
        assert!(!format!("{:?}", secret).contains("deadbeef"));
        assert_eq!(secret.to_string(), "CYGNUS_DEPLOYER=<redacted>");
    }

    #[test]
    fn test_resolved_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ResolvedConfig>();
    }
}
