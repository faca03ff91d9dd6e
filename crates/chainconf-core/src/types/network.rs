//! Network profile types

use std::fmt;

use serde::{Deserialize, Serialize};

/// Reference to a secret held outside the registry
///
/// The wrapped string is the name of an environment-style key (e.g.
/// `CYGNUS_DEPLOYER`), never the secret itself. It is looked up in a
/// [`SecretStore`](crate::secrets::SecretStore) at resolution time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CredentialRef(String);

impl CredentialRef {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The key to look up
    pub fn key(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CredentialRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CredentialRef {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for CredentialRef {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// Block explorer verification endpoints for a network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationSettings {
    /// Explorer API key reference
    pub api_key_ref: CredentialRef,
    /// Explorer API endpoint
    pub api_url: String,
    /// Human-facing explorer URL
    pub browser_url: String,
}

impl VerificationSettings {
    pub fn new(
        api_key_ref: impl Into<CredentialRef>,
        api_url: impl Into<String>,
        browser_url: impl Into<String>,
    ) -> Self {
        Self {
            api_key_ref: api_key_ref.into(),
            api_url: api_url.into(),
            browser_url: browser_url.into(),
        }
    }
}

/// Static description of one target chain
///
/// `rpc_url` is a template: `${NAME}` placeholders are filled from the secret
/// source during resolution, so `"${RPC_URL_MAINNET}"` and
/// `"https://rpc.example.org/v1/${RPC_KEY}"` are both valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkProfile {
    /// Unique network name (e.g. 'mainnet', 'arbitrum', 'polygonMumbai')
    pub name: String,
    /// EIP-155 chain id
    pub chain_id: u64,
    /// RPC endpoint template
    pub rpc_url: String,
    /// Deployer account references, in order
    #[serde(default)]
    pub accounts: Vec<CredentialRef>,
    /// Explorer verification settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification: Option<VerificationSettings>,
    /// Whether a missing credential fails resolution (default: true)
    #[serde(default = "default_credentials_required")]
    pub credentials_required: bool,
    /// Request timeout for the RPC client, in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

fn default_credentials_required() -> bool {
    true
}

impl NetworkProfile {
    /// Create a strict profile with no accounts and no verification
    pub fn new(name: impl Into<String>, chain_id: u64, rpc_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            chain_id,
            rpc_url: rpc_url.into(),
            accounts: vec![],
            verification: None,
            credentials_required: true,
            timeout_ms: None,
        }
    }

    /// Add an account reference
    pub fn with_account(mut self, account: impl Into<CredentialRef>) -> Self {
        self.accounts.push(account.into());
        self
    }

    /// Replace the account references
    pub fn with_accounts(mut self, accounts: Vec<CredentialRef>) -> Self {
        self.accounts = accounts;
        self
    }

    /// Set the verification settings
    pub fn with_verification(mut self, verification: VerificationSettings) -> Self {
        self.verification = Some(verification);
        self
    }

    /// Set the RPC timeout
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Allow resolution to succeed when credentials are missing
    ///
    /// Used for public read-only endpoints.
    pub fn credentials_optional(mut self) -> Self {
        self.credentials_required = false;
        self
    }

    /// All credential references this profile needs, accounts first
    pub fn credential_refs(&self) -> impl Iterator<Item = &CredentialRef> {
        self.accounts
            .iter()
            .chain(self.verification.iter().map(|v| &v.api_key_ref))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_profile_builder() {
        let profile = NetworkProfile::new("arbitrum", 42161, "${RPC_URL_ARBITRUM}")
            .with_account("CYGNUS_DEPLOYER")
            .with_verification(VerificationSettings::new(
                "ETHERSCAN_KEY_ARBITRUM",
                "https://api.arbiscan.io/api",
                "https://arbiscan.io",
            ))
            .with_timeout_ms(60_000);

        assert_eq!(profile.name, "arbitrum");
        assert_eq!(profile.chain_id, 42161);
        assert!(profile.credentials_required);
        assert_eq!(profile.accounts, vec![CredentialRef::new("CYGNUS_DEPLOYER")]);
        assert_eq!(profile.timeout_ms, Some(60_000));

        let refs: Vec<_> = profile.credential_refs().map(|r| r.key()).collect();
        assert_eq!(refs, vec!["CYGNUS_DEPLOYER", "ETHERSCAN_KEY_ARBITRUM"]);
    }

    #[test]
    fn test_network_profile_yaml_defaults() {
        let yaml = "name: bsc\nchain_id: 56\nrpc_url: https://rpc.ankr.com/bsc\n";
        let profile: NetworkProfile = serde_yaml::from_str(yaml).unwrap();

        assert!(profile.accounts.is_empty());
        assert!(profile.verification.is_none());
        assert!(profile.credentials_required);
        assert!(profile.timeout_ms.is_none());
    }

    #[test]
    fn test_credential_ref_serializes_as_string() {
        let profile = NetworkProfile::new("mainnet", 1, "${RPC_URL_MAINNET}")
            .with_account("CYGNUS_DEPLOYER");

        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"accounts\":[\"CYGNUS_DEPLOYER\"]"));
        assert!(!json.contains("verification"));
    }
}
