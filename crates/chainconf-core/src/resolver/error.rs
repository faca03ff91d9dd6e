//! Resolution error types

use thiserror::Error;

/// Errors raised while registering or resolving a network
///
/// These are configuration mistakes, not transient failures, so callers
/// should surface them rather than retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No network registered under this name
    #[error("Unknown network: {0}")]
    UnknownNetwork(String),

    /// A network with this name is already registered
    #[error("Network already registered: {0}")]
    DuplicateNetwork(String),

    /// The chain id is already claimed by another network
    #[error("Chain id {chain_id} of '{attempted}' is already used by '{existing}'")]
    DuplicateChainId {
        chain_id: u64,
        existing: String,
        attempted: String,
    },

    /// A referenced credential is absent from the secret source
    #[error("Missing credential {key} for network '{network}'")]
    MissingCredential { network: String, key: String },

    /// A URL field failed to expand or parse
    #[error("Invalid {field} for network '{network}': {reason}")]
    InvalidUrl {
        network: String,
        field: String,
        reason: String,
    },

    /// Chain id is zero or above the EIP-2294 bound
    #[error("Invalid chain id {chain_id} for network '{network}'")]
    InvalidChainId { network: String, chain_id: u64 },

    /// Network name is empty or contains whitespace
    #[error("Invalid network name: '{0}'")]
    InvalidNetworkName(String),

    /// Optimizer profile failed shape validation
    #[error("Invalid optimizer {field}: {reason}")]
    InvalidOptimizer { field: String, reason: String },

    /// Compiler version is not MAJOR.MINOR.PATCH
    #[error("Invalid compiler version: '{0}'")]
    InvalidCompilerVersion(String),
}

impl ResolveError {
    pub fn missing_credential(network: impl Into<String>, key: impl Into<String>) -> Self {
        Self::MissingCredential {
            network: network.into(),
            key: key.into(),
        }
    }

    pub fn invalid_url(
        network: impl Into<String>,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidUrl {
            network: network.into(),
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_optimizer(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOptimizer {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the field or key the error is about
    pub fn field(&self) -> &str {
        match self {
            ResolveError::UnknownNetwork(_)
            | ResolveError::DuplicateNetwork(_)
            | ResolveError::InvalidNetworkName(_) => "name",
            ResolveError::DuplicateChainId { .. } | ResolveError::InvalidChainId { .. } => "chain_id",
            ResolveError::MissingCredential { key, .. } => key,
            ResolveError::InvalidUrl { field, .. } => field,
            ResolveError::InvalidOptimizer { field, .. } => field,
            ResolveError::InvalidCompilerVersion(_) => "compiler.version",
        }
    }
}

pub type ResolveResult<T> = Result<T, ResolveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_field() {
        let err = ResolveError::missing_credential("arbitrum", "CYGNUS_DEPLOYER");
        assert_eq!(err.to_string(), "Missing credential CYGNUS_DEPLOYER for network 'arbitrum'");
        assert_eq!(err.field(), "CYGNUS_DEPLOYER");

        let err = ResolveError::invalid_url("bsc", "rpc_url", "relative URL without a base");
        assert!(err.to_string().contains("rpc_url"));
        assert_eq!(err.field(), "rpc_url");

        let err = ResolveError::DuplicateChainId {
            chain_id: 137,
            existing: "polygon".to_string(),
            attempted: "devnet".to_string(),
        };
        assert_eq!(err.to_string(), "Chain id 137 of 'devnet' is already used by 'polygon'");
        assert_eq!(err.field(), "chain_id");
    }
}
