//! On-disk deployment configuration schema

use serde::{Deserialize, Serialize};

use crate::presets;
use crate::resolver::{validate_name, ConfigResolver, NetworkRegistry, ResolveError, ResolveResult};
use crate::types::{CompilerSettings, NetworkProfile, OptimizerProfile};
use super::traits::{ConfigError, ConfigResult};

/// Contents of a `networks.yaml` file
///
/// ```yaml
/// default_network: localhost
/// compiler:
///   version: 0.8.17
///   via_ir: true
///   bytecode_hash: none
/// optimizer:
///   enabled: true
///   runs: 1000000
///   passes: [peephole, inliner, cse]
/// networks:
///   - name: arbitrum
///     chain_id: 42161
///     rpc_url: ${RPC_URL_ARBITRUM}
///     accounts: [CYGNUS_DEPLOYER]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentConfig {
    /// Network used when none is named
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_network: Option<String>,

    #[serde(default = "presets::default_compiler")]
    pub compiler: CompilerSettings,

    #[serde(default)]
    pub optimizer: OptimizerProfile,

    #[serde(default)]
    pub networks: Vec<NetworkProfile>,
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            default_network: None,
            compiler: presets::default_compiler(),
            optimizer: OptimizerProfile::default(),
            networks: vec![],
        }
    }
}

impl DeploymentConfig {
    /// Build a registry from `networks`, in file order
    pub fn build_registry(&self) -> ResolveResult<NetworkRegistry> {
        NetworkRegistry::with_networks(self.networks.iter().cloned())
    }

    /// A resolver over `registry` using this file's compiler, optimizer and default network
    pub fn resolver<'r>(&self, registry: &'r NetworkRegistry) -> ConfigResolver<'r> {
        let resolver = ConfigResolver::new(registry, self.compiler.clone(), self.optimizer.clone());
        match &self.default_network {
            Some(name) => resolver.with_default_network(name.clone()),
            None => resolver,
        }
    }

    /// Static checks that need no secrets
    ///
    /// Catches duplicate names and chain ids, bad compiler/optimizer settings
    /// and a default network that is not defined.
    pub fn validate(&self) -> ResolveResult<()> {
        self.compiler.validate()?;
        self.optimizer.validate()?;
        let registry = self.build_registry()?;
        if let Some(name) = &self.default_network {
            if !registry.contains(name) {
                return Err(ResolveError::UnknownNetwork(name.clone()));
            }
        }
        Ok(())
    }

    /// Find a network by its exact name
    pub fn network(&self, name: &str) -> Option<&NetworkProfile> {
        self.networks.iter().find(|p| p.name == name)
    }

    /// Append a network, rejecting bad names and name or chain id clashes
    pub fn add_network(&mut self, profile: NetworkProfile) -> ConfigResult<()> {
        validate_name(&profile.name)?;
        if self.network(&profile.name).is_some() {
            return Err(ConfigError::NetworkExists(profile.name));
        }
        self.check_chain_id(&profile, None)?;
        self.networks.push(profile);
        Ok(())
    }

    /// Replace the network called `name`, keeping its position
    pub fn update_network(&mut self, name: &str, profile: NetworkProfile) -> ConfigResult<()> {
        let pos = self
            .position(name)
            .ok_or_else(|| ConfigError::NetworkNotFound(name.to_string()))?;

        validate_name(&profile.name)?;
        if let Some(other) = self.position(&profile.name) {
            if other != pos {
                return Err(ConfigError::NetworkExists(profile.name));
            }
        }
        self.check_chain_id(&profile, Some(pos))?;
        self.networks[pos] = profile;
        Ok(())
    }

    /// Remove the network called `name`
    pub fn remove_network(&mut self, name: &str) -> ConfigResult<()> {
        let pos = self
            .position(name)
            .ok_or_else(|| ConfigError::NetworkNotFound(name.to_string()))?;
        self.networks.remove(pos);
        Ok(())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.networks.iter().position(|p| p.name == name)
    }

    fn check_chain_id(&self, profile: &NetworkProfile, skip: Option<usize>) -> ConfigResult<()> {
        let clash = self
            .networks
            .iter()
            .enumerate()
            .find(|(i, p)| Some(*i) != skip && p.chain_id == profile.chain_id);

        match clash {
            Some((_, existing)) => Err(ResolveError::DuplicateChainId {
                chain_id: profile.chain_id,
                existing: existing.name.clone(),
                attempted: profile.name.clone(),
            }
            .into()),
            None => Ok(()),
        }
    }
}
