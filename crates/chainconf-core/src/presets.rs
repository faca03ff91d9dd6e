//! Built-in network table and compiler defaults
//!
//! Mirrors the deployment setup the crate was written for: a local node,
//! Ethereum mainnet, Arbitrum, Polygon, Optimism, BNB Chain and Polygon zkEVM.
//! RPC URLs for hosted chains come from `RPC_URL_*` secrets, deployer keys
//! from `CYGNUS_DEPLOYER`, explorer keys from `ETHERSCAN_KEY_*`.

use once_cell::sync::Lazy;

use crate::config::DeploymentConfig;
use crate::resolver::{NetworkRegistry, ResolveResult};
use crate::types::{
    BytecodeHash, CompilerSettings, CredentialRef, NetworkProfile, OptimizerPass, OptimizerProfile,
    VerificationSettings,
};

/// Network used when none is named
pub const DEFAULT_NETWORK: &str = "localhost";

/// Compiler version the presets target
pub const DEFAULT_COMPILER_VERSION: &str = "0.8.17";

/// Optimizer runs tuned for cheap calls over cheap deployment
pub const DEFAULT_OPTIMIZER_RUNS: u64 = 1_000_000;

/// solc's default Yul step sequence, made explicit
pub const DEFAULT_STEP_SEQUENCE: &str = "dhfoDgvulfnTUtnIf[xa[r]EscLMcCTUtTOntnfDIulLculVcul[j]Tpeulxa[rul]xa[r]cLgvifCTUca[r]LSsTOtfDnca[r]Iulc]jmul[jul]VcTOculjmul";

const DEPLOYER: &str = "CYGNUS_DEPLOYER";

static BUILTIN_NETWORKS: Lazy<Vec<NetworkProfile>> = Lazy::new(|| {
    vec![
        NetworkProfile::new("localhost", 31337, "http://127.0.0.1:8545/")
            .with_timeout_ms(400_000_000)
            .credentials_optional(),
        hosted("mainnet", 1, "RPC_URL_MAINNET").with_verification(VerificationSettings::new(
            "ETHERSCAN_KEY_MAINNET",
            "https://api.etherscan.io/api",
            "https://etherscan.io/",
        )),
        hosted("arbitrum", 42161, "RPC_URL_ARBITRUM").with_verification(VerificationSettings::new(
            "ETHERSCAN_KEY_ARBITRUM",
            "https://api.arbiscan.io/api",
            "https://arbiscan.io/",
        )),
        hosted("polygon", 137, "RPC_URL_POLYGON").with_verification(VerificationSettings::new(
            "ETHERSCAN_KEY_POLYGON",
            "https://api.polygonscan.com/api",
            "https://polygonscan.com/",
        )),
        hosted("polygonMumbai", 80001, "RPC_URL_POLYGON_TESTNET").with_verification(
            VerificationSettings::new(
                "ETHERSCAN_KEY_POLYGON",
                "https://api-testnet.polygonscan.com/api",
                "https://mumbai.polygonscan.com/",
            ),
        ),
        hosted("optimism", 10, "RPC_URL_OPTIMISM").with_verification(VerificationSettings::new(
            "ETHERSCAN_KEY_OPTIMISM",
            "https://api-optimistic.etherscan.io/api",
            "https://optimistic.etherscan.io/",
        )),
        hosted("optimismGoerli", 420, "RPC_URL_OPTIMISM_GOERLI"),
        NetworkProfile::new("bsc", 56, "https://rpc.ankr.com/bsc").credentials_optional(),
        hosted("zkevm", 1101, "RPC_URL_ZKEVM").with_verification(VerificationSettings::new(
            "ETHERSCAN_KEY_ZKEVM",
            "https://api-zkevm.polygonscan.com/",
            "https://zkevm.polygonscan.com/",
        )),
        NetworkProfile::new("zkevmTestnet", 1442, "https://rpc.ankr.com/polygon_zkevm_testnet")
            .with_account(DEPLOYER)
            .with_verification(VerificationSettings::new(
                "ETHERSCAN_KEY_ZKEVM",
                "https://api-testnet-zkevm.polygonscan.com/",
                "https://testnet-zkevm.polygonscan.com/",
            )),
    ]
});

/// Hosted chain: RPC URL from a secret, deployer key required
fn hosted(name: &str, chain_id: u64, rpc_url_key: &str) -> NetworkProfile {
    NetworkProfile::new(name, chain_id, format!("${{{}}}", rpc_url_key))
        .with_accounts(vec![CredentialRef::new(DEPLOYER)])
}

/// The built-in network profiles, in registration order
pub fn builtin_networks() -> &'static [NetworkProfile] {
    &BUILTIN_NETWORKS
}

/// A fresh registry holding every built-in network
pub fn builtin_registry() -> ResolveResult<NetworkRegistry> {
    NetworkRegistry::with_networks(builtin_networks().iter().cloned())
}

/// Optimizer on with every pass and the explicit default step sequence
pub fn default_optimizer() -> OptimizerProfile {
    OptimizerProfile::enabled(DEFAULT_OPTIMIZER_RUNS)
        .with_passes(OptimizerPass::ALL)
        .with_step_sequence(DEFAULT_STEP_SEQUENCE)
}

/// 0.8.17 through the IR pipeline, no metadata hash
pub fn default_compiler() -> CompilerSettings {
    CompilerSettings::new(DEFAULT_COMPILER_VERSION)
        .with_via_ir(true)
        .with_bytecode_hash(BytecodeHash::None)
}

/// The whole preset as a config file, e.g. to seed `networks.yaml`
pub fn default_deployment_config() -> DeploymentConfig {
    DeploymentConfig {
        default_network: Some(DEFAULT_NETWORK.to_string()),
        compiler: default_compiler(),
        optimizer: default_optimizer(),
        networks: builtin_networks().to_vec(),
    }
}
