//! Compiler settings shared by every network

use std::fmt;

use semver::Version;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::resolver::{ResolveError, ResolveResult};
use super::optimizer::OptimizerProfile;

/// Hash appended to the contract metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BytecodeHash {
    None,
    #[default]
    Ipfs,
    Bzzr1,
}

impl BytecodeHash {
    pub fn as_str(&self) -> &'static str {
        match self {
            BytecodeHash::None => "none",
            BytecodeHash::Ipfs => "ipfs",
            BytecodeHash::Bzzr1 => "bzzr1",
        }
    }
}

impl fmt::Display for BytecodeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compiler version and code generation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerSettings {
    /// solc version, `MAJOR.MINOR.PATCH`
    pub version: String,
    /// Compile through the Yul IR pipeline
    #[serde(default)]
    pub via_ir: bool,
    #[serde(default)]
    pub bytecode_hash: BytecodeHash,
}

impl CompilerSettings {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            via_ir: false,
            bytecode_hash: BytecodeHash::default(),
        }
    }

    pub fn with_via_ir(mut self, via_ir: bool) -> Self {
        self.via_ir = via_ir;
        self
    }

    pub fn with_bytecode_hash(mut self, hash: BytecodeHash) -> Self {
        self.bytecode_hash = hash;
        self
    }

    /// Parsed version; must be a plain `MAJOR.MINOR.PATCH` release
    pub fn semver(&self) -> ResolveResult<Version> {
        let invalid = || ResolveError::InvalidCompilerVersion(self.version.clone());
        let version = Version::parse(&self.version).map_err(|_| invalid())?;
        if !version.pre.is_empty() || !version.build.is_empty() {
            return Err(invalid());
        }
        Ok(version)
    }

    /// Check the version is a plain `MAJOR.MINOR.PATCH` triple
    pub fn validate(&self) -> ResolveResult<()> {
        self.semver().map(|_| ())
    }

    /// Render the solc standard-JSON `settings` object
    pub fn solc_settings(&self, optimizer: &OptimizerProfile) -> Value {
        json!({
            "viaIR": self.via_ir,
            "optimizer": optimizer.to_solc_json(),
            "metadata": { "bytecodeHash": self.bytecode_hash.as_str() },
        })
    }
}
