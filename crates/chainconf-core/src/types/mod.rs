//! Core types for network and compiler configuration
//!
//! This module contains the static, serializable definitions that the
//! resolver turns into a [`ResolvedConfig`](crate::resolver::ResolvedConfig).

mod network;
mod optimizer;
mod compiler;

pub use network::{CredentialRef, NetworkProfile, VerificationSettings};
pub use optimizer::{OptimizerPass, OptimizerProfile, validate_step_sequence, MAX_OPTIMIZER_RUNS};
pub use compiler::{BytecodeHash, CompilerSettings};
