//! Compiler optimizer profile

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::resolver::{ResolveError, ResolveResult};

/// Single-letter Yul optimizer step abbreviations accepted by solc
const YUL_STEP_ABBREVIATIONS: &str = "flcCUnDEvejsxIOoigFhTLMmVatrpSudR";

/// Largest `runs` value solc accepts
pub const MAX_OPTIMIZER_RUNS: u64 = u32::MAX as u64;

/// Named optimizer toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OptimizerPass {
    Peephole,
    Inliner,
    JumpdestRemover,
    OrderLiterals,
    Deduplicate,
    Cse,
    ConstantOptimizer,
    /// Yul optimizer (only relevant without `viaIR`)
    Yul,
    /// Yul stack slot allocation
    StackAllocation,
}

impl OptimizerPass {
    /// Every known pass
    pub const ALL: [OptimizerPass; 9] = [
        OptimizerPass::Peephole,
        OptimizerPass::Inliner,
        OptimizerPass::JumpdestRemover,
        OptimizerPass::OrderLiterals,
        OptimizerPass::Deduplicate,
        OptimizerPass::Cse,
        OptimizerPass::ConstantOptimizer,
        OptimizerPass::Yul,
        OptimizerPass::StackAllocation,
    ];

    /// Key used in the solc `optimizer.details` object
    pub fn as_str(&self) -> &'static str {
        match self {
            OptimizerPass::Peephole => "peephole",
            OptimizerPass::Inliner => "inliner",
            OptimizerPass::JumpdestRemover => "jumpdestRemover",
            OptimizerPass::OrderLiterals => "orderLiterals",
            OptimizerPass::Deduplicate => "deduplicate",
            OptimizerPass::Cse => "cse",
            OptimizerPass::ConstantOptimizer => "constantOptimizer",
            OptimizerPass::Yul => "yul",
            OptimizerPass::StackAllocation => "stackAllocation",
        }
    }
}

impl fmt::Display for OptimizerPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optimizer settings applied to every network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizerProfile {
    pub enabled: bool,
    /// Expected number of contract executions
    pub runs: u64,
    /// Passes switched on; anything absent is switched off
    #[serde(default)]
    pub passes: BTreeSet<OptimizerPass>,
    /// Explicit Yul step sequence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_step_sequence: Option<String>,
}

impl Default for OptimizerProfile {
    fn default() -> Self {
        Self::disabled()
    }
}

impl OptimizerProfile {
    /// Optimizer on, every pass on, no custom sequence
    pub fn enabled(runs: u64) -> Self {
        Self {
            enabled: true,
            runs,
            passes: OptimizerPass::ALL.into_iter().collect(),
            custom_step_sequence: None,
        }
    }

    /// Optimizer off with solc's default run count
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            runs: 200,
            passes: BTreeSet::new(),
            custom_step_sequence: None,
        }
    }

    /// Replace the set of passes
    pub fn with_passes(mut self, passes: impl IntoIterator<Item = OptimizerPass>) -> Self {
        self.passes = passes.into_iter().collect();
        self
    }

    /// Set the Yul step sequence
    pub fn with_step_sequence(mut self, sequence: impl Into<String>) -> Self {
        self.custom_step_sequence = Some(sequence.into());
        self
    }

    pub fn has_pass(&self, pass: OptimizerPass) -> bool {
        self.passes.contains(&pass)
    }

    /// Check `runs` and the step sequence
    ///
    /// Runs regardless of `enabled`.
    pub fn validate(&self) -> ResolveResult<()> {
        if self.runs > MAX_OPTIMIZER_RUNS {
            return Err(ResolveError::invalid_optimizer(
                "runs",
                format!("{} exceeds the maximum of {}", self.runs, MAX_OPTIMIZER_RUNS),
            ));
        }
        if let Some(sequence) = &self.custom_step_sequence {
            validate_step_sequence(sequence)
                .map_err(|reason| ResolveError::invalid_optimizer("custom_step_sequence", reason))?;
        }
        Ok(())
    }

    /// Render the solc `settings.optimizer` object
    pub fn to_solc_json(&self) -> Value {
        if !self.enabled {
            return json!({ "enabled": false, "runs": self.runs });
        }

        let mut details = Map::new();
        for pass in OptimizerPass::ALL {
            if pass == OptimizerPass::StackAllocation {
                continue;
            }
            details.insert(pass.as_str().to_string(), Value::Bool(self.has_pass(pass)));
        }

        let mut yul_details = Map::new();
        yul_details.insert(
            "stackAllocation".to_string(),
            Value::Bool(self.has_pass(OptimizerPass::StackAllocation)),
        );
        if let Some(sequence) = &self.custom_step_sequence {
            yul_details.insert("optimizerSteps".to_string(), Value::String(sequence.clone()));
        }
        details.insert("yulDetails".to_string(), Value::Object(yul_details));

        json!({
            "enabled": true,
            "runs": self.runs,
            "details": Value::Object(details),
        })
    }
}

/// Check a Yul optimizer step sequence for shape
///
/// Accepts known step letters, whitespace, balanced `[`/`]` and at most one
/// top-level `:` separating the main and cleanup sequences.
pub fn validate_step_sequence(sequence: &str) -> Result<(), String> {
    let mut depth = 0usize;
    let mut separators = 0usize;

    for (pos, ch) in sequence.chars().enumerate() {
        match ch {
            '[' => depth += 1,
            ']' => {
                if depth == 0 {
                    return Err(format!("unbalanced ']' at position {}", pos));
                }
                depth -= 1;
            }
            ':' => {
                if depth > 0 {
                    return Err(format!("':' inside brackets at position {}", pos));
                }
                separators += 1;
                if separators > 1 {
                    return Err(format!("more than one ':' (second at position {})", pos));
                }
            }
            c if c.is_whitespace() => {}
            c if YUL_STEP_ABBREVIATIONS.contains(c) => {}
            c => return Err(format!("unknown step '{}' at position {}", c, pos)),
        }
    }

    if depth != 0 {
        return Err(format!("{} unclosed '['", depth));
    }
    Ok(())
}
