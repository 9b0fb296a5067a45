//! Lower command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use qsynth_hal::{GateSet, LoweredCircuit, ProviderKind, lower};

use super::common::{load_circuit, print_json};
use crate::config::Config;

/// Lowered circuit together with the provider it targets.
#[derive(Debug, Serialize)]
pub struct LowerOutput {
    pub provider: ProviderKind,
    pub backend: &'static str,
    #[serde(flatten)]
    pub lowered: LoweredCircuit,
}

/// Execute the lower command.
pub fn execute(input: &Path, provider: &str, config: &Config) -> Result<()> {
    let provider: ProviderKind = provider.parse()?;
    let circuit = load_circuit(input)?;

    let lowered = lower(&circuit, &GateSet::for_provider(provider))
        .with_context(|| format!("Failed to lower '{}' for {provider}", circuit.name()))?;

    print_json(
        &LowerOutput {
            provider,
            backend: provider.default_backend(),
            lowered,
        },
        config,
    )
}
