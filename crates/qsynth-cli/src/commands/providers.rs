//! Providers command implementation.

use anyhow::Result;
use serde::Serialize;

use qsynth_hal::{GateSet, ProviderKind};

use super::common::print_json;
use crate::config::Config;

/// One provider entry printed by the providers command.
#[derive(Debug, Serialize)]
pub struct ProviderInfo {
    pub provider: ProviderKind,
    pub default_backend: &'static str,
    pub gate_set: GateSet,
}

/// Execute the providers command.
pub fn execute(config: &Config) -> Result<()> {
    let providers: Vec<ProviderInfo> = ProviderKind::ALL
        .into_iter()
        .map(|provider| ProviderInfo {
            provider,
            default_backend: provider.default_backend(),
            gate_set: GateSet::for_provider(provider),
        })
        .collect();

    print_json(&providers, config)
}
