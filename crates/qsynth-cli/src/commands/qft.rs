//! QFT command implementation.

use anyhow::{Context, Result, bail};

use qsynth_algo::qft_circuit;

use super::common::print_json;
use crate::config::Config;

/// Execute the qft command.
pub fn execute(num_qubits: u32, inverse: bool, config: &Config) -> Result<()> {
    let max = config.limits.max_qft_qubits;
    if num_qubits > max {
        bail!("QFT of {num_qubits} qubits exceeds the configured maximum of {max}");
    }
    let circuit = qft_circuit(num_qubits, inverse).context("Failed to build QFT circuit")?;
    print_json(&circuit, config)
}
