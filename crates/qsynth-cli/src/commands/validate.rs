//! Validate command implementation.

use std::path::Path;

use anyhow::{Result, bail};
use console::style;
use serde::Serialize;

use qsynth_ir::Circuit;

use super::common::{load_circuit, print_json};
use crate::config::Config;

/// Structural report printed by the validate command.
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub name: String,
    pub num_qubits: u32,
    pub num_steps: u32,
    pub gates: usize,
    pub depth: u32,
    pub steps_in_bounds: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_error: Option<String>,
}

impl From<&Circuit> for ValidationReport {
    fn from(circuit: &Circuit) -> Self {
        let step_error = circuit.check_step_bounds().err().map(|e| e.to_string());
        Self {
            name: circuit.name().to_string(),
            num_qubits: circuit.num_qubits(),
            num_steps: circuit.num_steps(),
            gates: circuit.len(),
            depth: circuit.depth(),
            steps_in_bounds: step_error.is_none(),
            step_error,
        }
    }
}

/// Execute the validate command.
pub fn execute(input: &Path, strict: bool, config: &Config) -> Result<()> {
    let circuit = load_circuit(input)?;
    let report = ValidationReport::from(&circuit);

    if let Some(error) = &report.step_error {
        if strict {
            bail!("{}: {error}", input.display());
        }
        eprintln!("{} {error}", style("warning:").yellow().bold());
    }

    print_json(&report, config)
}
