//! Grover command implementation.

use anyhow::{Context, Result};
use tracing::info;

use qsynth_algo::{GroverSearch, MarkedStates};

use super::common::{parse_marked_state, print_json};
use crate::config::Config;

/// Execute the grover command.
pub fn execute(
    num_qubits: u32,
    marked: &[String],
    iterations: Option<u32>,
    config: &Config,
) -> Result<()> {
    let oracle = marked
        .iter()
        .map(|state| parse_marked_state(state, num_qubits))
        .collect::<Result<MarkedStates>>()?;

    let mut search = GroverSearch::new(num_qubits, oracle)
        .with_max_qubits(config.limits.max_search_qubits)
        .with_max_iterations(config.limits.max_iterations);
    if let Some(k) = iterations {
        search = search.with_iterations(k);
    }

    info!(
        "Building search circuit: {} qubits, {} iterations",
        search.num_qubits(),
        search.iterations()
    );

    let circuit = search.build().context("Failed to build search circuit")?;
    print_json(&circuit, config)
}
