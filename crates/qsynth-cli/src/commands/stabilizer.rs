//! Stabilizer command implementation.

use anyhow::Result;

use super::common::{load_topology, print_json};
use crate::config::Config;

/// Execute the stabilizer command.
pub fn execute(distance: u32, config: &Config) -> Result<()> {
    let topology = load_topology(distance, config)?;
    let circuit = topology.stabilizer_circuit()?;
    print_json(&circuit, config)
}
