//! Decode command implementation.

use anyhow::{Context, Result};
use tracing::warn;

use qsynth_qec::{Decoder, NearestNeighborDecoder, Syndrome};

use super::common::{load_topology, print_json};
use crate::config::Config;

/// Execute the decode command.
pub fn execute(distance: u32, syndrome: &str, config: &Config) -> Result<()> {
    let topology = load_topology(distance, config)?;
    let syndrome = Syndrome::parse(syndrome).context("Failed to parse syndrome")?;

    let expected = topology.syndrome_qubit_count() as usize;
    if syndrome.len() != expected {
        warn!(
            "Syndrome has {} bits but distance {} has {} syndrome qubits",
            syndrome.len(),
            distance,
            expected
        );
    }

    let corrections = NearestNeighborDecoder::new(&topology).decode(&syndrome);
    print_json(&corrections, config)
}
