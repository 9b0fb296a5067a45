//! Topology command implementation.

use anyhow::Result;
use serde::Serialize;

use qsynth_qec::{SurfaceCodeTopology, SyndromeSite};

use super::common::{load_topology, print_json};
use crate::config::Config;

/// Layout summary printed by the topology command.
#[derive(Debug, Serialize)]
pub struct TopologySummary {
    pub distance: u32,
    pub data_qubits: u32,
    pub syndrome_qubits: u32,
    pub total_qubits: u32,
    pub active_sites: usize,
    pub sites: Vec<SyndromeSite>,
}

impl From<&SurfaceCodeTopology> for TopologySummary {
    fn from(topology: &SurfaceCodeTopology) -> Self {
        Self {
            distance: topology.distance(),
            data_qubits: topology.data_qubit_count(),
            syndrome_qubits: topology.syndrome_qubit_count(),
            total_qubits: topology.total_qubits(),
            active_sites: topology.active_sites().count(),
            sites: topology.sites().collect(),
        }
    }
}

/// Execute the topology command.
pub fn execute(distance: u32, config: &Config) -> Result<()> {
    let topology = load_topology(distance, config)?;
    print_json(&TopologySummary::from(&topology), config)
}
