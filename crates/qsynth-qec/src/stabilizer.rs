//! Stabilizer measurement circuit generator.
//!
//! The circuit acts on the data qubits `0..d²` and the syndrome qubits that
//! follow them. Every weight-4 stabilizer is approximated by a fixed schedule
//! of four `CNOT` layers, so the circuit depth does not depend on distance.

use qsynth_ir::Circuit;
use tracing::{debug, instrument};

use crate::error::QecResult;
use crate::topology::SurfaceCodeTopology;

/// Declared step count of every stabilizer circuit.
pub const STABILIZER_STEPS: u32 = 6;

/// Number of `CNOT` layers between preparation and measurement.
pub const CNOT_LAYERS: u32 = 4;

/// Generate the syndrome-extraction circuit for `topology`.
///
/// | Step | Gates |
/// |------|-------|
/// | 0 | `H` on every syndrome qubit |
/// | 1–4 | layer `l`: `CNOT` from each active syndrome qubit onto `neighbors[l % len]` |
/// | 5 | `MEASURE` on every syndrome qubit |
///
/// Inert syndrome qubits are still prepared and measured.
#[instrument(skip(topology), fields(distance = topology.distance()))]
pub fn stabilizer_circuit(topology: &SurfaceCodeTopology) -> QecResult<Circuit> {
    let distance = topology.distance();
    let syndromes = topology.syndrome_qubit_count();

    let mut circuit = Circuit::new(
        "Surface Code Stabilizers",
        topology.total_qubits(),
        STABILIZER_STEPS,
    )?
    .with_description(format!(
        "Surface code stabilizer measurements with distance {distance}"
    ));

    for i in 0..syndromes {
        circuit.h(topology.syndrome_qubit(i).0, 0)?;
    }

    for layer in 0..CNOT_LAYERS {
        for i in topology.active_sites() {
            let neighbors = topology.neighbors(i);
            let target = neighbors[layer as usize % neighbors.len()];
            circuit.cnot(topology.syndrome_qubit(i).0, target, layer + 1)?;
        }
    }

    for i in 0..syndromes {
        circuit.measure(topology.syndrome_qubit(i).0, STABILIZER_STEPS - 1)?;
    }

    debug!(
        "Generated stabilizer circuit: {} qubits, {} gates",
        circuit.num_qubits(),
        circuit.len()
    );
    Ok(circuit)
}

impl SurfaceCodeTopology {
    /// Generate this topology's stabilizer measurement circuit.
    ///
    /// See [`stabilizer_circuit`].
    pub fn stabilizer_circuit(&self) -> QecResult<Circuit> {
        stabilizer_circuit(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qsynth_ir::GateKind;

    #[test]
    fn test_distance_three_circuit() {
        let topo = SurfaceCodeTopology::new(3).unwrap();
        let circuit = topo.stabilizer_circuit().unwrap();

        assert_eq!(circuit.name(), "Surface Code Stabilizers");
        assert_eq!(
            circuit.description(),
            Some("Surface code stabilizer measurements with distance 3")
        );
        assert_eq!(circuit.num_qubits(), 17);
        assert_eq!(circuit.num_steps(), 6);
        assert!(circuit.check_step_bounds().is_ok());

        // 8 H, 3 active sites × 4 layers, 8 MEASURE
        assert_eq!(circuit.count_kind(&GateKind::H), 8);
        assert_eq!(circuit.count_kind(&GateKind::Cnot), 12);
        assert_eq!(circuit.count_kind(&GateKind::Measure), 8);
    }

    #[test]
    fn test_layer_targets_cycle_through_neighbors() {
        let topo = SurfaceCodeTopology::new(3).unwrap();
        let circuit = topo.stabilizer_circuit().unwrap();

        // Syndrome 4 (qubit 13) has neighbors [6, 7].
        let targets: Vec<_> = circuit
            .gates()
            .iter()
            .filter(|g| g.control.map(|c| c.0) == Some(13))
            .map(|g| (g.step(), g.qubit().0))
            .collect();
        assert_eq!(targets, vec![(1, 6), (2, 7), (3, 6), (4, 7)]);

        // Syndrome 0 (qubit 9) walks all four neighbors.
        let targets: Vec<_> = circuit
            .gates()
            .iter()
            .filter(|g| g.control.map(|c| c.0) == Some(9))
            .map(|g| g.qubit().0)
            .collect();
        assert_eq!(targets, vec![0, 1, 3, 4]);
    }

    #[test]
    fn test_only_syndrome_qubits_prepared_and_measured() {
        let topo = SurfaceCodeTopology::new(5).unwrap();
        let circuit = stabilizer_circuit(&topo).unwrap();
        let data = topo.data_qubit_count();
        assert!(
            circuit
                .gates()
                .iter()
                .filter(|g| g.kind == GateKind::H || g.kind == GateKind::Measure)
                .all(|g| g.qubit().0 >= data)
        );
    }

    #[test]
    fn test_deterministic() {
        let topo = SurfaceCodeTopology::new(7).unwrap();
        assert_eq!(
            topo.stabilizer_circuit().unwrap(),
            topo.stabilizer_circuit().unwrap()
        );
    }
}
