//! Fourier-transform circuit generator.
//!
//! Each processed qubit gets a Hadamard followed by one `CNOT` to every
//! higher-numbered qubit. The `CNOT`s stand in for the controlled phase
//! rotations of a textbook QFT and carry no angle.

use qsynth_ir::Circuit;
use tracing::debug;

use crate::error::{AlgoError, AlgoResult};

/// Generate a QFT-style circuit on `num_qubits` qubits.
///
/// Qubits are processed in ascending order, or descending when `inverse` is
/// set. The `i`-th processed qubit `q` gets an `H` at step `2i` and a `CNOT`
/// (control `q`) onto each qubit above `q` at step `2i + 1`. All qubits are
/// measured at step `2n`. The declared step count is `2n` for both directions.
///
/// ```rust
/// use qsynth_algo::qft_circuit;
///
/// let circuit = qft_circuit(3, false).unwrap();
/// assert_eq!(circuit.num_steps(), 6);
/// assert_eq!(circuit.description(), Some("QFT on 3 qubits"));
/// ```
pub fn qft_circuit(num_qubits: u32, inverse: bool) -> AlgoResult<Circuit> {
    let n = num_qubits;
    if n == 0 {
        return Err(AlgoError::InvalidParameter(
            "QFT needs at least one qubit".into(),
        ));
    }
    let num_steps = n.checked_mul(2).ok_or_else(|| {
        AlgoError::InvalidParameter(format!("{n} qubits overflow the step count"))
    })?;

    let description = if inverse {
        format!("Inverse QFT on {n} qubits")
    } else {
        format!("QFT on {n} qubits")
    };
    let mut circuit =
        Circuit::new("Quantum Fourier Transform", n, num_steps)?.with_description(description);

    let mut step = 0;
    if inverse {
        for q in (0..n).rev() {
            apply_block(&mut circuit, q, step)?;
            step += 2;
        }
    } else {
        for q in 0..n {
            apply_block(&mut circuit, q, step)?;
            step += 2;
        }
    }

    circuit.measure_all(step)?;

    debug!(
        "Generated {}QFT: {} qubits, {} gates",
        if inverse { "inverse " } else { "" },
        n,
        circuit.len()
    );
    Ok(circuit)
}

/// `H` on `q` at `step`, then a `CNOT` from `q` onto every higher qubit.
fn apply_block(circuit: &mut Circuit, q: u32, step: u32) -> AlgoResult<()> {
    circuit.h(q, step)?;
    for target in q + 1..circuit.num_qubits() {
        circuit.cnot(q, target, step + 1)?;
    }
    Ok(())
}
