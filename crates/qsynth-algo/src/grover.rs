//! Grover-style search circuit generator.
//!
//! The generated circuit has the shape of Grover's algorithm: a uniform
//! superposition, `k` rounds of oracle plus diffusion, then measurement.
//! The layers are structural stand-ins rather than a faithful unitary:
//!
//! - The oracle layer places one `X` on the last qubit per marked basis state
//!   instead of a phase flip on that state.
//! - The diffusion layer approximates the multi-controlled inversion with a
//!   `CNOT` ladder between two Hadamard layers.
//!
//! Downstream consumers rely on this exact gate sequence, so it is kept as is.

use std::f64::consts::PI;

use qsynth_ir::Circuit;
use tracing::{debug, instrument};

use crate::error::{AlgoError, AlgoResult};
use crate::oracle::{Oracle, index_to_bits};

/// Default cap on the search register width.
///
/// The oracle is evaluated `2^n · k` times, so generation cost grows
/// exponentially with `n`.
pub const DEFAULT_MAX_SEARCH_QUBITS: u32 = 16;

/// Widest register the basis-state enumeration can address.
pub const MAX_ENUMERABLE_QUBITS: u32 = 63;

/// Optimal number of Grover iterations for a single marked item among `2^n`.
///
/// Returns `floor(π/4 · sqrt(2^n))`.
pub fn optimal_iterations(num_qubits: u32) -> u32 {
    let space = 2f64.powf(f64::from(num_qubits));
    (PI / 4.0 * space.sqrt()).floor() as u32
}

/// Builder for a Grover-style search circuit.
///
/// ```rust
/// use qsynth_algo::{GroverSearch, MarkedStates};
///
/// let circuit = GroverSearch::new(2, MarkedStates::new([3])).build().unwrap();
/// assert_eq!(circuit.num_qubits(), 2);
/// assert_eq!(circuit.num_steps(), 4); // 1 + 3·k with k = 1
/// ```
#[derive(Debug, Clone)]
pub struct GroverSearch<O> {
    num_qubits: u32,
    oracle: O,
    iterations: Option<u32>,
    max_qubits: u32,
    max_iterations: Option<u32>,
}

impl<O: Oracle> GroverSearch<O> {
    /// Create a search over `num_qubits` qubits with the given oracle.
    pub fn new(num_qubits: u32, oracle: O) -> Self {
        Self {
            num_qubits,
            oracle,
            iterations: None,
            max_qubits: DEFAULT_MAX_SEARCH_QUBITS,
            max_iterations: None,
        }
    }

    /// Override the iteration count.
    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = Some(iterations);
        self
    }

    /// Set the qubit cap.
    #[must_use]
    pub fn with_max_qubits(mut self, max_qubits: u32) -> Self {
        self.max_qubits = max_qubits;
        self
    }

    /// Reject iteration counts above `max_iterations`, whether given or
    /// derived. Without a cap only step-count overflow is rejected.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Number of qubits in the search register.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Iteration count the circuit will use.
    pub fn iterations(&self) -> u32 {
        self.iterations.unwrap_or_else(|| optimal_iterations(self.num_qubits))
    }

    /// Generate the circuit.
    ///
    /// The declared step count is `1 + 3·k`. Each round occupies four steps
    /// (oracle, Hadamard, ladder, Hadamard), so for `k ≥ 1` the later rounds
    /// and the measurement sit past the declared count; see
    /// [`Circuit::depth`] for the occupied width.
    #[instrument(skip(self), fields(num_qubits = self.num_qubits))]
    pub fn build(&self) -> AlgoResult<Circuit> {
        let n = self.num_qubits;
        if n == 0 {
            return Err(AlgoError::InvalidParameter(
                "search register needs at least one qubit".into(),
            ));
        }
        let cap = self.max_qubits.min(MAX_ENUMERABLE_QUBITS);
        if n > cap {
            return Err(AlgoError::InvalidParameter(format!(
                "search register of {n} qubits exceeds the cap of {cap}"
            )));
        }

        let k = self.iterations();
        if let Some(max) = self.max_iterations.filter(|&max| k > max) {
            return Err(AlgoError::InvalidParameter(format!(
                "{k} iterations exceed the cap of {max}"
            )));
        }
        let num_steps = k
            .checked_mul(3)
            .and_then(|s| s.checked_add(1))
            .ok_or_else(|| too_many_iterations(k))?;
        let measure_step = k
            .checked_mul(4)
            .and_then(|s| s.checked_add(1))
            .ok_or_else(|| too_many_iterations(k))?;

        debug!("Generating search circuit: {n} qubits, {k} iterations, {num_steps} steps");

        let description = format!("Grover's algorithm with {k} iterations on {n} qubits");
        let mut circuit =
            Circuit::new("Grover Search", n, num_steps)?.with_description(description);

        for q in 0..n {
            circuit.h(q, 0)?;
        }

        let mut bits = vec![false; n as usize];
        let mut step = 1;
        for _ in 0..k {
            let marked = self.apply_oracle(&mut circuit, &mut bits, step)?;
            debug!("Oracle layer at step {step} marked {marked} states");
            apply_diffusion(&mut circuit, step + 1)?;
            step += 4;
        }
        debug_assert_eq!(step, measure_step);

        circuit.measure_all(measure_step)?;

        debug!(
            "Search circuit complete: {} gates, depth {}",
            circuit.len(),
            circuit.depth()
        );
        Ok(circuit)
    }

    /// Mark every basis state the oracle accepts with an `X` on the last qubit.
    fn apply_oracle(
        &self,
        circuit: &mut Circuit,
        bits: &mut [bool],
        step: u32,
    ) -> AlgoResult<u64> {
        let last = self.num_qubits - 1;
        let mut marked = 0;
        for state in 0..(1_u64 << self.num_qubits) {
            index_to_bits(state, bits);
            if self.oracle.is_marked(bits) {
                circuit.x(last, step)?;
                marked += 1;
            }
        }
        Ok(marked)
    }
}

/// Hadamard layer, `CNOT` ladder, Hadamard layer, starting at `step`.
fn apply_diffusion(circuit: &mut Circuit, step: u32) -> AlgoResult<()> {
    let n = circuit.num_qubits();
    for q in 0..n {
        circuit.h(q, step)?;
    }
    for q in 0..n - 1 {
        circuit.cnot(q, q + 1, step + 1)?;
    }
    for q in 0..n {
        circuit.h(q, step + 2)?;
    }
    Ok(())
}

fn too_many_iterations(k: u32) -> AlgoError {
    AlgoError::InvalidParameter(format!("{k} iterations overflow the step count"))
}

/// Generate a Grover-style search circuit.
///
/// Shorthand for [`GroverSearch`] with the default qubit cap. `iterations`
/// defaults to [`optimal_iterations`].
pub fn grover_circuit(
    num_qubits: u32,
    oracle: impl Oracle,
    iterations: Option<u32>,
) -> AlgoResult<Circuit> {
    let mut search = GroverSearch::new(num_qubits, oracle);
    if let Some(k) = iterations {
        search = search.with_iterations(k);
    }
    search.build()
}
