//! Oracle capabilities for the search generator.

use std::collections::BTreeSet;

/// A predicate marking target basis states.
///
/// The generator calls [`Oracle::is_marked`] once per basis state and
/// iteration, passing the state's bits most-significant first (`bits[0]` is
/// the highest bit of the state index). Implementations must be pure: the
/// same bits always give the same answer.
///
/// Any `Fn(&[bool]) -> bool` closure is an oracle:
///
/// ```rust
/// use qsynth_algo::Oracle;
///
/// let all_ones = |bits: &[bool]| bits.iter().all(|&b| b);
/// assert!(all_ones.is_marked(&[true, true]));
/// assert!(!all_ones.is_marked(&[true, false]));
/// ```
pub trait Oracle {
    /// Whether the basis state `bits` is marked.
    fn is_marked(&self, bits: &[bool]) -> bool;
}

impl<F> Oracle for F
where
    F: Fn(&[bool]) -> bool,
{
    fn is_marked(&self, bits: &[bool]) -> bool {
        self(bits)
    }
}

/// Oracle marking an explicit set of basis-state indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkedStates {
    states: BTreeSet<u64>,
}

impl MarkedStates {
    /// Create an oracle marking the given state indices.
    pub fn new(states: impl IntoIterator<Item = u64>) -> Self {
        Self {
            states: states.into_iter().collect(),
        }
    }

    /// Marked indices in ascending order.
    pub fn states(&self) -> impl Iterator<Item = u64> + '_ {
        self.states.iter().copied()
    }

    /// Number of marked states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Check if no state is marked.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Whether the state index is marked.
    pub fn contains(&self, state: u64) -> bool {
        self.states.contains(&state)
    }
}

impl FromIterator<u64> for MarkedStates {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl Oracle for MarkedStates {
    fn is_marked(&self, bits: &[bool]) -> bool {
        // Registers wider than 64 bits cannot name a u64 index.
        if bits.len() > 64 {
            return false;
        }
        self.contains(bits_to_index(bits))
    }
}

/// Fill `bits` with the MSB-first binary expansion of `state`.
pub(crate) fn index_to_bits(state: u64, bits: &mut [bool]) {
    let n = bits.len();
    for (j, bit) in bits.iter_mut().enumerate() {
        *bit = (state >> (n - 1 - j)) & 1 == 1;
    }
}

/// Inverse of [`index_to_bits`].
pub(crate) fn bits_to_index(bits: &[bool]) -> u64 {
    bits.iter().fold(0, |acc, &b| (acc << 1) | u64::from(b))
}
