//! Executor gate vocabularies.

use serde::Serialize;

use qsynth_ir::GateKind;

use crate::provider::ProviderKind;

/// Tags an executor accepts, plus an optional width limit.
///
/// Gates whose tag is not in the set are skipped during lowering rather than
/// rejected, matching how the vendor adapters treat unknown tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GateSet {
    /// Accepted gate tags.
    pub kinds: Vec<GateKind>,
    /// Widest circuit the executor runs. `None` means no limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_qubits: Option<u32>,
}

impl GateSet {
    /// Create a gate set from explicit tags.
    pub fn new(kinds: impl IntoIterator<Item = GateKind>) -> Self {
        Self {
            kinds: kinds.into_iter().collect(),
            max_qubits: None,
        }
    }

    /// The vocabulary of the gate-model adapters (IBM, Rigetti, Google):
    /// `H`, `X`, `CNOT` and `MEASURE`.
    pub fn vendor() -> Self {
        Self::new([GateKind::H, GateKind::X, GateKind::Cnot, GateKind::Measure])
    }

    /// Gate set of a provider's adapter.
    ///
    /// The Microsoft adapter measures every qubit at the end of the program
    /// on its own, so explicit `MEASURE` gates are not part of its set and
    /// show up as skipped when lowering.
    pub fn for_provider(provider: ProviderKind) -> Self {
        match provider {
            ProviderKind::Ibm | ProviderKind::Rigetti | ProviderKind::Google => Self::vendor(),
            ProviderKind::Microsoft => Self::new([GateKind::H, GateKind::X, GateKind::Cnot]),
        }
    }

    /// Limit the circuit width.
    #[must_use]
    pub fn with_max_qubits(mut self, max_qubits: u32) -> Self {
        self.max_qubits = Some(max_qubits);
        self
    }

    /// Check if a tag is accepted.
    pub fn contains(&self, kind: &GateKind) -> bool {
        self.kinds.contains(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vendor_vocabulary() {
        let gates = GateSet::for_provider(ProviderKind::Rigetti);
        assert!(gates.contains(&GateKind::H));
        assert!(gates.contains(&GateKind::Cnot));
        assert!(!gates.contains(&GateKind::Z));
        assert!(!gates.contains(&GateKind::Other("CX".into())));
        assert_eq!(gates.max_qubits, None);
    }

    #[test]
    fn test_microsoft_measures_implicitly() {
        let gates = GateSet::for_provider(ProviderKind::Microsoft);
        assert!(gates.contains(&GateKind::Cnot));
        assert!(!gates.contains(&GateKind::Measure));
        assert!(GateSet::for_provider(ProviderKind::Google).contains(&GateKind::Measure));
    }

    #[test]
    fn test_serializes_tags() {
        let json = serde_json::to_string(&GateSet::vendor().with_max_qubits(9)).unwrap();
        assert_eq!(json, r#"{"kinds":["H","X","CNOT","MEASURE"],"max_qubits":9}"#);
    }
}
