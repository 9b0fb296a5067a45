//! Vendor provider tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HalError;

/// Vendor executor selected by an execution request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// IBM Quantum.
    Ibm,
    /// Rigetti.
    Rigetti,
    /// Google Quantum AI.
    Google,
    /// Microsoft Azure Quantum.
    Microsoft,
}

impl ProviderKind {
    /// Every provider, in wire-tag order.
    pub const ALL: [ProviderKind; 4] = [
        ProviderKind::Ibm,
        ProviderKind::Rigetti,
        ProviderKind::Google,
        ProviderKind::Microsoft,
    ];

    /// Wire tag.
    pub fn as_str(self) -> &'static str {
        match self {
            ProviderKind::Ibm => "ibm",
            ProviderKind::Rigetti => "rigetti",
            ProviderKind::Google => "google",
            ProviderKind::Microsoft => "microsoft",
        }
    }

    /// Backend used when a request does not name one.
    pub fn default_backend(self) -> &'static str {
        match self {
            ProviderKind::Ibm => "ibmq_qasm_simulator",
            ProviderKind::Rigetti => "9q-square-qvm",
            ProviderKind::Google => "simulator",
            ProviderKind::Microsoft => "qsharp.simulator",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = HalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProviderKind::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| HalError::UnknownProvider(s.to_string()))
    }
}
