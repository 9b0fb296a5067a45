//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Serialize;

use qsynth_ir::Circuit;
use qsynth_qec::SurfaceCodeTopology;

use crate::config::Config;

/// Load a circuit from an IR JSON file.
pub fn load_circuit(path: &Path) -> Result<Circuit> {
    if !path.exists() {
        bail!("File not found: {}", path.display());
    }

    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    Circuit::from_json(&source).with_context(|| format!("Invalid circuit in {}", path.display()))
}

/// Print a value as JSON on stdout, pretty or compact per the config.
pub fn print_json<T: Serialize + ?Sized>(value: &T, config: &Config) -> Result<()> {
    let json = if config.output.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}

/// Parse a marked state given as a bit string, most significant bit first.
pub fn parse_marked_state(text: &str, num_qubits: u32) -> Result<u64> {
    let text = text.trim();
    if text.len() != num_qubits as usize {
        bail!(
            "Marked state '{text}' has {} bits, expected {num_qubits}",
            text.len()
        );
    }
    if !text.bytes().all(|b| b == b'0' || b == b'1') {
        bail!("Marked state '{text}' is not a bit string");
    }
    u64::from_str_radix(text, 2)
        .with_context(|| format!("Marked state '{text}' does not fit in 64 bits"))
}

/// Build the topology for `distance` after checking the configured cap.
pub fn load_topology(distance: u32, config: &Config) -> Result<SurfaceCodeTopology> {
    let max = config.limits.max_code_distance;
    if distance > max {
        bail!("Distance {distance} exceeds the configured maximum of {max}");
    }
    Ok(SurfaceCodeTopology::new(distance)?)
}
