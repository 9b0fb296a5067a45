//! CLI command implementations.

pub mod common;
pub mod decode;
pub mod grover;
pub mod lower;
pub mod providers;
pub mod qft;
pub mod stabilizer;
pub mod topology;
pub mod validate;
