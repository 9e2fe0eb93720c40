// src/core/mod.rs

//! Core data structures and types: Pauli symbols, gates and errors.

// Declare modules within core
pub mod error;
pub mod pauli;
pub mod gate;

// Re-export public types for convenient access via `qca::core::TypeName`
pub use error::QcaError;
pub use pauli::Pauli;
pub use gate::Gate;

pub mod constants;
pub use constants::qca_constants::{PHASE_ONE, PHASE_XZ}; // Re-export
