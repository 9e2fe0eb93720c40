// src/experiment/initial.rs

//! Builders for initial lattice configurations.
//!
//! Typical configurations are mostly identity with a small non-identity
//! region in the middle, leaving room for the light-cone on both sides.

use crate::core::{Gate, Pauli, QcaError};
use rand::SeedableRng;
use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;

/// Places `pattern` in the middle of `width` identity cells. When the slack
/// is odd, the extra identity goes on the right.
///
/// # Errors
/// `QcaError::Config` if the pattern is wider than the lattice.
pub fn centered(width: usize, pattern: &[Pauli]) -> Result<Vec<Gate>, QcaError> {
    if pattern.len() > width {
        return Err(QcaError::Config {
            message: format!("pattern of {} symbols does not fit in width {}", pattern.len(), width),
        });
    }
    let left = (width - pattern.len()) / 2;
    let mut gates = vec![Gate::identity(); width];
    for (slot, pauli) in gates[left..].iter_mut().zip(pattern) {
        *slot = Gate::new(*pauli);
    }
    Ok(gates)
}

/// A centered region of `support` random non-identity symbols inside
/// `width` cells.
///
/// The region is drawn from a `StdRng` seeded with `seed`, so the same
/// arguments always give the same configuration.
pub fn random_centered(width: usize, support: usize, seed: u64) -> Result<Vec<Gate>, QcaError> {
    const SUPPORT_SYMBOLS: [Pauli; 3] = [Pauli::X, Pauli::Y, Pauli::Z];

    let mut rng = StdRng::seed_from_u64(seed);
    let pick = Uniform::new(0u8, SUPPORT_SYMBOLS.len() as u8).map_err(|e| QcaError::Config { message: e.to_string() })?;
    let pattern: Vec<Pauli> = (0..support).map(|_| SUPPORT_SYMBOLS[pick.sample(&mut rng) as usize]).collect();
    centered(width, &pattern)
}
