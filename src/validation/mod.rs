// src/validation/mod.rs

//! Provides functions to validate lattice and history invariants.
//!
//! These checks recompute everything from the public view of a [`Lattice`]
//! (positions and partner lists) rather than trusting its internal cluster
//! table, so they can catch bookkeeping defects.

use crate::core::QcaError;
use crate::lattice::{History, Lattice};

// --- Helper Functions ---

fn violation(message: String) -> Result<(), QcaError> {
    Err(QcaError::InvariantViolation { message })
}

// --- Public Validation Functions ---

/// Checks that `b` is a partner of `a` exactly when `a` is a partner of `b`.
pub fn check_symmetry(lattice: &Lattice) -> Result<(), QcaError> {
    for a in 0..lattice.len() {
        for b in lattice.partners(a) {
            if !lattice.partners(b).contains(&a) {
                return violation(format!("cell {} lists {} as partner but not vice versa", a, b));
            }
        }
    }
    Ok(())
}

/// Checks transitive closure: partners of a partner are partners.
pub fn check_transitivity(lattice: &Lattice) -> Result<(), QcaError> {
    for a in 0..lattice.len() {
        let own = lattice.partners(a);
        for &b in &own {
            for c in lattice.partners(b) {
                if c != a && !own.contains(&c) {
                    return violation(format!("cells {}-{} and {}-{} are entangled but {}-{} are not", a, b, b, c, a, c));
                }
            }
        }
    }
    Ok(())
}

/// Checks that no identity cell has entanglement partners.
pub fn check_identity_disentangled(lattice: &Lattice) -> Result<(), QcaError> {
    for (position, cell) in lattice.cells().iter().enumerate() {
        if cell.gate().is_identity() && !lattice.partners(position).is_empty() {
            return violation(format!("identity cell {} still has partners {:?}", position, lattice.partners(position)));
        }
    }
    Ok(())
}

/// Checks that the stored metric equals `(max partner count + 1) / 2`, or 0
/// without tracking.
pub fn check_entanglement_metric(lattice: &Lattice) -> Result<(), QcaError> {
    let expected = if lattice.tracks_entanglement() {
        let max = (0..lattice.len()).map(|p| lattice.partners(p).len()).max().unwrap_or(0);
        (max + 1) / 2
    } else {
        0
    };
    if lattice.entanglement() != expected {
        return violation(format!("entanglement metric is {} but partner sets imply {}", lattice.entanglement(), expected));
    }
    Ok(())
}

/// Runs every lattice check.
pub fn validate_lattice(lattice: &Lattice) -> Result<(), QcaError> {
    check_symmetry(lattice)?;
    check_transitivity(lattice)?;
    check_identity_disentangled(lattice)?;
    check_entanglement_metric(lattice)
}

/// Checks that every frame of `history` has the same length, and that this
/// length matches `expected_width` when given.
pub fn check_history_alignment(history: &History, expected_width: Option<usize>) -> Result<(), QcaError> {
    let width = expected_width.unwrap_or_else(|| history.width());
    for (t, frame) in history.iter().enumerate() {
        if frame.len() != width {
            return violation(format!("frame {} has length {} but expected {}", t, frame.len(), width));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::{presets, Automaton};

    #[test]
    fn test_fractal_evolution_keeps_invariants() -> Result<(), QcaError> {
        let automaton = Automaton::new(presets::fractal());
        let mut lattice = Lattice::builder(&automaton).parse("IIXZYII")?.entanglement(true).build();
        validate_lattice(&lattice)?;
        for _ in 0..8 {
            lattice.step()?;
            validate_lattice(&lattice)?;
        }
        Ok(())
    }

    #[test]
    fn test_alignment_detects_width_mismatch() -> Result<(), QcaError> {
        let automaton = Automaton::new(presets::spreading());
        let history = Lattice::builder(&automaton).parse(" X ")?.build().iterate(2)?;
        check_history_alignment(&history, None)?;
        check_history_alignment(&history, Some(7))?;
        assert!(check_history_alignment(&history, Some(8)).is_err());
        Ok(())
    }
}
