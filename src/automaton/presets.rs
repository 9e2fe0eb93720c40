// src/automaton/presets.rs

//! A small catalogue of named automata.
//!
//! These are the automata used throughout the demos and tests. All of
//! them are written in the `[[xtox, ztox], [xtoz, ztoz]]` layout of
//! [`AutomatonSpec::from_matrix`].

use super::AutomatonSpec;
use crate::core::QcaError;

/// Every operator stays where it is.
pub fn trivial() -> AutomatonSpec {
    spec([[vec![0], vec![]], [vec![], vec![0]]])
}

/// All four lists empty: every symbol collapses to the fixed-point rule.
pub fn degenerate() -> AutomatonSpec {
    spec([[vec![], vec![]], [vec![], vec![]]])
}

/// Moves every operator one site to the right.
pub fn shift_right() -> AutomatonSpec {
    spec([[vec![1], vec![]], [vec![], vec![1]]])
}

/// An `X` splits into its two neighbours; `Z` does not evolve.
pub fn spreading() -> AutomatonSpec {
    spec([[vec![-1, 1], vec![]], [vec![], vec![]]])
}

/// Swaps `X` and `Z` on every site (a global Hadamard). Period two, no spreading.
pub fn hadamard() -> AutomatonSpec {
    spec([[vec![], vec![0]], [vec![0], vec![]]])
}

/// `X -> Z`, `Z -> Z X Z`: the self-similar "fractal" Clifford QCA.
pub fn fractal() -> AutomatonSpec {
    spec([[vec![], vec![0]], [vec![0], vec![-1, 1]]])
}

/// `X -> Z X Z`, `Z -> X`: the mirror of [`fractal`] under `X <-> Z`.
pub fn fractal_dual() -> AutomatonSpec {
    spec([[vec![0], vec![0]], [vec![-1, 1], vec![]]])
}

/// Names accepted by [`by_name`].
pub const NAMES: [&str; 7] = ["trivial", "degenerate", "shift_right", "spreading", "hadamard", "fractal", "fractal_dual"];

/// Looks a preset up by name.
///
/// # Errors
/// `QcaError::Config` if no preset carries that name.
pub fn by_name(name: &str) -> Result<AutomatonSpec, QcaError> {
    match name {
        "trivial" => Ok(trivial()),
        "degenerate" => Ok(degenerate()),
        "shift_right" => Ok(shift_right()),
        "spreading" => Ok(spreading()),
        "hadamard" => Ok(hadamard()),
        "fractal" => Ok(fractal()),
        "fractal_dual" => Ok(fractal_dual()),
        other => Err(QcaError::Config { message: format!("unknown automaton preset `{}`", other) }),
    }
}

// Preset lists are literals known to be ascending.
fn spec(matrix: [[Vec<i64>; 2]; 2]) -> AutomatonSpec {
    match AutomatonSpec::from_matrix(matrix) {
        Ok(spec) => spec,
        Err(e) => unreachable!("preset specification rejected: {}", e),
    }
}
