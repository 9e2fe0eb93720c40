// src/lib.rs

//! `qca` - one-dimensional Clifford quantum cellular automata
//!
//! This library derives the local update rule of a Clifford QCA from a
//! compact offset specification and evolves a growing line of Pauli
//! operators under it, tracking how the operator's support spreads and how
//! an entanglement proxy grows over time.

pub mod core;
pub mod automaton;
pub mod lattice;
pub mod validation;
pub mod render;
pub mod experiment;

// Re-export the most common types for easier top-level use
pub use core::{Gate, Pauli, QcaError};
pub use automaton::{Automaton, AutomatonSpec, Rule, Ruleset};
pub use lattice::{Cell, Frame, History, Lattice, LatticeBuilder, StepObserver, TracingObserver};
pub use experiment::{compare_entanglement, evolve, EntanglementSeries, Experiment, ExperimentConfig};
pub use render::{render_history, RenderOptions};
pub use validation::validate_lattice;

// Example 1: A single spreading operator
// An X that splits onto both neighbours every step draws a growing light-cone.
/// ```
/// use qca::{Automaton, AutomatonSpec, Lattice, Pauli, QcaError};
///
/// # fn main() -> Result<(), QcaError> {
/// // X -> X_{-1} X_{+1}; Z does not evolve
/// let spec = AutomatonSpec::new(vec![-1, 1], vec![], vec![], vec![])?;
/// let automaton = Automaton::new(spec);
///
/// let mut lattice = Lattice::builder(&automaton).parse("IXI")?.build();
/// let (left, right) = lattice.step()?;
///
/// assert_eq!((left, right), (1, 1));
/// assert_eq!(
///     lattice.symbols(),
///     vec![Pauli::I, Pauli::X, Pauli::I, Pauli::X, Pauli::I]
/// );
/// # Ok(())
/// # }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Entanglement growth of the fractal automaton
// Every frame of the history shares one coordinate system, and the
// entanglement series can be handed straight to a plotting tool.
/// ```
/// use qca::automaton::presets;
/// use qca::{Automaton, Lattice, QcaError};
///
/// # fn main() -> Result<(), QcaError> {
/// let automaton = Automaton::new(presets::fractal());
/// let mut lattice = Lattice::builder(&automaton)
///     .parse("IIIXIII")?
///     .entanglement(true)
///     .build();
///
/// let history = lattice.iterate(4)?;
/// assert_eq!(history.len(), 5);
/// assert!(history.iter().all(|frame| frame.len() == lattice.len()));
///
/// let series = history.entanglement_series();
/// println!("E(t) = {:?}", series);
/// # Ok(())
/// # }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
