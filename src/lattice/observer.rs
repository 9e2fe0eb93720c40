// src/lattice/observer.rs

//! Hooks for watching a lattice evolve.
//!
//! [`Lattice::step_with`](super::Lattice::step_with) reports what it does to
//! a [`StepObserver`]. Every method has an empty default body, so an observer
//! only implements what it cares about. [`NoopObserver`] is what plain
//! `step()` uses; [`TracingObserver`] forwards everything to `tracing`.

use crate::core::Gate;

/// Emitted once the extensions of a step are known, before any cell changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepStarted {
    /// Number of steps this lattice had completed before this one.
    pub step: usize,
    /// Length of the lattice before growth.
    pub len: usize,
    /// Cells about to be prepended.
    pub left_extension: usize,
    /// Cells about to be appended.
    pub right_extension: usize,
}

/// Emitted for every gate a site's rule overlays onto a target cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contribution {
    /// Position (after growth) of the originating site.
    pub source: usize,
    /// Position (after growth) of the cell receiving the gate.
    pub target: usize,
    /// The gate taken from the rule.
    pub gate: Gate,
    /// The target's gate after combining.
    pub result: Gate,
}

/// Emitted after identity cells were disentangled and the metric updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepFinished {
    /// Number of completed steps, this one included.
    pub step: usize,
    /// Length of the lattice after growth.
    pub len: usize,
    /// Number of cells holding a non-identity gate.
    pub support: usize,
    /// Entanglement metric after the step.
    pub entanglement: usize,
}

/// Receives events from a stepping lattice.
pub trait StepObserver {
    /// A step is about to mutate the lattice.
    fn step_started(&mut self, _event: &StepStarted) {}

    /// A rule gate was overlaid onto a cell.
    fn contribution(&mut self, _event: &Contribution) {}

    /// A step completed.
    fn step_finished(&mut self, _event: &StepFinished) {}
}

/// Ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl StepObserver for NoopObserver {}

/// Forwards step events to `tracing`: step boundaries at `debug`, individual
/// contributions at `trace`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl StepObserver for TracingObserver {
    fn step_started(&mut self, event: &StepStarted) {
        tracing::debug!(
            step = event.step,
            len = event.len,
            left_extension = event.left_extension,
            right_extension = event.right_extension,
            "lattice step started"
        );
    }

    fn contribution(&mut self, event: &Contribution) {
        tracing::trace!(
            source = event.source,
            target = event.target,
            gate = %event.gate.pauli(),
            result = %event.result.pauli(),
            coeff = %event.result.coeff(),
            "overlaid rule gate"
        );
    }

    fn step_finished(&mut self, event: &StepFinished) {
        tracing::debug!(
            step = event.step,
            len = event.len,
            support = event.support,
            entanglement = event.entanglement,
            "lattice step finished"
        );
    }
}

impl<O: StepObserver + ?Sized> StepObserver for &mut O {
    fn step_started(&mut self, event: &StepStarted) {
        (**self).step_started(event);
    }

    fn contribution(&mut self, event: &Contribution) {
        (**self).contribution(event);
    }

    fn step_finished(&mut self, event: &StepFinished) {
        (**self).step_finished(event);
    }
}
