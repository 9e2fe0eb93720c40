// src/lattice/mod.rs

//! Evolves a one-dimensional line of Pauli operators under an automaton's
//! ruleset.
//!
//! A [`Lattice`] owns its cells and grows on either side whenever a step's
//! light-cone would leave the current array; cells are never removed. With
//! entanglement tracking enabled it also maintains which sites are
//! entangled with which, and derives a scalar entanglement metric from that
//! relation after every step.

pub mod entanglement;
mod history;
pub mod observer;

pub use entanglement::{Clusters, Site};
pub use history::{Frame, History, HistoryBuilder};
pub use observer::{Contribution, NoopObserver, StepFinished, StepObserver, StepStarted, TracingObserver};

use crate::automaton::{Automaton, Ruleset};
use crate::core::{Gate, Pauli, QcaError};
use std::fmt;
use std::sync::Arc;

/// One lattice site: its gate and its fixed coordinate.
///
/// The site's entanglement partners live in the owning lattice's
/// [`Clusters`] table; see [`Lattice::partners`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    gate: Gate,
    site: Site,
}

impl Cell {
    /// The gate currently held by the cell.
    pub fn gate(&self) -> Gate {
        self.gate
    }

    /// The cell's coordinate, unchanged by later growth.
    pub fn site(&self) -> Site {
        self.site
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.gate)
    }
}

/// A growing line of cells evolving under a shared [`Ruleset`].
#[derive(Debug, Clone)]
pub struct Lattice {
    cells: Vec<Cell>,
    ruleset: Arc<Ruleset>,
    tracks_entanglement: bool,
    clusters: Clusters,
    entanglement: usize,
    steps: usize,
}

impl Lattice {
    /// Creates a lattice without entanglement tracking.
    ///
    /// Position `p` of `gates` becomes site `p`.
    pub fn new(gates: Vec<Gate>, ruleset: Arc<Ruleset>) -> Self {
        Self::with_entanglement(gates, ruleset, false)
    }

    /// Creates a lattice, optionally tracking entanglement.
    ///
    /// When tracking, the non-identity sites of the initial configuration
    /// start out as one cluster: the configuration is a single joint
    /// operator. Identity sites start with no partners.
    pub fn with_entanglement(gates: Vec<Gate>, ruleset: Arc<Ruleset>, tracks_entanglement: bool) -> Self {
        let cells: Vec<Cell> = gates
            .into_iter()
            .enumerate()
            .map(|(p, gate)| Cell { gate, site: p as Site })
            .collect();

        let mut clusters = Clusters::new();
        if tracks_entanglement {
            let mut support = cells.iter().filter(|c| !c.gate.is_identity()).map(|c| c.site);
            if let Some(first) = support.next() {
                for site in support {
                    clusters.entangle(first, site);
                }
            }
        }

        let mut lattice = Self { cells, ruleset, tracks_entanglement, clusters, entanglement: 0, steps: 0 };
        lattice.entanglement = lattice.compute_entanglement();
        lattice
    }

    /// Starts a [`LatticeBuilder`] for `automaton`.
    pub fn builder(automaton: &Automaton) -> LatticeBuilder {
        LatticeBuilder::new(automaton.shared_ruleset())
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// `true` if the lattice holds no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cells, leftmost first.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The gate of every cell, leftmost first.
    pub fn gates(&self) -> Vec<Gate> {
        self.cells.iter().map(Cell::gate).collect()
    }

    /// The symbol of every cell, leftmost first.
    pub fn symbols(&self) -> Vec<Pauli> {
        self.cells.iter().map(|c| c.gate.pauli()).collect()
    }

    /// The ruleset this lattice evolves under.
    pub fn ruleset(&self) -> &Ruleset {
        &self.ruleset
    }

    /// Whether entanglement is being tracked.
    pub fn tracks_entanglement(&self) -> bool {
        self.tracks_entanglement
    }

    /// The entanglement metric: `(max partner count + 1) / 2` when tracking,
    /// otherwise 0.
    pub fn entanglement(&self) -> usize {
        self.entanglement
    }

    /// Number of steps taken so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Coordinate of the leftmost cell. Decreases whenever the lattice grows
    /// to the left.
    pub fn leftmost_site(&self) -> Site {
        self.cells.first().map_or(0, |c| c.site)
    }

    /// Coordinate of the cell at `position`.
    pub fn site_of(&self, position: usize) -> Option<Site> {
        self.cells.get(position).map(|c| c.site)
    }

    /// Position of the cell with coordinate `site`.
    pub fn position_of(&self, site: Site) -> Option<usize> {
        let offset = site - self.leftmost_site();
        (offset >= 0 && (offset as usize) < self.cells.len()).then_some(offset as usize)
    }

    /// Positions of the entanglement partners of the cell at `position`, ascending.
    pub fn partners(&self, position: usize) -> Vec<usize> {
        match self.site_of(position) {
            Some(site) => self
                .clusters
                .partners(site)
                .into_iter()
                .filter_map(|s| self.position_of(s))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Every entanglement cluster as ascending positions.
    pub fn clusters(&self) -> Vec<Vec<usize>> {
        self.clusters
            .clusters()
            .into_iter()
            .map(|sites| sites.into_iter().filter_map(|s| self.position_of(s)).collect())
            .collect()
    }

    /// The current state as a history frame.
    pub fn frame(&self) -> Frame {
        Frame::new(self.gates(), self.entanglement)
    }

    fn compute_entanglement(&self) -> usize {
        if !self.tracks_entanglement {
            return 0;
        }
        (self.clusters.max_partner_count() + 1) / 2
    }

    /// Cells to add on each side so every site's light-cone fits.
    ///
    /// Takes the widest reach among the rules of the symbols present. For a
    /// lattice whose edge cells hold its widest-reaching symbols this is the
    /// reach of the edge cells' rules.
    fn extensions(&self, current: &[Gate]) -> (usize, usize) {
        let mut present = [false; 4];
        for gate in current {
            present[gate.pauli().index()] = true;
        }
        Pauli::ALL
            .iter()
            .filter(|p| present[p.index()])
            .map(|p| self.ruleset.rule(*p))
            .fold((0, 0), |(l, r), rule| (l.max(rule.left_reach()), r.max(rule.right_reach())))
    }

    /// Advances the lattice by one time step.
    ///
    /// Returns how many cells were prepended and appended. An empty lattice
    /// stays empty and returns `(0, 0)`.
    ///
    /// # Errors
    /// `QcaError::OutOfBounds` if a rule would write outside the grown array,
    /// which indicates a defect in the extension logic. The check runs before
    /// any cell changes, so the lattice is left exactly as it was.
    pub fn step(&mut self) -> Result<(usize, usize), QcaError> {
        self.step_with(&mut NoopObserver)
    }

    /// [`Lattice::step`], reporting progress to `observer`.
    pub fn step_with<O: StepObserver + ?Sized>(&mut self, observer: &mut O) -> Result<(usize, usize), QcaError> {
        if self.cells.is_empty() {
            return Ok((0, 0));
        }

        let current = self.gates();
        let (left, right) = self.extensions(&current);
        self.check_light_cones(&current, left, right)?;
        observer.step_started(&StepStarted {
            step: self.steps,
            len: current.len(),
            left_extension: left,
            right_extension: right,
        });

        for cell in &mut self.cells {
            cell.gate = Gate::identity();
        }
        self.grow(left, right);

        let len = self.cells.len();
        for (i, gate) in current.iter().enumerate() {
            let source = i + left;
            let source_site = self.cells[source].site;
            let rule = self.ruleset.rule(gate.pauli());
            for (k, out) in rule.gates().iter().enumerate() {
                let target = (source as i64 + rule.offset_of(k)) as usize;
                let cell = &mut self.cells[target];
                cell.gate = cell.gate.combine(out);
                let target_site = cell.site;
                let result = cell.gate;

                if self.tracks_entanglement {
                    self.clusters.entangle(source_site, target_site);
                }
                observer.contribution(&Contribution { source, target, gate: *out, result });
            }
        }

        if self.tracks_entanglement {
            for cell in self.cells.iter().filter(|c| c.gate.is_identity()) {
                self.clusters.release(cell.site);
            }
        }
        self.entanglement = self.compute_entanglement();
        self.steps += 1;

        observer.step_finished(&StepFinished {
            step: self.steps,
            len,
            support: self.cells.iter().filter(|c| !c.gate.is_identity()).count(),
            entanglement: self.entanglement,
        });
        Ok((left, right))
    }

    /// Verifies that every rule applied to `current` lands inside the array
    /// grown by `left` and `right` cells.
    fn check_light_cones(&self, current: &[Gate], left: usize, right: usize) -> Result<(), QcaError> {
        let len = current.len() + left + right;
        for (i, gate) in current.iter().enumerate() {
            let rule = self.ruleset.rule(gate.pauli());
            for k in 0..rule.len() {
                let index = (i + left) as i64 + rule.offset_of(k);
                if index < 0 || index as usize >= len {
                    return Err(QcaError::OutOfBounds { index, len });
                }
            }
        }
        Ok(())
    }

    /// Prepends `left` and appends `right` identity cells.
    ///
    /// When tracking, new cells on each side join the cluster of the former
    /// edge cell on that side.
    fn grow(&mut self, left: usize, right: usize) {
        let (Some(first), Some(last)) = (self.cells.first().map(|c| c.site), self.cells.last().map(|c| c.site)) else {
            return;
        };

        let new_left = (1..=left as Site).rev().map(|d| Cell { gate: Gate::identity(), site: first - d });
        let new_right = (1..=right as Site).map(|d| Cell { gate: Gate::identity(), site: last + d });

        let mut cells = Vec::with_capacity(left + self.cells.len() + right);
        cells.extend(new_left);
        cells.append(&mut self.cells);
        cells.extend(new_right);
        self.cells = cells;

        if self.tracks_entanglement {
            for d in 1..=left as Site {
                self.clusters.entangle(first, first - d);
            }
            for d in 1..=right as Site {
                self.clusters.entangle(last, last + d);
            }
        }
    }

    /// Runs `n` steps and returns `n + 1` aligned frames, the first being
    /// the state before any step.
    pub fn iterate(&mut self, n: usize) -> Result<History, QcaError> {
        self.iterate_with(n, &mut NoopObserver)
    }

    /// [`Lattice::iterate`], reporting every step to `observer`.
    pub fn iterate_with<O: StepObserver + ?Sized>(&mut self, n: usize, observer: &mut O) -> Result<History, QcaError> {
        let mut builder = HistoryBuilder::new();
        builder.record(self.leftmost_site(), self.frame());
        for _ in 0..n {
            self.step_with(observer)?;
            builder.record(self.leftmost_site(), self.frame());
        }
        Ok(builder.finish())
    }
}

impl fmt::Display for Lattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.frame())
    }
}

//-------------------------------------------------------------------------
// Lattice Builder
//-------------------------------------------------------------------------

/// A helper struct for configuring a [`Lattice`] using method chaining.
#[derive(Debug, Clone)]
pub struct LatticeBuilder {
    ruleset: Arc<Ruleset>,
    gates: Vec<Gate>,
    tracks_entanglement: bool,
}

impl LatticeBuilder {
    /// Starts an empty, untracked configuration.
    pub fn new(ruleset: Arc<Ruleset>) -> Self {
        Self { ruleset, gates: Vec::new(), tracks_entanglement: false }
    }

    /// Replaces the initial gates.
    pub fn gates(mut self, gates: Vec<Gate>) -> Self {
        self.gates = gates;
        self
    }

    /// Replaces the initial gates with coefficient-1 gates of `symbols`.
    pub fn symbols(mut self, symbols: &[Pauli]) -> Self {
        self.gates = symbols.iter().copied().map(Gate::new).collect();
        self
    }

    /// Parses the initial configuration from a string such as `"  X  "`.
    pub fn parse(self, config: &str) -> Result<Self, QcaError> {
        let symbols = crate::core::pauli::parse_symbols(config)?;
        Ok(self.symbols(&symbols))
    }

    /// Enables or disables entanglement tracking.
    pub fn entanglement(mut self, enabled: bool) -> Self {
        self.tracks_entanglement = enabled;
        self
    }

    /// Finalizes the configuration.
    pub fn build(self) -> Lattice {
        Lattice::with_entanglement(self.gates, self.ruleset, self.tracks_entanglement)
    }
}
