// src/automaton/mod.rs

//! Clifford automaton specifications and the rulesets derived from them.
//!
//! An automaton is described by how a single `X` and a single `Z` operator
//! look one time step later: four offset lists saying where the image of
//! each operator has `X`-type and `Z`-type support. The image of `Y` and
//! the trivial image of the identity follow from those two, so the whole
//! local update rule is derived once and then shared by every lattice that
//! evolves under it.

mod ruleset;
pub mod presets;

pub use ruleset::{Rule, Ruleset};

use crate::core::QcaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Largest distance, in sites, an offset may lie from its originating site.
///
/// Bounds the width of every derived rule (at most `2 * MAX_REACH + 1`
/// cells) and how far a lattice can grow on either side in one step.
pub const MAX_REACH: i64 = 4096;

/// The raw, unvalidated offset lists as they appear in configuration files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct OffsetLists {
    #[serde(default)]
    xtox: Vec<i64>,
    #[serde(default)]
    xtoz: Vec<i64>,
    #[serde(default)]
    ztox: Vec<i64>,
    #[serde(default)]
    ztoz: Vec<i64>,
}

/// Compact transformation specification of a one-dimensional Clifford QCA.
///
/// * `xtox` / `xtoz`: offsets, relative to the originating site, where the
///   image of an `X` operator has `X` / `Z` support.
/// * `ztox` / `ztoz`: the same for the image of a `Z` operator.
///
/// Every list must be strictly ascending and every offset must lie within
/// [`MAX_REACH`] of the originating site. Empty lists are allowed; an
/// operator whose two lists are both empty does not spread at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "OffsetLists", into = "OffsetLists")]
pub struct AutomatonSpec {
    lists: OffsetLists,
}

impl AutomatonSpec {
    /// Creates a specification from the four offset lists.
    ///
    /// # Errors
    /// Returns `QcaError::InvalidSpecification` if a list is not strictly
    /// ascending (unsorted or containing a repeated offset).
    pub fn new(xtox: Vec<i64>, xtoz: Vec<i64>, ztox: Vec<i64>, ztoz: Vec<i64>) -> Result<Self, QcaError> {
        Self::try_from(OffsetLists { xtox, xtoz, ztox, ztoz })
    }

    /// Creates a specification from the 2x2 matrix layout
    /// `[[xtox, ztox], [xtoz, ztoz]]`: rows select the output type (X, Z),
    /// columns the input operator (X, Z).
    pub fn from_matrix(matrix: [[Vec<i64>; 2]; 2]) -> Result<Self, QcaError> {
        let [[xtox, ztox], [xtoz, ztoz]] = matrix;
        Self::new(xtox, xtoz, ztox, ztoz)
    }

    /// Parses a specification from JSON such as
    /// `{"xtox": [-1, 1], "ztoz": [0]}`. Missing lists default to empty.
    pub fn from_json(json: &str) -> Result<Self, QcaError> {
        serde_json::from_str(json).map_err(|e| QcaError::InvalidSpecification { message: e.to_string() })
    }

    /// Offsets of `X` support in the image of `X`.
    pub fn xtox(&self) -> &[i64] {
        &self.lists.xtox
    }

    /// Offsets of `Z` support in the image of `X`.
    pub fn xtoz(&self) -> &[i64] {
        &self.lists.xtoz
    }

    /// Offsets of `X` support in the image of `Z`.
    pub fn ztox(&self) -> &[i64] {
        &self.lists.ztox
    }

    /// Offsets of `Z` support in the image of `Z`.
    pub fn ztoz(&self) -> &[i64] {
        &self.lists.ztoz
    }
}

fn check_ascending(name: &str, offsets: &[i64]) -> Result<(), QcaError> {
    match offsets.windows(2).find(|w| w[0] >= w[1]) {
        Some(w) => Err(QcaError::InvalidSpecification {
            message: format!("offsets in `{}` must be strictly ascending, found {} before {}", name, w[0], w[1]),
        }),
        None => Ok(()),
    }
}

fn check_reach(name: &str, offsets: &[i64]) -> Result<(), QcaError> {
    match offsets.iter().find(|o| !(-MAX_REACH..=MAX_REACH).contains(*o)) {
        Some(o) => Err(QcaError::InvalidSpecification {
            message: format!("offset {} in `{}` lies outside the supported reach of {} sites", o, name, MAX_REACH),
        }),
        None => Ok(()),
    }
}

impl TryFrom<OffsetLists> for AutomatonSpec {
    type Error = QcaError;

    fn try_from(lists: OffsetLists) -> Result<Self, Self::Error> {
        check_ascending("xtox", &lists.xtox)?;
        check_reach("xtox", &lists.xtox)?;
        check_ascending("xtoz", &lists.xtoz)?;
        check_reach("xtoz", &lists.xtoz)?;
        check_ascending("ztox", &lists.ztox)?;
        check_reach("ztox", &lists.ztox)?;
        check_ascending("ztoz", &lists.ztoz)?;
        check_reach("ztoz", &lists.ztoz)?;
        Ok(Self { lists })
    }
}

impl From<AutomatonSpec> for OffsetLists {
    fn from(spec: AutomatonSpec) -> Self {
        spec.lists
    }
}

impl fmt::Display for AutomatonSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[[{:?}, {:?}], [{:?}, {:?}]]",
            self.lists.xtox, self.lists.ztox, self.lists.xtoz, self.lists.ztoz
        )
    }
}

/// A Clifford automaton: its specification together with the ruleset
/// derived from it at construction time.
///
/// The ruleset is immutable and shared through an `Arc`, so any number of
/// lattices (on any thread) can evolve under the same automaton.
#[derive(Debug, Clone)]
pub struct Automaton {
    spec: AutomatonSpec,
    ruleset: Arc<Ruleset>,
}

impl Automaton {
    /// Derives the ruleset for `spec`.
    pub fn new(spec: AutomatonSpec) -> Self {
        let ruleset = Arc::new(Ruleset::derive(&spec));
        tracing::debug!(spec = %spec, ruleset = %ruleset, "derived automaton ruleset");
        Self { spec, ruleset }
    }

    /// The specification this automaton was built from.
    pub fn spec(&self) -> &AutomatonSpec {
        &self.spec
    }

    /// The derived ruleset.
    pub fn ruleset(&self) -> &Ruleset {
        &self.ruleset
    }

    /// A shared handle to the derived ruleset, as held by lattices.
    pub fn shared_ruleset(&self) -> Arc<Ruleset> {
        Arc::clone(&self.ruleset)
    }
}

impl From<AutomatonSpec> for Automaton {
    fn from(spec: AutomatonSpec) -> Self {
        Automaton::new(spec)
    }
}

impl fmt::Display for Automaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.spec)
    }
}
