// src/experiment/mod.rs

//! Driver layer: evolving automata and comparing their entanglement growth.
//!
//! [`evolve`] produces the spacetime history of one automaton.
//! [`compare_entanglement`] runs several labelled automata from the same
//! initial configuration with entanglement tracking on, and returns one
//! series per automaton, ready for a plotting tool. Whole comparisons can be
//! described in JSON through [`ExperimentConfig`].

pub mod initial;

use crate::automaton::{presets, Automaton, AutomatonSpec};
use crate::core::{Gate, QcaError};
use crate::lattice::{History, Lattice, TracingObserver};
use serde::{Deserialize, Serialize};

/// Which automaton an experiment runs: a preset name or explicit lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AutomatonSource {
    /// One of [`presets::NAMES`].
    Preset(String),
    /// Explicit offset lists.
    Spec(AutomatonSpec),
}

impl AutomatonSource {
    /// Resolves to a concrete specification.
    pub fn resolve(&self) -> Result<AutomatonSpec, QcaError> {
        match self {
            AutomatonSource::Preset(name) => presets::by_name(name),
            AutomatonSource::Spec(spec) => Ok(spec.clone()),
        }
    }
}

impl From<AutomatonSpec> for AutomatonSource {
    fn from(spec: AutomatonSpec) -> Self {
        AutomatonSource::Spec(spec)
    }
}

/// One curve of an entanglement comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experiment {
    /// Legend label.
    pub label: String,
    /// Marker style handed through to the plotting tool (e.g. `"o"`, `"x"`).
    #[serde(default)]
    pub marker: String,
    /// The automaton to run.
    pub automaton: AutomatonSource,
}

impl Experiment {
    /// Creates an experiment.
    pub fn new(label: impl Into<String>, marker: impl Into<String>, automaton: impl Into<AutomatonSource>) -> Self {
        Self { label: label.into(), marker: marker.into(), automaton: automaton.into() }
    }
}

/// How the common initial configuration is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InitialConfig {
    /// A literal configuration such as `"IIXII"` or `"  X  "`.
    Literal(String),
    /// A pattern centered in `width` identity cells.
    Centered {
        /// Total number of cells.
        width: usize,
        /// Symbols placed in the middle.
        pattern: String,
    },
    /// A random non-identity region centered in `width` identity cells.
    Random {
        /// Total number of cells.
        width: usize,
        /// Size of the random region.
        support: usize,
        /// Seed of the generator.
        seed: u64,
    },
}

impl InitialConfig {
    /// Builds the gates of the configuration.
    pub fn gates(&self) -> Result<Vec<Gate>, QcaError> {
        match self {
            InitialConfig::Literal(text) => Ok(crate::core::pauli::parse_symbols(text)?.into_iter().map(Gate::new).collect()),
            InitialConfig::Centered { width, pattern } => initial::centered(*width, &crate::core::pauli::parse_symbols(pattern)?),
            InitialConfig::Random { width, support, seed } => initial::random_centered(*width, *support, *seed),
        }
    }
}

/// A complete entanglement comparison.
///
/// ```json
/// {
///   "initial": {"width": 9, "pattern": "X"},
///   "steps": 20,
///   "experiments": [
///     {"label": "fractal", "marker": "o", "automaton": "fractal"},
///     {"label": "custom", "marker": "x", "automaton": {"xtox": [-1, 1], "ztoz": [0]}}
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Configuration every experiment starts from.
    pub initial: InitialConfig,
    /// Number of steps per experiment.
    pub steps: usize,
    /// The automata to compare.
    pub experiments: Vec<Experiment>,
}

impl ExperimentConfig {
    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, QcaError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the configuration to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, QcaError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Entanglement metric over time for one labelled automaton.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntanglementSeries {
    /// Legend label.
    pub label: String,
    /// Marker style.
    pub marker: String,
    /// Metric after `t` steps, for `t` in `0..=steps`.
    pub values: Vec<usize>,
}

/// Evolves `initial` under `spec` for `steps` steps without entanglement
/// tracking and returns the aligned history.
pub fn evolve(spec: &AutomatonSpec, initial: Vec<Gate>, steps: usize) -> Result<History, QcaError> {
    let automaton = Automaton::new(spec.clone());
    let mut lattice = Lattice::new(initial, automaton.shared_ruleset());
    lattice.iterate_with(steps, &mut TracingObserver)
}

/// Runs every experiment of `config` with entanglement tracking and collects
/// one series per experiment, in the order given.
pub fn compare_entanglement(config: &ExperimentConfig) -> Result<Vec<EntanglementSeries>, QcaError> {
    if config.experiments.is_empty() {
        return Err(QcaError::Config { message: "no experiments to compare".to_string() });
    }
    let initial = config.initial.gates()?;

    config
        .experiments
        .iter()
        .map(|experiment| -> Result<EntanglementSeries, QcaError> {
            let span = tracing::info_span!("experiment", label = %experiment.label);
            let _guard = span.enter();

            let automaton = Automaton::new(experiment.automaton.resolve()?);
            let mut lattice = Lattice::with_entanglement(initial.clone(), automaton.shared_ruleset(), true);
            let history = lattice.iterate_with(config.steps, &mut TracingObserver)?;
            tracing::info!(steps = config.steps, width = history.width(), "experiment finished");

            Ok(EntanglementSeries {
                label: experiment.label.clone(),
                marker: experiment.marker.clone(),
                values: history.entanglement_series(),
            })
        })
        .collect()
}
