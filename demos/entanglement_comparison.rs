// demos/entanglement_comparison.rs
//
// Compares entanglement growth of several automata from one initial
// configuration and prints a tab-separated table, one column per automaton.
//
//   cargo run --example entanglement_comparison
//   cargo run --example entanglement_comparison -- comparison.json

use qca::experiment::{AutomatonSource, InitialConfig};
use qca::render::render_series_table;
use qca::{compare_entanglement, AutomatonSpec, Experiment, ExperimentConfig, QcaError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_config() -> Result<ExperimentConfig, QcaError> {
    Ok(ExperimentConfig {
        initial: InitialConfig::Random { width: 21, support: 5, seed: 7 },
        steps: 20,
        experiments: vec![
            Experiment::new("fractal", "o", AutomatonSource::Preset("fractal".to_string())),
            Experiment::new("fractal dual", "x", AutomatonSource::Preset("fractal_dual".to_string())),
            Experiment::new("glider", "s", AutomatonSpec::new(vec![1], vec![0], vec![0], vec![])?),
            Experiment::new("shift", "^", AutomatonSource::Preset("shift_right".to_string())),
        ],
    })
}

fn main() -> Result<(), QcaError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .map_err(|e| QcaError::Config { message: format!("cannot read `{}`: {}", path, e) })?;
            ExperimentConfig::from_json(&json)?
        }
        None => default_config()?,
    };

    let series = compare_entanglement(&config)?;
    print!("{}", render_series_table(&series));
    Ok(())
}
