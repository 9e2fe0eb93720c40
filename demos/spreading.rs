// demos/spreading.rs
//
// Prints the spacetime diagram of a single operator evolving under a preset.
//
//   cargo run --example spreading -- fractal X 16
//   RUST_LOG=qca=debug cargo run --example spreading -- spreading X 4

use qca::automaton::presets;
use qca::core::pauli::parse_symbols;
use qca::experiment::initial;
use qca::{evolve, render_history, QcaError, RenderOptions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<(), QcaError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let mut args = std::env::args().skip(1);
    let preset = args.next().unwrap_or_else(|| "fractal".to_string());
    let pattern = args.next().unwrap_or_else(|| "X".to_string());
    let steps = match args.next() {
        Some(s) => s.parse::<usize>().map_err(|e| QcaError::Config { message: format!("invalid step count `{}`: {}", s, e) })?,
        None => 16,
    };

    let spec = presets::by_name(&preset)?;
    println!("{} {}", preset, spec);

    let start = initial::centered(pattern.len(), &parse_symbols(&pattern)?)?;
    let history = evolve(&spec, start, steps)?;

    let options = RenderOptions { time_labels: true, ..RenderOptions::default() };
    print!("{}", render_history(&history, &options));
    Ok(())
}
