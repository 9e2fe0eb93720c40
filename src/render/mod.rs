// src/render/mod.rs

//! Text rendering of evolutions.
//!
//! A history renders as a spacetime diagram: one row per time step, one
//! column per site, identity cells left blank so the light-cone of the
//! initial operator stands out.

use crate::experiment::EntanglementSeries;
use crate::lattice::{Frame, History};
use std::fmt::Write as _;

/// How to lay out a spacetime diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Placed between neighbouring cells.
    pub separator: String,
    /// Prefix each non-identity symbol with its coefficient.
    pub coefficients: bool,
    /// Prefix each row with its time step, e.g. `t=3: `.
    pub time_labels: bool,
    /// Append each frame's entanglement metric to its row.
    pub entanglement: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { separator: " ".to_string(), coefficients: false, time_labels: false, entanglement: false }
    }
}

impl RenderOptions {
    /// Tab-separated cells, the layout spreadsheet tools read directly.
    pub fn tabbed() -> Self {
        Self { separator: "\t".to_string(), ..Self::default() }
    }
}

/// Renders one frame as a single line (no trailing newline).
pub fn render_frame(frame: &Frame, options: &RenderOptions) -> String {
    let mut line = String::new();
    for (i, gate) in frame.cells().iter().enumerate() {
        if i > 0 {
            line.push_str(&options.separator);
        }
        if options.coefficients && !gate.is_identity() {
            // Writing to a String cannot fail.
            let _ = write!(line, "{:#}", gate);
        } else {
            line.push_str(gate.pauli().display_symbol());
        }
    }
    line
}

/// Renders every frame of `history`, one line each.
pub fn render_history(history: &History, options: &RenderOptions) -> String {
    let label_width = format!("t={}: ", history.len().saturating_sub(1)).len();
    let mut out = String::new();
    for (t, frame) in history.iter().enumerate() {
        if options.time_labels {
            let _ = write!(out, "{:<width$}", format!("t={}: ", t), width = label_width);
        }
        out.push_str(&render_frame(frame, options));
        if options.entanglement {
            let _ = write!(out, "  | E={}", frame.entanglement());
        }
        out.push('\n');
    }
    out
}

/// Renders labelled entanglement series as a table: a header row of labels
/// followed by one row per time step. Shorter series leave their column blank.
pub fn render_series_table(series: &[EntanglementSeries]) -> String {
    let mut out = String::from("t");
    for s in series {
        let _ = write!(out, "\t{}", s.label);
    }
    out.push('\n');

    let rows = series.iter().map(|s| s.values.len()).max().unwrap_or(0);
    for t in 0..rows {
        let _ = write!(out, "{}", t);
        for s in series {
            match s.values.get(t) {
                Some(v) => {
                    let _ = write!(out, "\t{}", v);
                }
                None => out.push('\t'),
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::{presets, Automaton};
    use crate::core::QcaError;
    use crate::lattice::Lattice;

    #[test]
    fn test_spacetime_diagram_of_spreading_operator() -> Result<(), QcaError> {
        let automaton = Automaton::new(presets::spreading());
        let history = Lattice::builder(&automaton).parse("X")?.build().iterate(2)?;
        let text = render_history(&history, &RenderOptions::default());
        assert_eq!(text, "    X    \n  X   X  \nX       X\n");
        Ok(())
    }

    #[test]
    fn test_labels_and_metric() -> Result<(), QcaError> {
        let automaton = Automaton::new(presets::trivial());
        let history = Lattice::builder(&automaton).parse("XZ")?.entanglement(true).build().iterate(1)?;
        let options = RenderOptions { separator: "|".to_string(), time_labels: true, entanglement: true, ..RenderOptions::default() };
        assert_eq!(render_history(&history, &options), "t=0: X|Z  | E=1\nt=1: X|Z  | E=1\n");
        Ok(())
    }

    #[test]
    fn test_tabbed_layout_with_coefficients() -> Result<(), QcaError> {
        let automaton = Automaton::new(presets::hadamard());
        let history = Lattice::builder(&automaton).parse("XIY")?.build().iterate(1)?;
        let options = RenderOptions { coefficients: true, ..RenderOptions::tabbed() };
        // Y picks up the X∘Z phase; identities stay blank.
        assert_eq!(
            render_history(&history, &options),
            "(1+0i)X\t \t(1+0i)Y\n(1+0i)Z\t \t(0+1i)Y\n"
        );
        Ok(())
    }

    #[test]
    fn test_series_table() {
        let series = vec![
            EntanglementSeries { label: "a".to_string(), marker: "o".to_string(), values: vec![0, 1, 2] },
            EntanglementSeries { label: "b".to_string(), marker: "x".to_string(), values: vec![0, 1] },
        ];
        assert_eq!(render_series_table(&series), "t\ta\tb\n0\t0\t0\n1\t1\t1\n2\t2\t\n");
    }
}
