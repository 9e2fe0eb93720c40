// tests/lattice_tests.rs

use qca::automaton::presets;
use qca::lattice::Site;
use qca::validation::{check_history_alignment, validate_lattice};
use qca::{Automaton, AutomatonSpec, Gate, Lattice, Pauli, QcaError};

// Helper function to build a lattice from a textual configuration
fn lattice(spec: AutomatonSpec, config: &str, entanglement: bool) -> Result<Lattice, QcaError> {
    let automaton = Automaton::new(spec);
    Ok(Lattice::builder(&automaton).parse(config)?.entanglement(entanglement).build())
}

#[test]
fn test_static_lattice() -> Result<(), QcaError> {
    // Identity never spreads, whatever the automaton.
    let mut l = lattice(presets::fractal(), "III", false)?;
    let history = l.iterate(5)?;
    check_history_alignment(&history, Some(3))?;

    assert_eq!(history.len(), 6);
    for frame in &history {
        assert_eq!(frame.symbols(), vec![Pauli::I; 3]);
        assert_eq!(frame.entanglement(), 0);
    }
    assert_eq!(l.len(), 3);
    Ok(())
}

#[test]
fn test_single_spreading_operator() -> Result<(), QcaError> {
    let mut l = lattice(presets::spreading(), "IXI", false)?;
    let center: Site = 1;

    let (left, right) = l.step()?;
    assert_eq!((left, right), (1, 1));
    assert_eq!(l.len(), 5);

    for (position, cell) in l.cells().iter().enumerate() {
        let expected = if cell.site() == center - 1 || cell.site() == center + 1 { Pauli::X } else { Pauli::I };
        assert_eq!(cell.gate().pauli(), expected, "position {}", position);
    }
    Ok(())
}

#[test]
fn test_entanglement_clustering() -> Result<(), QcaError> {
    let mut l = lattice(presets::spreading(), "IXI", true)?;
    l.step()?;

    let left = l.position_of(0).ok_or(QcaError::OutOfBounds { index: 0, len: l.len() })?;
    let right = l.position_of(2).ok_or(QcaError::OutOfBounds { index: 2, len: l.len() })?;
    assert_eq!(l.clusters(), vec![vec![left, right]]);

    // Largest cluster has two sites: one partner each, (1 + 1) / 2 = 1.
    assert_eq!(l.entanglement(), 1);
    validate_lattice(&l)?;
    Ok(())
}

#[test]
fn test_entanglement_disabled_reports_zero() -> Result<(), QcaError> {
    let mut l = lattice(presets::fractal(), "IXZI", false)?;
    let history = l.iterate(6)?;
    assert!(history.entanglement_series().iter().all(|&e| e == 0));
    assert!(l.clusters().is_empty());
    Ok(())
}

#[test]
fn test_growth_is_monotonic_and_accounted() -> Result<(), QcaError> {
    let mut l = lattice(presets::fractal(), "IIXII", true)?;
    let mut expected_len = l.len();
    let mut leftmost = l.leftmost_site();

    for _ in 0..10 {
        let (left, right) = l.step()?;
        expected_len += left + right;
        leftmost -= left as Site;
        assert_eq!(l.len(), expected_len);
        assert_eq!(l.leftmost_site(), leftmost);
        validate_lattice(&l)?;
    }
    assert_eq!(l.steps(), 10);
    Ok(())
}

#[test]
fn test_history_is_aligned_on_sites() -> Result<(), QcaError> {
    let mut l = lattice(presets::spreading(), "X", false)?;
    let history = l.iterate(3)?;

    check_history_alignment(&history, None)?;
    assert_eq!(history.width(), l.len());
    assert_eq!(history.leftmost_site(), l.leftmost_site());

    // The initial X sits at site 0, three cells in from the final left edge.
    let first = &history.frames()[0];
    assert_eq!(first.symbols()[3], Pauli::X);
    assert_eq!(first.symbols().iter().filter(|p| !p.is_identity()).count(), 1);

    let last = history.final_frame().map(|f| f.symbols());
    assert_eq!(last, Some(l.symbols()));
    Ok(())
}

#[test]
fn test_hadamard_alternates_without_spreading() -> Result<(), QcaError> {
    let mut l = lattice(presets::hadamard(), "XZY", false)?;
    l.step()?;
    assert_eq!(l.symbols(), vec![Pauli::Z, Pauli::X, Pauli::Y]);
    l.step()?;
    assert_eq!(l.symbols(), vec![Pauli::X, Pauli::Z, Pauli::Y]);
    assert_eq!(l.len(), 3);
    Ok(())
}

#[test]
fn test_fractal_y_image_from_single_site() -> Result<(), QcaError> {
    let mut l = lattice(presets::fractal(), "Y", false)?;
    l.step()?;
    assert_eq!(l.symbols(), vec![Pauli::Z, Pauli::Y, Pauli::Z]);
    Ok(())
}

#[test]
fn test_coefficients_are_tracked() -> Result<(), QcaError> {
    let automaton = Automaton::new(presets::hadamard());
    let mut l = Lattice::builder(&automaton).gates(vec![Gate::new(Pauli::Y)]).build();
    l.step()?;
    let gate = l.gates()[0];
    assert_eq!(gate.pauli(), Pauli::Y);
    assert_eq!(gate.coeff(), num_complex::Complex::new(0.0, 1.0));
    Ok(())
}

#[test]
fn test_tracked_entanglement_stays_consistent_across_presets() -> Result<(), QcaError> {
    for name in presets::NAMES {
        let mut l = lattice(presets::by_name(name)?, "IXIZYI", true)?;
        for _ in 0..6 {
            l.step()?;
            validate_lattice(&l)?;
        }
    }
    Ok(())
}

#[test]
fn test_initial_identity_cells_start_unentangled() -> Result<(), QcaError> {
    let l = lattice(presets::spreading(), "IXIIX", true)?;
    assert_eq!(l.clusters(), vec![vec![1, 4]]);
    for position in [0, 2, 3] {
        assert!(l.partners(position).is_empty());
    }
    // One partner per support cell, not one per lattice cell.
    assert_eq!(l.entanglement(), 1);
    validate_lattice(&l)?;
    Ok(())
}
