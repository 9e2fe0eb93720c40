//! Phase constants of the Pauli overlay table.

/// Phase factors used when two Pauli symbols are combined at one site.
pub mod qca_constants {
    use num_complex::Complex;

    /// Phase attached to every combination that does not involve an X/Z pair.
    pub const PHASE_ONE: Complex<f64> = Complex::new(1.0, 0.0);
    /// Phase attached to `X∘Z` and to `Z∘X`. The overlay is commutative,
    /// so both orders carry the same `+i`.
    pub const PHASE_XZ: Complex<f64> = Complex::new(0.0, 1.0);
}
