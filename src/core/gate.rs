// src/core/gate.rs

use super::pauli::Pauli;
use num_complex::Complex;
use num_traits::One;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A Pauli symbol carrying a complex coefficient.
///
/// Gates are plain values: combining two of them produces a new gate and
/// never fails. The coefficient tracks the phases picked up while overlaying
/// symbols; it does not influence how an operator spreads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)] // Avoid Eq for floating-point complex numbers
pub struct Gate {
    pauli: Pauli,
    coeff: Complex<f64>,
}

impl Gate {
    /// Creates a gate with coefficient 1.
    pub fn new(pauli: Pauli) -> Self {
        Self { pauli, coeff: Complex::one() }
    }

    /// Creates a gate with an explicit coefficient.
    pub fn with_coeff(pauli: Pauli, coeff: Complex<f64>) -> Self {
        Self { pauli, coeff }
    }

    /// The identity gate with coefficient 1.
    pub fn identity() -> Self {
        Self::new(Pauli::I)
    }

    /// The symbol of this gate.
    pub fn pauli(&self) -> Pauli {
        self.pauli
    }

    /// The coefficient of this gate.
    pub fn coeff(&self) -> Complex<f64> {
        self.coeff
    }

    /// `true` if the symbol is the identity, whatever the coefficient.
    pub fn is_identity(&self) -> bool {
        self.pauli.is_identity()
    }

    /// Overlays `other` onto this gate at the same site.
    ///
    /// The symbol follows the Pauli overlay table and the coefficient is
    /// `self.coeff * other.coeff * phase`.
    pub fn combine(&self, other: &Gate) -> Gate {
        let (pauli, phase) = self.pauli.combine(other.pauli);
        Gate { pauli, coeff: self.coeff * other.coeff * phase }
    }
}

impl Default for Gate {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<Pauli> for Gate {
    fn from(pauli: Pauli) -> Self {
        Gate::new(pauli)
    }
}

impl fmt::Display for Gate {
    /// `{}` prints the diagram symbol (a blank for the identity);
    /// `{:#}` prefixes it with the coefficient.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "({}){}", self.coeff, self.pauli.display_symbol())
        } else {
            write!(f, "{}", self.pauli.display_symbol())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;

    #[test]
    fn test_combine_multiplies_coefficients() {
        let a = Gate::with_coeff(Pauli::X, Complex::new(2.0, 0.0));
        let b = Gate::with_coeff(Pauli::Y, Complex::new(0.0, 3.0));
        let c = a.combine(&b);
        assert_eq!(c.pauli(), Pauli::Z);
        assert_eq!(c.coeff(), Complex::new(0.0, 6.0));
    }

    #[test]
    fn test_combine_xz_picks_up_phase() {
        let xz = Gate::new(Pauli::X).combine(&Gate::new(Pauli::Z));
        let zx = Gate::new(Pauli::Z).combine(&Gate::new(Pauli::X));
        assert_eq!(xz, Gate::with_coeff(Pauli::Y, Complex::i()));
        assert_eq!(xz, zx);
    }

    #[test]
    fn test_self_combination_keeps_coefficient_product() {
        let y = Gate::with_coeff(Pauli::Y, Complex::i());
        let yy = y.combine(&y);
        assert!(yy.is_identity());
        assert_eq!(yy.coeff(), Complex::new(-1.0, 0.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Gate::identity()), " ");
        assert_eq!(format!("{}", Gate::new(Pauli::Z)), "Z");
        let zero = Gate::with_coeff(Pauli::X, Complex::zero());
        assert_eq!(format!("{:#}", zero), "(0+0i)X");
    }
}
