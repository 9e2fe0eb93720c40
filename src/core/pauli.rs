// src/core/pauli.rs

use super::constants::qca_constants::{PHASE_ONE, PHASE_XZ};
use super::error::QcaError;
use num_complex::Complex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four single-qubit Pauli symbols, without a coefficient.
///
/// The symbols form a group under [`Pauli::combine`]: `I` is the unit,
/// every symbol is its own inverse, and `X`, `Y`, `Z` combine cyclically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Pauli {
    /// The identity operator. An identity site carries no operator support.
    #[default]
    I,
    /// Bit flip.
    X,
    /// Combined bit and phase flip.
    Y,
    /// Phase flip.
    Z,
}

/// Overlay table indexed by `[a.index()][b.index()]`, holding the resulting
/// symbol and the phase multiplied into the coefficient.
const COMBINE_TABLE: [[(Pauli, Complex<f64>); 4]; 4] = [
    // I ∘ _
    [(Pauli::I, PHASE_ONE), (Pauli::X, PHASE_ONE), (Pauli::Y, PHASE_ONE), (Pauli::Z, PHASE_ONE)],
    // X ∘ _
    [(Pauli::X, PHASE_ONE), (Pauli::I, PHASE_ONE), (Pauli::Z, PHASE_ONE), (Pauli::Y, PHASE_XZ)],
    // Y ∘ _
    [(Pauli::Y, PHASE_ONE), (Pauli::Z, PHASE_ONE), (Pauli::I, PHASE_ONE), (Pauli::X, PHASE_ONE)],
    // Z ∘ _
    [(Pauli::Z, PHASE_ONE), (Pauli::Y, PHASE_XZ), (Pauli::X, PHASE_ONE), (Pauli::I, PHASE_ONE)],
];

impl Pauli {
    /// All four symbols in table order.
    pub const ALL: [Pauli; 4] = [Pauli::I, Pauli::X, Pauli::Y, Pauli::Z];

    /// Position of this symbol in [`Pauli::ALL`] and in the overlay table.
    pub const fn index(self) -> usize {
        match self {
            Pauli::I => 0,
            Pauli::X => 1,
            Pauli::Y => 2,
            Pauli::Z => 3,
        }
    }

    /// Overlays two symbols at one site.
    ///
    /// Returns the resulting symbol and the phase factor the caller must
    /// multiply into the product of the two coefficients. The table is
    /// symmetric, so `a.combine(b) == b.combine(a)`.
    pub fn combine(self, other: Pauli) -> (Pauli, Complex<f64>) {
        COMBINE_TABLE[self.index()][other.index()]
    }

    /// `true` only for [`Pauli::I`].
    pub fn is_identity(self) -> bool {
        self == Pauli::I
    }

    /// Single-letter name of the symbol (`'I'`, `'X'`, `'Y'`, `'Z'`).
    pub fn letter(self) -> char {
        match self {
            Pauli::I => 'I',
            Pauli::X => 'X',
            Pauli::Y => 'Y',
            Pauli::Z => 'Z',
        }
    }

    /// Symbol used in spacetime diagrams. The identity renders as a blank so
    /// that the operator's support stands out.
    pub fn display_symbol(self) -> &'static str {
        match self {
            Pauli::I => " ",
            Pauli::X => "X",
            Pauli::Y => "Y",
            Pauli::Z => "Z",
        }
    }
}

impl TryFrom<char> for Pauli {
    type Error = QcaError;

    /// Accepts `I`, `X`, `Y`, `Z` in either case, plus a blank for the identity
    /// (the form used by rendered diagrams).
    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            'I' | 'i' | ' ' => Ok(Pauli::I),
            'X' | 'x' => Ok(Pauli::X),
            'Y' | 'y' => Ok(Pauli::Y),
            'Z' | 'z' => Ok(Pauli::Z),
            other => Err(QcaError::UnknownSymbol { symbol: other }),
        }
    }
}

impl FromStr for Pauli {
    type Err = QcaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Pauli::try_from(c),
            (Some(c), Some(_)) => Err(QcaError::UnknownSymbol { symbol: c }),
            (None, _) => Err(QcaError::UnknownSymbol { symbol: '\0' }),
        }
    }
}

impl fmt::Display for Pauli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Parses a string such as `"IIXII"` or `"  X  "` into a sequence of symbols.
pub fn parse_symbols(s: &str) -> Result<Vec<Pauli>, QcaError> {
    s.chars().map(Pauli::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_symmetric() {
        for a in Pauli::ALL {
            for b in Pauli::ALL {
                assert_eq!(a.combine(b), b.combine(a), "{}∘{} not symmetric", a, b);
            }
        }
    }

    #[test]
    fn test_identity_is_unit_and_symbols_self_inverse() {
        for g in Pauli::ALL {
            assert_eq!(Pauli::I.combine(g), (g, PHASE_ONE));
            assert_eq!(g.combine(g).0, Pauli::I);
        }
    }

    #[test]
    fn test_cyclic_products() {
        assert_eq!(Pauli::X.combine(Pauli::Y), (Pauli::Z, PHASE_ONE));
        assert_eq!(Pauli::Y.combine(Pauli::Z), (Pauli::X, PHASE_ONE));
        assert_eq!(Pauli::Z.combine(Pauli::X), (Pauli::Y, PHASE_XZ));
        assert_eq!(Pauli::X.combine(Pauli::Z), (Pauli::Y, PHASE_XZ));
    }

    #[test]
    fn test_parse_symbols() -> Result<(), QcaError> {
        assert_eq!(parse_symbols(" xI z")?, vec![Pauli::I, Pauli::X, Pauli::I, Pauli::I, Pauli::Z]);
        assert_eq!(parse_symbols("XQ"), Err(QcaError::UnknownSymbol { symbol: 'Q' }));
        assert_eq!("Y".parse::<Pauli>()?, Pauli::Y);
        assert!("XY".parse::<Pauli>().is_err());
        Ok(())
    }
}
