//! Error handling logic

use std::fmt;

/// Error types for automaton construction, lattice evolution and the
/// experiment layer.
///
/// The Pauli algebra itself is total, so every variant here signals either a
/// malformed input at the boundary of the crate or a broken internal
/// invariant. Nothing is recovered locally; errors propagate to the caller.
#[derive(Debug, Clone, PartialEq, Eq)] // Eq useful for testing error variants
pub enum QcaError {
    /// An automaton specification could not be accepted as given
    /// (unsorted or repeated offsets, unparsable JSON).
    InvalidSpecification {
        /// InvalidSpecification failure message
        message: String,
    },

    /// A character that does not name a Pauli symbol.
    UnknownSymbol {
        /// The offending character
        symbol: char,
    },

    /// A lattice position computed during a step fell outside the cell array.
    /// This is a defect in the stepping logic, never an expected condition.
    OutOfBounds {
        /// The computed position
        index: i64,
        /// Length of the cell array at that moment
        len: usize,
    },

    /// An entanglement or history invariant does not hold.
    InvariantViolation {
        /// InvariantViolation failure message
        message: String,
    },

    /// An experiment configuration is unusable.
    Config {
        /// Config failure message
        message: String,
    },
}

impl fmt::Display for QcaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QcaError::InvalidSpecification { message } => write!(f, "Invalid Specification: {}", message),
            QcaError::UnknownSymbol { symbol } => write!(f, "Unknown Pauli Symbol: {:?}", symbol),
            QcaError::OutOfBounds { index, len } => write!(f, "Lattice Index Out Of Bounds: {} (len {})", index, len),
            QcaError::InvariantViolation { message } => write!(f, "Invariant Violation: {}", message),
            QcaError::Config { message } => write!(f, "Configuration Error: {}", message),
        }
    }
}

// Implement the standard Error trait to allow for easy integration with Rust error handling.
impl std::error::Error for QcaError {}

impl From<serde_json::Error> for QcaError {
    fn from(err: serde_json::Error) -> Self {
        QcaError::Config { message: err.to_string() }
    }
}
