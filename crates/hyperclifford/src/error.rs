//! Errors produced when building or combining multivectors.

use thiserror::Error;

use crate::Signature;

/// Error produced when building or combining multivectors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    /// More coefficients were supplied than the algebra has basis blades.
    #[error(
        "incompatible dimensionality: provided {provided} coefficients, \
         but the configured algebra supports only {dimension}"
    )]
    TooManyCoefficients {
        /// Number of coefficients supplied.
        provided: usize,
        /// Number of basis blades in the algebra.
        dimension: usize,
    },
    /// Blade index does not exist in the algebra.
    #[error("blade index {blade} is out of range for an algebra with {dimension} blades")]
    BladeOutOfRange {
        /// Requested blade index.
        blade: usize,
        /// Number of basis blades in the algebra.
        dimension: usize,
    },
    /// Basis vector number (1-based) does not exist in the algebra.
    #[error("basis vector e{index} does not exist in an algebra with {ndim} basis vectors")]
    BasisVectorOutOfRange {
        /// Requested basis vector number.
        index: u8,
        /// Number of basis vectors in the algebra.
        ndim: u8,
    },
    /// Operands were built in algebras with different signatures.
    #[error("cannot combine multivectors from {lhs} and {rhs}")]
    MismatchedAlgebras {
        /// Signature of the left operand.
        lhs: Signature,
        /// Signature of the right operand.
        rhs: Signature,
    },
}

/// Error produced when parsing a [`Signature`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseSignatureError {
    /// Integer parse error
    #[error("invalid basis vector count {0:?}: {1}")]
    ParseInt(String, std::num::ParseIntError),
    /// Wrong number of components
    #[error("expected 2 or 3 components (p, q[, r]), got {0}")]
    WrongComponentCount(usize),
    /// Unbalanced `Cl(...)` wrapper
    #[error("unclosed parenthesis in signature")]
    UnclosedParen,
}
