//! Clifford algebra multivectors over an arbitrary signature.
//!
//! An [`Algebra`] is built once from a [`Signature`] `(p, q, r)`: `p` basis
//! vectors square to +1, `q` square to -1, and `r` square to 0. Building it
//! precomputes the result blade and sign of the geometric product for every
//! pair of basis blades. A [`Multivector`] is a dense list of coefficients, one
//! per basis blade, tied to the algebra it was built in.
//!
//! ```
//! use hyperclifford::prelude::*;
//!
//! let algebra = Algebra::new(Signature::euclidean(2));
//! let e1 = algebra.basis_vector(1)?;
//! let e2 = algebra.basis_vector(2)?;
//! assert_eq!((&e1 * &e2)[0b11], 1.0);
//! assert_eq!((&e2 * &e1)[0b11], -1.0);
//! assert_eq!((&e1 ^ &e2).to_string(), "1.0000*e12");
//! # Ok::<(), hyperclifford::AlgebraError>(())
//! ```

pub use approx;

/// Floating-point type used for coefficients.
pub type Float = f64;

/// Absolute tolerance used by `==` on multivectors.
pub const EQ_TOLERANCE: Float = 1e-10;

/// Asserts that both arguments are approximately equal, using
/// [`EQ_TOLERANCE`].
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {
        $crate::approx::assert_abs_diff_eq!($a, $b, epsilon = $crate::EQ_TOLERANCE)
    };
}

#[macro_use]
mod impl_macros;

pub mod algebra;
pub mod blade;
pub mod error;
pub mod multivector;
pub mod products;
pub mod sign;
pub mod signature;


/// Structs, traits, and constants.
pub mod prelude {
    pub use crate::algebra::Algebra;
    pub use crate::blade::{self, Term};
    pub use crate::error::{AlgebraError, ParseSignatureError};
    pub use crate::multivector::Multivector;
    pub use crate::products::Product;
    pub use crate::sign::Sign;
    pub use crate::signature::{Metric, Signature};
    pub use crate::{EQ_TOLERANCE, Float};
}
pub use prelude::*;
