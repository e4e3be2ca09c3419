//! Sign of a product of basis blades.
//!
//! A product that vanishes (because a shared basis vector squares to zero) has
//! no sign at all, so product signs are stored as `Option<Sign>`.

use std::fmt;
use std::ops::{Mul, MulAssign, Neg};

use num_traits::Signed;

/// Positive or negative.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sign {
    /// Negative
    Neg = -1,
    /// Positive
    #[default]
    Pos = 1,
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sign::Pos => write!(f, "+"),
            Sign::Neg => write!(f, "-"),
        }
    }
}

impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }
}

impl<T: Signed> From<T> for Sign {
    fn from(value: T) -> Self {
        match value.signum().is_negative() {
            true => Sign::Neg,
            false => Sign::Pos,
        }
    }
}

impl Sign {
    /// Returns `1` or `-1` in any signed numeric type.
    pub fn to_num<T: Signed>(self) -> T {
        match self {
            Sign::Pos => T::one(),
            Sign::Neg => -T::one(),
        }
    }

    /// Returns `1`, `-1`, or `0` for a sign that may be absent.
    pub fn num_or_zero<T: Signed>(sign: Option<Self>) -> T {
        sign.map_or_else(T::zero, Sign::to_num)
    }

    /// Returns [`Sign::Neg`] for odd parity and [`Sign::Pos`] for even parity.
    pub fn from_parity(odd: bool) -> Self {
        match odd {
            true => Sign::Neg,
            false => Sign::Pos,
        }
    }
}

/// Implements `Mul<Sign>` for a type that implements `Neg`.
macro_rules! impl_mul_sign {
    (impl Mul<Sign> for $type:ty) => {
        impl Mul<Sign> for $type {
            type Output = Self;

            fn mul(self, rhs: Sign) -> Self {
                match rhs {
                    Sign::Pos => self,
                    Sign::Neg => -self,
                }
            }
        }
        impl MulAssign<Sign> for $type {
            fn mul_assign(&mut self, rhs: Sign) {
                *self = *self * rhs;
            }
        }
    };
}

impl_mul_sign!(impl Mul<Sign> for Sign);
impl_mul_sign!(impl Mul<Sign> for f32);
impl_mul_sign!(impl Mul<Sign> for f64);
impl_mul_sign!(impl Mul<Sign> for i8);
