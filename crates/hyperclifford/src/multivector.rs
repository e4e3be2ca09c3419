//! Dense multivectors.

use std::fmt;
use std::ops::{Add, Index, Mul, Neg, Sub};

use itertools::Itertools;

use crate::algebra::Algebra;
use crate::blade::{self, Term};
use crate::error::AlgebraError;
use crate::{EQ_TOLERANCE, Float};

/// Linear combination of every basis blade of an algebra.
///
/// Coefficients are stored densely, indexed by blade. A multivector is
/// immutable; every operation returns a new one. Combining multivectors from
/// algebras with different signatures is an error (see
/// [`AlgebraError::MismatchedAlgebras`]); the operators panic in that case.
#[derive(Clone)]
pub struct Multivector {
    algebra: Algebra,
    /// Coefficients of the terms of the multivector, indexed by blade. Always
    /// has length `algebra.dimension()`.
    coefficients: Box<[Float]>,
}

impl fmt::Debug for Multivector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ret = f.debug_struct("Multivector");
        ret.field("algebra", &self.algebra.signature());
        for term in self.nonzero_terms() {
            ret.field(&blade::blade_name(term.blade), &term.coef);
        }
        ret.finish()
    }
}

/// Displays every exactly-nonzero term with four decimal places, joined by
/// `" + "`, or `0` if there are none.
impl fmt::Display for Multivector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut terms = self.nonzero_terms().peekable();
        if terms.peek().is_none() {
            return write!(f, "0");
        }
        write!(f, "{}", terms.format(" + "))
    }
}

/// Compares coefficients with an absolute tolerance of [`EQ_TOLERANCE`].
///
/// Multivectors from algebras with different signatures are never equal.
impl PartialEq for Multivector {
    fn eq(&self, other: &Self) -> bool {
        approx::AbsDiffEq::abs_diff_eq(self, other, EQ_TOLERANCE)
    }
}

impl approx::AbsDiffEq for Multivector {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        EQ_TOLERANCE
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.algebra == other.algebra
            && std::iter::zip(&*self.coefficients, &*other.coefficients)
                .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl Index<usize> for Multivector {
    type Output = Float;

    #[track_caller]
    fn index(&self, blade: usize) -> &Self::Output {
        &self.coefficients[blade]
    }
}

impl Multivector {
    /// Constructs a multivector from a list of coefficients, one per blade.
    ///
    /// If fewer coefficients are supplied than `algebra` has blades, the
    /// remaining ones are zero. Supplying more is an error.
    pub fn new(
        algebra: &Algebra,
        coefficients: impl Into<Vec<Float>>,
    ) -> Result<Self, AlgebraError> {
        let mut coefficients = coefficients.into();
        let dimension = algebra.dimension();
        if coefficients.len() > dimension {
            return Err(AlgebraError::TooManyCoefficients {
                provided: coefficients.len(),
                dimension,
            });
        }
        coefficients.resize(dimension, 0.0);
        Ok(Self::from_full_coefficients(algebra, coefficients))
    }
    /// Constructs a multivector from exactly `algebra.dimension()`
    /// coefficients.
    pub(crate) fn from_full_coefficients(algebra: &Algebra, coefficients: Vec<Float>) -> Self {
        debug_assert_eq!(coefficients.len(), algebra.dimension());
        Self {
            algebra: algebra.clone(),
            coefficients: coefficients.into_boxed_slice(),
        }
    }
    /// Constructs a multivector by evaluating `f` on every blade index.
    pub(crate) fn from_fn(algebra: &Algebra, f: impl FnMut(usize) -> Float) -> Self {
        Self::from_full_coefficients(algebra, algebra.blades().map(f).collect())
    }

    /// Constructs the zero multivector.
    pub fn zero(algebra: &Algebra) -> Self {
        Self::from_full_coefficients(algebra, vec![0.0; algebra.dimension()])
    }
    /// Constructs a scalar multivector.
    pub fn scalar(algebra: &Algebra, x: Float) -> Self {
        Self::from_fn(algebra, |blade| if blade == 0 { x } else { 0.0 })
    }
    /// Constructs a multivector with a coefficient of 1 on `blade` and 0
    /// everywhere else.
    pub fn unit_blade(algebra: &Algebra, blade: usize) -> Result<Self, AlgebraError> {
        let dimension = algebra.dimension();
        if blade >= dimension {
            return Err(AlgebraError::BladeOutOfRange { blade, dimension });
        }
        Ok(Self::from_fn(algebra, |b| if b == blade { 1.0 } else { 0.0 }))
    }
    /// Constructs a multivector from a sum of terms. Terms on the same blade
    /// accumulate.
    pub fn from_terms(
        algebra: &Algebra,
        terms: impl IntoIterator<Item = Term>,
    ) -> Result<Self, AlgebraError> {
        let dimension = algebra.dimension();
        let mut coefficients = vec![0.0; dimension];
        for Term { coef, blade } in terms {
            *coefficients
                .get_mut(blade)
                .ok_or(AlgebraError::BladeOutOfRange { blade, dimension })? += coef;
        }
        Ok(Self::from_full_coefficients(algebra, coefficients))
    }

    /// Returns the algebra that the multivector belongs to.
    pub fn algebra(&self) -> &Algebra {
        &self.algebra
    }
    /// Returns the coefficients of the multivector, indexed by blade.
    pub fn coefficients(&self) -> &[Float] {
        &self.coefficients
    }
    /// Returns the coefficient of `blade`, or `None` if it is out of range.
    pub fn get(&self, blade: usize) -> Option<Float> {
        self.coefficients.get(blade).copied()
    }
    /// Returns the scalar (grade 0) coefficient.
    pub fn scalar_part(&self) -> Float {
        self.coefficients[0]
    }

    /// Returns an iterator over every term, including zero ones.
    pub fn terms(&self) -> impl '_ + Clone + Iterator<Item = Term> {
        self.coefficients
            .iter()
            .enumerate()
            .map(|(blade, &coef)| Term { coef, blade })
    }
    /// Returns an iterator over the terms whose coefficients are not exactly
    /// zero.
    pub fn nonzero_terms(&self) -> impl '_ + Clone + Iterator<Item = Term> {
        self.terms().filter(|term| term.coef != 0.0)
    }

    /// Returns the part of the multivector with grade `k`.
    #[must_use]
    pub fn grade_projection(&self, k: u8) -> Self {
        Self::from_fn(&self.algebra, |blade| {
            if blade::grade(blade) == k {
                self.coefficients[blade]
            } else {
                0.0
            }
        })
    }
    /// Returns the reverse of the multivector, which reverses the order of
    /// the basis vectors in every blade.
    #[must_use]
    pub fn reverse(&self) -> Self {
        Self::from_fn(&self.algebra, |blade| {
            self.coefficients[blade] * blade::sign_of_reverse(blade)
        })
    }

    /// Returns whether every coefficient other than the scalar one is exactly
    /// zero.
    pub fn is_scalar(&self) -> bool {
        self.coefficients[1..].iter().all(|&x| x == 0.0)
    }
    /// Returns whether the multivector is zero.
    ///
    /// If `tolerance` is `0.0`, every coefficient must be exactly zero.
    /// Otherwise every coefficient must have an absolute value of at most
    /// `tolerance`.
    pub fn is_zero(&self, tolerance: Float) -> bool {
        if tolerance == 0.0 {
            self.coefficients.iter().all(|&x| x == 0.0)
        } else {
            self.coefficients.iter().all(|x| x.abs() <= tolerance)
        }
    }

    /// Returns an error if `self` and `other` belong to algebras with
    /// different signatures.
    pub(crate) fn check_same_algebra(&self, other: &Self) -> Result<(), AlgebraError> {
        if self.algebra == other.algebra {
            Ok(())
        } else {
            Err(AlgebraError::MismatchedAlgebras {
                lhs: self.algebra.signature(),
                rhs: other.algebra.signature(),
            })
        }
    }
    fn zip_with(
        &self,
        other: &Self,
        mut f: impl FnMut(Float, Float) -> Float,
    ) -> Result<Self, AlgebraError> {
        self.check_same_algebra(other)?;
        Ok(Self::from_fn(&self.algebra, |blade| {
            f(self.coefficients[blade], other.coefficients[blade])
        }))
    }
    /// Returns the sum of two multivectors, or an error if they belong to
    /// different algebras.
    pub fn try_add(&self, other: &Self) -> Result<Self, AlgebraError> {
        self.zip_with(other, |a, b| a + b)
    }
    /// Returns the difference of two multivectors, or an error if they belong
    /// to different algebras.
    pub fn try_sub(&self, other: &Self) -> Result<Self, AlgebraError> {
        self.zip_with(other, |a, b| a - b)
    }
}

/// Panics with the message of `e`.
#[track_caller]
pub(crate) fn unwrap_or_panic<T>(result: Result<T, AlgebraError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("{e}"),
    }
}

impl Neg for Multivector {
    type Output = Multivector;

    fn neg(mut self) -> Self::Output {
        for coef in self.coefficients.as_mut() {
            *coef = -*coef;
        }
        self
    }
}
impl Neg for &Multivector {
    type Output = Multivector;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

/// Sum of two multivectors.
impl Add for &Multivector {
    type Output = Multivector;

    #[track_caller]
    fn add(self, rhs: Self) -> Self::Output {
        unwrap_or_panic(self.try_add(rhs))
    }
}
/// Difference of two multivectors.
impl Sub for &Multivector {
    type Output = Multivector;

    #[track_caller]
    fn sub(self, rhs: Self) -> Self::Output {
        unwrap_or_panic(self.try_sub(rhs))
    }
}
impl_forward_bin_ops_to_ref! {
    impl Add for Multivector { fn add() }
    impl Sub for Multivector { fn sub() }
}

/// Scaling a multivector by a number.
impl Mul<Float> for Multivector {
    type Output = Multivector;

    fn mul(mut self, rhs: Float) -> Self::Output {
        for coef in self.coefficients.as_mut() {
            *coef *= rhs;
        }
        self
    }
}
impl Mul<Float> for &Multivector {
    type Output = Multivector;

    fn mul(self, rhs: Float) -> Self::Output {
        self.clone() * rhs
    }
}
impl_commuted_scalar_mul!(impl Mul<Multivector> for Float);
