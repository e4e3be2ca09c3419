//! Clifford algebra over a signature, with precomputed product tables.

use std::fmt;
use std::sync::Arc;

use crate::blade;
use crate::error::AlgebraError;
use crate::multivector::Multivector;
use crate::sign::Sign;
use crate::signature::{Metric, Signature};
use crate::Float;

/// Number of basis vectors above which the product tables get expensive.
const LARGE_NDIM: u8 = 14;

/// Clifford algebra for a particular [`Signature`].
///
/// Constructing an algebra precomputes the result blade and sign of the
/// geometric product of every ordered pair of basis blades, which takes
/// `O(dimension² · ndim)` time and `O(dimension²)` space. Nothing checks that
/// the signature is small enough for that to fit in memory.
///
/// Cloning is cheap; clones share the same tables.
#[derive(Clone)]
pub struct Algebra(Arc<ProductTables>);

struct ProductTables {
    signature: Signature,
    /// Row-major `dimension × dimension` table of result blades.
    masks: Box<[usize]>,
    /// Row-major `dimension × dimension` table of product signs.
    signs: Box<[Option<Sign>]>,
}

impl fmt::Debug for Algebra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Algebra").field(&self.signature()).finish()
    }
}

impl fmt::Display for Algebra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.signature(), f)
    }
}

/// Algebras are equal iff they have the same signature, which implies they
/// have identical product tables.
impl PartialEq for Algebra {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.signature() == other.signature()
    }
}
impl Eq for Algebra {}

impl From<Signature> for Algebra {
    fn from(signature: Signature) -> Self {
        Self::new(signature)
    }
}

impl Algebra {
    /// Constructs the algebra for `signature` and precomputes its product
    /// tables.
    pub fn new(signature: Signature) -> Self {
        let ndim = signature.ndim();
        let dimension = signature.dimension();
        if ndim > LARGE_NDIM {
            log::warn!(
                "{signature} has {dimension} blades; \
                 product tables will have {} entries",
                dimension * dimension,
            );
        }
        log::debug!("precomputing product tables for {signature} ({dimension} blades)");

        let metrics: Vec<Metric> = signature.metrics().collect();

        let mut masks = Vec::with_capacity(dimension * dimension);
        let mut signs = Vec::with_capacity(dimension * dimension);
        for a in 0..dimension {
            for b in 0..dimension {
                masks.push(a ^ b);
                signs.push(sign_of_geometric_product(&metrics, a, b));
            }
        }

        Self(Arc::new(ProductTables {
            signature,
            masks: masks.into_boxed_slice(),
            signs: signs.into_boxed_slice(),
        }))
    }
    /// Constructs the algebra with `p` positive, `q` negative, and `r` null
    /// basis vectors.
    pub fn from_pqr(p: u8, q: u8, r: u8) -> Self {
        Self::new(Signature::new(p, q, r))
    }

    /// Returns the signature of the algebra.
    pub fn signature(&self) -> Signature {
        self.0.signature
    }
    /// Returns the number of basis vectors that square to +1.
    pub fn p(&self) -> u8 {
        self.0.signature.p
    }
    /// Returns the number of basis vectors that square to -1.
    pub fn q(&self) -> u8 {
        self.0.signature.q
    }
    /// Returns the number of basis vectors that square to 0.
    pub fn r(&self) -> u8 {
        self.0.signature.r
    }
    /// Returns the total number of basis vectors.
    pub fn ndim(&self) -> u8 {
        self.0.signature.ndim()
    }
    /// Returns the number of basis blades, which is the number of
    /// coefficients in every multivector of this algebra.
    pub fn dimension(&self) -> usize {
        self.0.signature.dimension()
    }
    /// Returns the metric of basis vector `i` (zero-indexed).
    pub fn metric(&self, i: u8) -> Metric {
        self.0.signature.metric(i)
    }

    /// Returns the blade resulting from the geometric product of blades `a`
    /// and `b`, which is always `a ^ b`.
    ///
    /// # Panics
    ///
    /// Panics if either blade is out of range.
    #[track_caller]
    pub fn mask(&self, a: usize, b: usize) -> usize {
        self.0.masks[self.table_index(a, b)]
    }
    /// Returns the sign of the geometric product of blades `a` and `b`, or
    /// `None` if the product is zero.
    ///
    /// # Panics
    ///
    /// Panics if either blade is out of range.
    #[track_caller]
    pub fn sign(&self, a: usize, b: usize) -> Option<Sign> {
        self.0.signs[self.table_index(a, b)]
    }
    /// Returns the sign of the geometric product of blades `a` and `b` as
    /// `1`, `-1`, or `0`.
    ///
    /// # Panics
    ///
    /// Panics if either blade is out of range.
    #[track_caller]
    pub fn sign_num(&self, a: usize, b: usize) -> i8 {
        Sign::num_or_zero(self.sign(a, b))
    }
    #[track_caller]
    fn table_index(&self, a: usize, b: usize) -> usize {
        let dimension = self.dimension();
        assert!(
            a < dimension && b < dimension,
            "blade pair ({a}, {b}) out of range for {self} with {dimension} blades",
        );
        a * dimension + b
    }

    /// Returns an iterator over all blade indices.
    pub fn blades(&self) -> std::ops::Range<usize> {
        0..self.dimension()
    }
    /// Returns an iterator over the blade indices of grade `k`.
    pub fn blades_of_grade(&self, k: u8) -> impl Iterator<Item = usize> {
        self.blades().filter(move |&b| blade::grade(b) == k)
    }
    /// Returns the name of a blade, such as `e13`.
    pub fn blade_name(&self, blade: usize) -> String {
        blade::blade_name(blade)
    }
    /// Returns the pseudoscalar blade, which contains every basis vector.
    pub fn pseudoscalar_blade(&self) -> usize {
        self.dimension() - 1
    }

    /// Constructs a multivector from a list of coefficients, one per blade.
    ///
    /// If fewer coefficients are supplied than the algebra has blades, the
    /// remaining ones are zero.
    pub fn multivector(
        &self,
        coefficients: impl Into<Vec<Float>>,
    ) -> Result<Multivector, AlgebraError> {
        Multivector::new(self, coefficients)
    }
    /// Constructs the zero multivector.
    pub fn zero(&self) -> Multivector {
        Multivector::zero(self)
    }
    /// Constructs a scalar multivector.
    pub fn scalar(&self, x: Float) -> Multivector {
        Multivector::scalar(self, x)
    }
    /// Constructs a multivector with a coefficient of 1 on `blade` and 0
    /// everywhere else.
    pub fn blade(&self, blade: usize) -> Result<Multivector, AlgebraError> {
        Multivector::unit_blade(self, blade)
    }
    /// Constructs the unit basis vector `e{i}` (1-based, so `e1` is blade 1).
    pub fn basis_vector(&self, i: u8) -> Result<Multivector, AlgebraError> {
        let ndim = self.ndim();
        if i == 0 || i > ndim {
            return Err(AlgebraError::BasisVectorOutOfRange { index: i, ndim });
        }
        self.blade(1 << (i - 1))
    }
    /// Constructs the unit pseudoscalar.
    pub fn pseudoscalar(&self) -> Multivector {
        let mut coefficients = vec![0.0; self.dimension()];
        coefficients[self.pseudoscalar_blade()] = 1.0;
        Multivector::from_full_coefficients(self, coefficients)
    }
}

/// Returns the sign of the geometric product of blades `a` and `b`, given the
/// metric of each basis vector, or `None` if the product is zero.
fn sign_of_geometric_product(metrics: &[Metric], a: usize, b: usize) -> Option<Sign> {
    let mut sign = Sign::Pos;

    // Each basis vector in `b` must move left past every basis vector in `a`
    // with a higher index. Each such swap negates the product.
    for i in 0..metrics.len() {
        if b & (1 << i) == 0 {
            continue;
        }
        for j in i + 1..metrics.len() {
            if a & (1 << j) != 0 {
                sign = -sign;
            }
        }
    }

    // Each basis vector common to both then contracts with itself.
    for (i, metric) in metrics.iter().enumerate() {
        if a & b & (1 << i) != 0 {
            sign *= metric.square()?;
        }
    }

    Some(sign)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_euclidean_2d_tables() {
        let alg = Algebra::from_pqr(2, 0, 0);
        assert_eq!(alg.ndim(), 2);
        assert_eq!(alg.dimension(), 4);

        assert_eq!(alg.mask(0b01, 0b01), 0);
        assert_eq!(alg.sign(0b01, 0b01), Some(Sign::Pos));

        assert_eq!(alg.mask(0b01, 0b10), 0b11);
        assert_eq!(alg.sign(0b01, 0b10), Some(Sign::Pos));

        assert_eq!(alg.mask(0b10, 0b01), 0b11);
        assert_eq!(alg.sign(0b10, 0b01), Some(Sign::Neg));

        // e12 e12 = e1 e2 e1 e2 = -e1 e1 e2 e2 = -1
        assert_eq!(alg.mask(0b11, 0b11), 0);
        assert_eq!(alg.sign_num(0b11, 0b11), -1);
    }

    #[test]
    fn test_negative_and_null_metrics() {
        let alg = Algebra::from_pqr(1, 1, 1);

        assert_eq!(alg.sign_num(0b001, 0b001), 1);
        assert_eq!(alg.sign_num(0b010, 0b010), -1);
        assert_eq!(alg.sign_num(0b100, 0b100), 0);

        // A shared null vector kills the product no matter what else is in it.
        assert_eq!(alg.sign(0b111, 0b100), None);
        assert_eq!(alg.sign(0b101, 0b110), None);
        assert_eq!(alg.mask(0b101, 0b110), 0b011);

        // Disjoint blades are unaffected by the null vector.
        assert_eq!(alg.sign(0b100, 0b001), Some(Sign::Neg));
        assert_eq!(alg.sign(0b001, 0b100), Some(Sign::Pos));
    }

    #[test]
    fn test_sign_matches_reordering() {
        // e2 e13 = e2 e1 e3 = -e1 e2 e3
        let alg = Algebra::from_pqr(3, 0, 0);
        assert_eq!(alg.sign(0b010, 0b101), Some(Sign::Neg));
        // e13 e2 = e1 e3 e2 = -e1 e2 e3
        assert_eq!(alg.sign(0b101, 0b010), Some(Sign::Neg));
        // e12 e13 = e1 e2 e1 e3 = -e2 e3
        assert_eq!(alg.mask(0b011, 0b101), 0b110);
        assert_eq!(alg.sign(0b011, 0b101), Some(Sign::Neg));
        // e123 e123 = -1
        assert_eq!(alg.sign(0b111, 0b111), Some(Sign::Neg));
    }

    #[test]
    fn test_scalar_row_and_column_are_identity() {
        let alg = Algebra::from_pqr(2, 1, 1);
        for b in alg.blades() {
            assert_eq!(alg.mask(0, b), b);
            assert_eq!(alg.mask(b, 0), b);
            assert_eq!(alg.sign(0, b), Some(Sign::Pos));
            assert_eq!(alg.sign(b, 0), Some(Sign::Pos));
        }
    }

    #[test]
    fn test_real_algebra() {
        let alg = Algebra::new(Signature::real());
        assert_eq!(alg.dimension(), 1);
        assert_eq!(alg.sign(0, 0), Some(Sign::Pos));
        assert_eq!(alg.pseudoscalar_blade(), 0);
    }

    #[test]
    fn test_algebra_equality() {
        let a = Algebra::from_pqr(3, 0, 0);
        assert_eq!(a, a.clone());
        assert_eq!(a, Algebra::new(Signature::euclidean(3)));
        assert_ne!(a, Algebra::from_pqr(0, 3, 0));
    }

    #[test]
    fn test_basis_vectors() {
        let alg = Algebra::from_pqr(3, 0, 0);
        assert_eq!(alg.basis_vector(3).map(|v| v[0b100]), Ok(1.0));
        assert_eq!(
            alg.basis_vector(4),
            Err(AlgebraError::BasisVectorOutOfRange { index: 4, ndim: 3 }),
        );
        assert!(alg.basis_vector(0).is_err());
        assert_eq!(alg.blades_of_grade(2).collect::<Vec<_>>(), [0b011, 0b101, 0b110]);
    }

    #[test]
    #[should_panic]
    fn test_table_out_of_range() {
        Algebra::from_pqr(2, 0, 0).mask(4, 0);
    }
}
