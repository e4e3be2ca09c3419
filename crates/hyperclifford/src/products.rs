//! Geometric, wedge (outer), and inner products of multivectors.
//!
//! All three products share one double loop over pairs of nonzero terms. For
//! each pair of blades `(i, j)`, the term `sign(i, j) * a[i] * b[j]` is
//! accumulated into blade `i ^ j`; the products differ only in which pairs
//! they keep.

use std::fmt;
use std::ops::{BitOr, BitXor, Mul};

use crate::blade;
use crate::error::AlgebraError;
use crate::multivector::{Multivector, unwrap_or_panic};
use crate::Algebra;

/// Bilinear product of multivectors.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Product {
    /// Geometric product `a * b`; keeps every pair of blades.
    Geometric,
    /// Wedge (outer) product `a ^ b`; keeps pairs of blades with no basis
    /// vector in common.
    Wedge,
    /// Inner product `a | b`; keeps pairs of blades whose product has grade
    /// `|grade(i) - grade(j)|`.
    ///
    /// This is neither the left nor the right contraction, and it is not
    /// associative on mixed grades.
    Inner,
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Product::Geometric => write!(f, "*"),
            Product::Wedge => write!(f, "^"),
            Product::Inner => write!(f, "|"),
        }
    }
}

impl Product {
    /// All products.
    pub const ALL: [Product; 3] = [Product::Geometric, Product::Wedge, Product::Inner];

    /// Returns whether the pair of blades `(i, j)` contributes to the product.
    pub fn keeps(self, algebra: &Algebra, i: usize, j: usize) -> bool {
        match self {
            Product::Geometric => true,
            Product::Wedge => !blade::shares_basis_vector(i, j),
            Product::Inner => {
                let target_grade = blade::grade(i).abs_diff(blade::grade(j));
                blade::grade(algebra.mask(i, j)) == target_grade
            }
        }
    }

    /// Computes the product of two multivectors from the same algebra.
    fn apply(self, lhs: &Multivector, rhs: &Multivector) -> Multivector {
        let algebra = lhs.algebra();
        let mut coefficients = vec![0.0; algebra.dimension()];
        let mut pairs = 0_usize;

        for (i, &a) in lhs.coefficients().iter().enumerate() {
            if a == 0.0 {
                continue;
            }
            for (j, &b) in rhs.coefficients().iter().enumerate() {
                if b == 0.0 || !self.keeps(algebra, i, j) {
                    continue;
                }
                pairs += 1;
                if let Some(sign) = algebra.sign(i, j) {
                    coefficients[algebra.mask(i, j)] += a * b * sign;
                }
            }
        }

        log::trace!("{self} product in {algebra} accumulated {pairs} term pairs");
        Multivector::from_full_coefficients(algebra, coefficients)
    }
}

impl Multivector {
    /// Returns `product` of `self` and `rhs`, or an error if they belong to
    /// algebras with different signatures.
    pub fn try_product(&self, product: Product, rhs: &Self) -> Result<Self, AlgebraError> {
        self.check_same_algebra(rhs)?;
        Ok(product.apply(self, rhs))
    }
}

/// Geometric product of two multivectors.
impl Mul for &Multivector {
    type Output = Multivector;

    #[track_caller]
    fn mul(self, rhs: Self) -> Self::Output {
        unwrap_or_panic(self.try_product(Product::Geometric, rhs))
    }
}
/// Wedge (outer) product of two multivectors.
impl BitXor for &Multivector {
    type Output = Multivector;

    #[track_caller]
    fn bitxor(self, rhs: Self) -> Self::Output {
        unwrap_or_panic(self.try_product(Product::Wedge, rhs))
    }
}
/// Inner product of two multivectors.
impl BitOr for &Multivector {
    type Output = Multivector;

    #[track_caller]
    fn bitor(self, rhs: Self) -> Self::Output {
        unwrap_or_panic(self.try_product(Product::Inner, rhs))
    }
}
impl_forward_bin_ops_to_ref! {
    impl Mul for Multivector { fn mul() }
    impl BitXor for Multivector { fn bitxor() }
    impl BitOr for Multivector { fn bitor() }
}
