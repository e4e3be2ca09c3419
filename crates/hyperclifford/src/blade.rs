//! Basis blades, represented as bitmasks over basis vectors.
//!
//! Bit `i` of a blade index is set iff basis vector `e{i+1}` participates in
//! the blade. Blade `0` is the scalar.

use std::fmt;
use std::ops::Neg;

use crate::Float;
use crate::sign::Sign;

/// Returns the grade of a blade; i.e., the number of basis vectors in it.
pub const fn grade(blade: usize) -> u8 {
    blade.count_ones() as u8
}

/// Returns whether two blades have at least one basis vector in common.
pub const fn shares_basis_vector(a: usize, b: usize) -> bool {
    a & b != 0
}

/// Returns an iterator over the zero-indexed basis vectors present in a
/// blade, in ascending order.
pub fn basis_vectors(blade: usize) -> impl Clone + Iterator<Item = u8> {
    let mut remaining = blade;
    std::iter::from_fn(move || {
        (remaining != 0).then(|| {
            let i = remaining.trailing_zeros();
            remaining &= remaining - 1;
            i as u8
        })
    })
}

/// Returns the human-readable name of a blade: `1` for the scalar, otherwise
/// `e` followed by the 1-based numbers of its basis vectors.
///
/// ```
/// # use hyperclifford::blade::blade_name;
/// assert_eq!(blade_name(0), "1");
/// assert_eq!(blade_name(0b101), "e13");
/// ```
pub fn blade_name(blade: usize) -> String {
    if blade == 0 {
        return "1".to_owned();
    }
    let mut ret = "e".to_owned();
    for i in basis_vectors(blade) {
        ret += &(i as u32 + 1).to_string();
    }
    ret
}

/// Returns the sign of the reverse of a blade.
pub const fn sign_of_reverse(blade: usize) -> Sign {
    // The number of swaps required to reverse a sequence of length n is
    // n*(n-1)/2, which is odd exactly when n is 2 or 3 mod 4.
    match grade(blade) % 4 {
        0 | 1 => Sign::Pos,
        _ => Sign::Neg,
    }
}

/// Single term of a multivector: a coefficient on one basis blade.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Term {
    /// Coefficient.
    pub coef: Float,
    /// Blade index.
    pub blade: usize,
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}*{}", self.coef, blade_name(self.blade))
    }
}

impl Neg for Term {
    type Output = Term;

    fn neg(mut self) -> Self::Output {
        self.coef = -self.coef;
        self
    }
}

impl Term {
    /// Constructs a scalar term.
    pub const fn scalar(coef: Float) -> Self {
        Term { coef, blade: 0 }
    }
    /// Constructs a unit term.
    pub const fn unit(blade: usize) -> Self {
        Term { coef: 1.0, blade }
    }

    /// Returns the grade of the term.
    pub const fn grade(self) -> u8 {
        grade(self.blade)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_blade_grade() {
        assert_eq!(grade(0), 0);
        assert_eq!(grade(0b100), 1);
        assert_eq!(grade(0b110), 2);
        assert_eq!(grade(0b1111), 4);
        assert!(shares_basis_vector(0b011, 0b110));
        assert!(!shares_basis_vector(0b011, 0b100));
    }

    #[test]
    fn test_blade_names() {
        assert_eq!(blade_name(0b000), "1");
        assert_eq!(blade_name(0b001), "e1");
        assert_eq!(blade_name(0b010), "e2");
        assert_eq!(blade_name(0b011), "e12");
        assert_eq!(blade_name(0b111), "e123");
        assert_eq!(blade_name(0b10_0000_0001), "e110");
        assert_eq!(basis_vectors(0b1010).collect_vec(), [1, 3]);
    }

    #[test]
    fn test_sign_of_reverse() {
        let signs = (0..5).map(|k| sign_of_reverse((1 << k) - 1)).collect_vec();
        assert_eq!(
            signs,
            [Sign::Pos, Sign::Pos, Sign::Neg, Sign::Neg, Sign::Pos],
        );
    }

    #[test]
    fn test_term_display() {
        assert_eq!(Term::scalar(5.5).to_string(), "5.5000*1");
        assert_eq!((-Term::unit(0b110)).to_string(), "-1.0000*e23");
        assert_eq!(Term::unit(0b110).grade(), 2);
    }
}
