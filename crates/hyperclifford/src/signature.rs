//! Metric signature of a Clifford algebra.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseSignatureError;
use crate::sign::Sign;

/// Number of positive, negative, and null basis vectors in an algebra.
///
/// Basis vectors are ordered positive first, then negative, then null. Basis
/// vector `i` (zero-indexed) corresponds to bit `i` of a blade index.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Signature {
    /// Number of basis vectors that square to +1.
    pub p: u8,
    /// Number of basis vectors that square to -1.
    pub q: u8,
    /// Number of basis vectors that square to 0.
    pub r: u8,
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { p, q, r } = self;
        write!(f, "Cl({p},{q},{r})")
    }
}

/// Parses `"p,q,r"`, `"p q r"`, or `"Cl(p,q,r)"`. The `r` component may be
/// omitted, in which case it is zero.
impl FromStr for Signature {
    type Err = ParseSignatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut s = s.trim();
        if let Some(rest) = s.strip_prefix("Cl(").or_else(|| s.strip_prefix("cl(")) {
            s = rest
                .strip_suffix(')')
                .ok_or(ParseSignatureError::UnclosedParen)?;
        }

        let counts: Vec<u8> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse()
                    .map_err(|e| ParseSignatureError::ParseInt(part.to_owned(), e))
            })
            .collect::<Result<_, _>>()?;

        match counts[..] {
            [p, q] => Ok(Self::new(p, q, 0)),
            [p, q, r] => Ok(Self::new(p, q, r)),
            _ => Err(ParseSignatureError::WrongComponentCount(counts.len())),
        }
    }
}

impl Signature {
    /// Constructs a signature from its positive, negative, and null counts.
    pub const fn new(p: u8, q: u8, r: u8) -> Self {
        Self { p, q, r }
    }

    /// Real numbers: no basis vectors at all.
    pub const fn real() -> Self {
        Self::new(0, 0, 0)
    }
    /// Euclidean space with `n` basis vectors that all square to +1.
    pub const fn euclidean(n: u8) -> Self {
        Self::new(n, 0, 0)
    }
    /// Complex numbers: one basis vector that squares to -1.
    pub const fn complex() -> Self {
        Self::new(0, 1, 0)
    }
    /// Quaternions: two basis vectors that square to -1, whose product is
    /// the third unit.
    pub const fn quaternion() -> Self {
        Self::new(0, 2, 0)
    }
    /// Projective geometric algebra for `n`-dimensional Euclidean space, with
    /// one extra null basis vector.
    pub const fn projective(n: u8) -> Self {
        Self::new(n, 0, 1)
    }
    /// Spacetime algebra with signature `(+, -, -, -)`.
    pub const fn spacetime() -> Self {
        Self::new(1, 3, 0)
    }

    /// Returns the total number of basis vectors, `p + q + r`.
    pub const fn ndim(self) -> u8 {
        self.p + self.q + self.r
    }
    /// Returns the number of basis blades, `2^ndim`.
    pub const fn dimension(self) -> usize {
        1 << self.ndim()
    }

    /// Returns the metric of basis vector `i` (zero-indexed).
    ///
    /// Indices past the last basis vector are reported as null; only indices
    /// below [`Self::ndim()`] are meaningful.
    pub const fn metric(self, i: u8) -> Metric {
        if i < self.p {
            Metric::Positive
        } else if i < self.p + self.q {
            Metric::Negative
        } else {
            Metric::Null
        }
    }
    /// Returns the metric of each basis vector, in order.
    pub fn metrics(self) -> impl Clone + Iterator<Item = Metric> {
        (0..self.ndim()).map(move |i| self.metric(i))
    }
}

/// Square of a basis vector.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Metric {
    /// Squares to +1.
    Positive,
    /// Squares to -1.
    Negative,
    /// Squares to 0.
    Null,
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Positive => write!(f, "+1"),
            Metric::Negative => write!(f, "-1"),
            Metric::Null => write!(f, "0"),
        }
    }
}

impl Metric {
    /// Returns the square of the basis vector, or `None` if it is zero.
    pub const fn square(self) -> Option<Sign> {
        match self {
            Metric::Positive => Some(Sign::Pos),
            Metric::Negative => Some(Sign::Neg),
            Metric::Null => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_signature_parse() {
        let expected = Signature::new(3, 0, 1);
        assert_eq!(Ok(expected), "3,0,1".parse());
        assert_eq!(Ok(expected), " 3 0 1 ".parse());
        assert_eq!(Ok(expected), "Cl(3,0,1)".parse());
        assert_eq!(Ok(expected), "Cl(3, 0, 1)".parse());
        assert_eq!(Ok(Signature::spacetime()), "1,3".parse());
        assert_eq!(expected.to_string().parse(), Ok(expected));

        assert_eq!(
            Err(ParseSignatureError::WrongComponentCount(1)),
            "3".parse::<Signature>(),
        );
        assert_eq!(
            Err(ParseSignatureError::UnclosedParen),
            "Cl(3,0".parse::<Signature>(),
        );
        assert!(matches!(
            "3,x,0".parse::<Signature>(),
            Err(ParseSignatureError::ParseInt(s, _)) if s == "x",
        ));
    }

    #[test]
    fn test_signature_metrics() {
        let sig = Signature::new(2, 1, 1);
        assert_eq!(sig.ndim(), 4);
        assert_eq!(sig.dimension(), 16);
        assert_eq!(
            sig.metrics().collect::<Vec<_>>(),
            [
                Metric::Positive,
                Metric::Positive,
                Metric::Negative,
                Metric::Null,
            ],
        );
        assert_eq!(Signature::real().dimension(), 1);
        assert_eq!(Metric::Null.square(), None);
        assert_eq!(Metric::Negative.square(), Some(Sign::Neg));
    }
}
