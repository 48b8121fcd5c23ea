//! Exact rationals over BigInt, always kept in lowest terms.

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use crate::error::{Result, SecretError};

/// Greatest common divisor of two BigInts, by repeated remainder.
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let mut x = a.abs();
    let mut y = b.abs();
    while !y.is_zero() {
        let r = &x % &y;
        x = y;
        y = r;
    }
    x
}

/// A reduced fraction: `gcd(|numer|, denom) == 1` and `denom > 0`.
/// Zero is always `0/1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fraction {
    numer: BigInt,
    denom: BigInt,
}

impl Fraction {
    /// Normalize `num/den` into lowest terms with a positive denominator.
    pub fn reduce(num: BigInt, den: BigInt) -> Result<Self> {
        if den.is_zero() {
            return Err(SecretError::ZeroDenominator(num));
        }
        let (num, den) = if den.is_negative() { (-num, -den) } else { (num, den) };
        let g = gcd(&num, &den);
        Ok(Fraction {
            numer: num / &g,
            denom: den / g,
        })
    }

    pub fn from_integer(value: BigInt) -> Self {
        Fraction {
            numer: value,
            denom: BigInt::one(),
        }
    }

    pub fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    /// The integer value, if the denominator is 1.
    pub fn to_integer(&self) -> Option<&BigInt> {
        self.is_integer().then_some(&self.numer)
    }

    /// Cross-multiplied sum `(a·d + c·b) / (b·d)`, reduced.
    pub fn checked_add(&self, other: &Fraction) -> Result<Fraction> {
        Fraction::reduce(
            &self.numer * &other.denom + &other.numer * &self.denom,
            &self.denom * &other.denom,
        )
    }

    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.numer, self.denom)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

impl From<BigInt> for Fraction {
    fn from(value: BigInt) -> Self {
        Fraction::from_integer(value)
    }
}

impl From<Fraction> for BigRational {
    fn from(value: Fraction) -> Self {
        // Already reduced, so skip the second normalization.
        BigRational::new_raw(value.numer, value.denom)
    }
}
