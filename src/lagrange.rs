//! Exact Lagrange interpolation over the rationals.

use num_bigint::BigInt;
use num_traits::{One, Zero};
use tracing::trace;

use crate::error::{Result, SecretError};
use crate::fraction::Fraction;
use crate::points::Point;

/// Value at x = 0 of the unique polynomial of degree `points.len() - 1`
/// through `points`.
///
/// Each term `y_j * N_j / D_j`, with `N_j = Π(0 - x_i)` and
/// `D_j = Π(x_j - x_i)` over `i != j`, is reduced before it is added to the
/// running sum, which is itself reduced after every addition.
pub fn constant_term(points: &[Point]) -> Result<Fraction> {
    if points.is_empty() {
        return Err(SecretError::InsufficientPoints { needed: 1, available: 0 });
    }

    let mut total = Fraction::zero();
    for (j, pj) in points.iter().enumerate() {
        let mut numer = BigInt::one();
        let mut denom = BigInt::one();
        for (i, pi) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            if pi.x == pj.x {
                return Err(SecretError::DuplicateX(pj.x.clone()));
            }
            numer *= -&pi.x;
            denom *= &pj.x - &pi.x;
        }

        let term = Fraction::reduce(&pj.y * numer, denom)?;
        trace!(j, term = %term, "lagrange term");
        total = total.checked_add(&term)?;
    }

    if total.denom().is_zero() {
        return Err(SecretError::DegenerateDenominator);
    }
    Ok(total)
}

/// Every coefficient of the interpolating polynomial, lowest power first.
///
/// `coefficients(points)?[0]` equals `constant_term(points)?`.
pub fn coefficients(points: &[Point]) -> Result<Vec<Fraction>> {
    if points.is_empty() {
        return Err(SecretError::InsufficientPoints { needed: 1, available: 0 });
    }

    let k = points.len();
    let mut poly = vec![Fraction::zero(); k];
    for (j, pj) in points.iter().enumerate() {
        // Basis numerator Π(x - x_i), integer coefficients, lowest power first.
        let mut basis = vec![BigInt::one()];
        let mut denom = BigInt::one();
        for (i, pi) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            if pi.x == pj.x {
                return Err(SecretError::DuplicateX(pj.x.clone()));
            }
            let mut next = vec![BigInt::zero(); basis.len() + 1];
            for (deg, coeff) in basis.iter().enumerate() {
                next[deg] -= coeff * &pi.x;
                next[deg + 1] += coeff;
            }
            basis = next;
            denom *= &pj.x - &pi.x;
        }

        for (slot, coeff) in poly.iter_mut().zip(basis) {
            let term = Fraction::reduce(&pj.y * coeff, denom.clone())?;
            *slot = slot.checked_add(&term)?;
        }
    }

    if poly.iter().any(|c| c.denom().is_zero()) {
        return Err(SecretError::DegenerateDenominator);
    }
    Ok(poly)
}
