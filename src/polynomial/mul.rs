// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements multiplication, by another polynomial or by a scalar.
//!
//! Polynomial-by-polynomial multiplication is plain schoolbook
//! convolution; there is no Karatsuba split at this layer.

use std::ops::Mul;

use crate::container::trim_trailing_while;
use crate::polynomial::core::Polynomial;
use crate::rational::Rational;

fn mul_coefficients(a: &[Rational], b: &[Rational]) -> Vec<Rational> {
    let mut result = vec![Rational::default(); a.len() + b.len() - 1];
    for (i, ai) in a.iter().enumerate() {
        if ai.is_zero() {
            continue;
        }
        for (j, bj) in b.iter().enumerate() {
            result[i + j] = &result[i + j] + &(ai * bj);
        }
    }
    trim_trailing_while(&mut result, |c| c.is_zero());
    result
}

impl Mul<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &Polynomial) -> Polynomial {
        Polynomial::from_canonical_coefficients(mul_coefficients(
            self.as_coefficients(),
            rhs.as_coefficients(),
        ))
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Polynomial) -> Polynomial {
        (&self).mul(&rhs)
    }
}

impl Polynomial {
    /// Multiplies every coefficient by `scalar`.
    pub fn scale(&self, scalar: &Rational) -> Polynomial {
        let mut coefficients: Vec<Rational> =
            self.as_coefficients().iter().map(|c| c * scalar).collect();
        trim_trailing_while(&mut coefficients, |c| c.is_zero());
        Polynomial::from_canonical_coefficients(coefficients)
    }

    /// Divides every coefficient by `scalar`.
    pub fn scale_down(&self, scalar: &Rational) -> Polynomial {
        let mut coefficients: Vec<Rational> = self
            .as_coefficients()
            .iter()
            .map(|c| c.checked_div(scalar).expect("scalar divisor is nonzero"))
            .collect();
        trim_trailing_while(&mut coefficients, |c| c.is_zero());
        Polynomial::from_canonical_coefficients(coefficients)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integer::Integer;
    use crate::natural::Natural;

    fn r(n: i64) -> Rational {
        Rational::new(Integer::from_i64(n), Natural::from_u64(1)).unwrap()
    }

    #[test]
    fn schoolbook_convolution() {
        let a = Polynomial::from_high_to_low(vec![r(1), r(1)]); // x + 1
        let b = Polynomial::from_high_to_low(vec![r(1), r(-1)]); // x - 1
        let product = a * b; // x^2 - 1
        assert_eq!(product.as_coefficients(), &[r(-1), r(0), r(1)]);
    }

    #[test]
    fn scalar_multiplication() {
        let a = Polynomial::from_high_to_low(vec![r(2), r(4)]);
        let scaled = a.scale(&r(3));
        assert_eq!(scaled.as_coefficients(), &[r(12), r(6)]);
    }
}
