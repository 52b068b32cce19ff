// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements the formal derivative.

use crate::container::trim_trailing_while;
use crate::integer::Integer;
use crate::natural::Natural;
use crate::polynomial::core::Polynomial;
use crate::rational::Rational;

impl Polynomial {
    /// The formal derivative: `d/dx (c_i x^i) = i c_i x^{i-1}`.
    ///
    /// The derivative of a constant is the zero polynomial.
    pub fn derivative(&self) -> Polynomial {
        let degree = self.degree();
        if degree == 0 {
            return Polynomial::default();
        }

        let coefficients = self.as_coefficients();
        let mut result = Vec::with_capacity(degree);
        for i in 1..=degree {
            let scalar = Rational::from_integer(Integer::from_natural(Natural::from_u64(i as u64)));
            result.push(&coefficients[i] * &scalar);
        }

        trim_trailing_while(&mut result, |c| c.is_zero());
        Polynomial::from_canonical_coefficients(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(n: i64) -> Rational {
        Rational::new(Integer::from_i64(n), Natural::from_u64(1)).unwrap()
    }

    #[test]
    fn derivative_of_constant_is_zero() {
        let p = Polynomial::from_high_to_low(vec![r(7)]);
        assert!(p.derivative().is_zero());
    }

    #[test]
    fn derivative_of_cubic() {
        // x^3 + 2x^2 + 3x + 4 -> 3x^2 + 4x + 3
        let p = Polynomial::from_high_to_low(vec![r(1), r(2), r(3), r(4)]);
        let d = p.derivative();
        assert_eq!(d.as_coefficients(), &[r(3), r(4), r(3)]);
    }
}
