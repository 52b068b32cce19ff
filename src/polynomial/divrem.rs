// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements polynomial long division.

use crate::container::trim_trailing_while;
use crate::error::{CasError, CasResult};
use crate::polynomial::core::Polynomial;
use crate::rational::Rational;

impl Polynomial {
    /// Divides `self` by `divisor`, returning `(quotient, remainder)`.
    ///
    /// Fails with [`CasError::DivisionByZeroPolynomial`] if `divisor` is
    /// the zero polynomial.
    pub fn long_div(&self, divisor: &Polynomial) -> CasResult<(Polynomial, Polynomial)> {
        if divisor.is_zero() {
            return Err(CasError::DivisionByZeroPolynomial);
        }

        if divisor.degree() > self.degree() {
            return Ok((Polynomial::default(), self.clone()));
        }

        let mut quotient_coefficients = vec![Rational::default(); self.degree() - divisor.degree() + 1];
        let mut remainder = self.clone();

        while remainder.degree() >= divisor.degree() && !remainder.major_coefficient().is_zero() {
            let d = remainder.degree() - divisor.degree();
            let c: Rational = remainder
                .major_coefficient()
                .checked_div(divisor.major_coefficient())
                .expect("divisor's leading coefficient is nonzero");

            quotient_coefficients[d] = c.clone();

            let term = Polynomial::from_degree_map([(d, c)]);
            remainder = &remainder - &(&term * divisor);
        }

        trim_trailing_while(&mut quotient_coefficients, |c| c.is_zero());
        let quotient = Polynomial::from_canonical_coefficients(quotient_coefficients);

        Ok((quotient, remainder))
    }
}
