// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `gcd`/`lcm` over polynomials.
//!
//! Rational-coefficient polynomials are a Euclidean domain whose units are
//! every nonzero scalar, so the loop here runs on degree rather than
//! zero-ness: it stops as soon as the running remainder drops to a
//! constant, which may or may not be the zero polynomial. The two cases
//! are told apart by a final check rather than by the loop condition
//! itself: `first` is only accepted as the gcd if both inputs reduce to a
//! zero-leading-coefficient remainder against it; otherwise the two
//! original polynomials were coprime and `second` (a nonzero constant) is
//! returned instead.

use crate::error::CasResult;
use crate::polynomial::core::Polynomial;

impl Polynomial {
    pub fn gcd(&self, other: &Polynomial) -> CasResult<Polynomial> {
        if self.degree() < other.degree() {
            return other.gcd(self);
        }

        let mut first = self.clone();
        let mut second = other.clone();

        while second.degree() != 0 {
            let remainder = first.long_div(&second)?.1;
            first = second;
            second = remainder;
        }

        let a_reduced = self.long_div(&first)?.1;
        let b_reduced = other.long_div(&first)?.1;
        if a_reduced.major_coefficient().is_zero() && b_reduced.major_coefficient().is_zero() {
            Ok(first)
        } else {
            Ok(second)
        }
    }

    pub fn lcm(&self, other: &Polynomial) -> CasResult<Polynomial> {
        let g = self.gcd(other)?;
        let quotient = self.long_div(&g)?.0;
        Ok(&quotient * other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integer::Integer;
    use crate::natural::Natural;
    use crate::rational::Rational;

    fn r(n: i64, d: u64) -> Rational {
        Rational::new(Integer::from_i64(n), Natural::from_u64(d)).unwrap()
    }

    #[test]
    fn gcd_of_coprime_polynomials_is_a_nonzero_constant() {
        let a = Polynomial::from_high_to_low(vec![r(1, 1), r(0, 1), r(1, 1)]); // x^2 + 1
        let b = Polynomial::from_high_to_low(vec![r(1, 1), r(1, 1)]); // x + 1
        let g = a.gcd(&b).unwrap();
        assert_eq!(g.degree(), 0);
        assert!(!g.major_coefficient().is_zero());
    }

    #[test]
    fn gcd_with_common_factor() {
        // (x + 1)(x + 2) and (x + 1)(x + 3) share (x + 1) up to a scalar.
        let shared = Polynomial::from_high_to_low(vec![r(1, 1), r(1, 1)]);
        let a = &shared * &Polynomial::from_high_to_low(vec![r(1, 1), r(2, 1)]);
        let b = &shared * &Polynomial::from_high_to_low(vec![r(1, 1), r(3, 1)]);
        let g = a.gcd(&b).unwrap();
        assert_eq!(g.degree(), 1);
    }

    #[test]
    fn gcd_with_zero_polynomial_is_the_other_operand() {
        let a = Polynomial::from_high_to_low(vec![r(1, 1), r(2, 1)]);
        let zero = Polynomial::default();
        assert_eq!(a.gcd(&zero).unwrap().as_coefficients(), a.as_coefficients());
    }

    #[test]
    fn worked_scenario_5() {
        // x^8 + x^6 - 3x^4 - 3x^3 + 8x^2 + 2x - 5
        let a = Polynomial::from_high_to_low(vec![
            r(1, 1),
            r(0, 1),
            r(1, 1),
            r(0, 1),
            r(-3, 1),
            r(-3, 1),
            r(8, 1),
            r(2, 1),
            r(-5, 1),
        ]);
        // 3x^6 + 5x^4 - 4x^2 - 9x + 21
        let b = Polynomial::from_high_to_low(vec![
            r(3, 1),
            r(0, 1),
            r(5, 1),
            r(0, 1),
            r(-4, 1),
            r(-9, 1),
            r(21, 1),
        ]);

        let g = a.gcd(&b).unwrap();
        assert_eq!(g.degree(), 0);
        assert_eq!(g.major_coefficient().clone(), r(-1288744821, 543589225));
    }
}
