// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Squarefree reduction: collapsing repeated roots to simple ones.

use crate::error::CasResult;
use crate::polynomial::core::Polynomial;

impl Polynomial {
    /// Divides out `gcd(self, self.derivative())`, then normalizes the
    /// content, so that every root of the result is simple.
    pub fn multiple_roots_to_simple(&self) -> CasResult<Polynomial> {
        let g = self.gcd(&self.derivative())?;
        let (quotient, _remainder) = self.long_div(&g)?;
        Ok(quotient.normalize_content())
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
    fn squares_a_double_root_down_to_simple() {
        // (x - 1)^2 (x + 2) -> (x - 1)(x + 2), up to sign/scale
        let x_minus_one = Polynomial::from_high_to_low(vec![r(1, 1), r(-1, 1)]);
        let x_plus_two = Polynomial::from_high_to_low(vec![r(1, 1), r(2, 1)]);
        let squared = &x_minus_one * &x_minus_one;
        let with_double_root = &squared * &x_plus_two;

        let simplified = with_double_root.multiple_roots_to_simple().unwrap();
        assert_eq!(simplified.degree(), 2);
    }

    #[test]
    fn already_squarefree_polynomial_is_unchanged_up_to_scale() {
        let p = Polynomial::from_high_to_low(vec![r(1, 1), r(0, 1), r(1, 1)]); // x^2 + 1
        let simplified = p.multiple_roots_to_simple().unwrap();
        assert_eq!(simplified.degree(), 2);
    }
}
