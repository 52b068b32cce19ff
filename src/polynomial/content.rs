// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Content normalization: dividing out the scalar `gcd` of a polynomial's
//! coefficients so that the remainder is primitive.

use crate::polynomial::core::Polynomial;
use crate::rational::Rational;

impl Polynomial {
    /// The scalar content: the `gcd` of the coefficients (via
    /// [`Rational::gcd`], so always non-negative), signed to match the
    /// leading coefficient.
    pub fn content(&self) -> Rational {
        let coefficients = self.as_coefficients();
        let mut s = coefficients[0].clone();
        for coefficient in &coefficients[1..] {
            s = s.gcd(coefficient);
        }
        if self.major_coefficient().is_negative() {
            s = -s;
        }
        s
    }

    /// Divides out [`Polynomial::content`], producing a primitive
    /// polynomial whose leading coefficient has the same sign as `self`'s.
    pub fn normalize_content(&self) -> Polynomial {
        if self.is_zero() {
            return self.clone();
        }
        let s = self.content();
        self.scale_down(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integer::Integer;
    use crate::natural::Natural;

    fn r(n: i64, d: u64) -> Rational {
        Rational::new(Integer::from_i64(n), Natural::from_u64(d)).unwrap()
    }

    #[test]
    fn content_of_scaled_polynomial() {
        // 6x^2 + 12x + 18 has content 6, primitive part x^2 + 2x + 3
        let p = Polynomial::from_high_to_low(vec![r(6, 1), r(12, 1), r(18, 1)]);
        assert_eq!(p.content(), r(6, 1));
        assert_eq!(
            p.normalize_content().as_coefficients(),
            Polynomial::from_high_to_low(vec![r(1, 1), r(2, 1), r(3, 1)]).as_coefficients()
        );
    }

    #[test]
    fn content_sign_matches_leading_coefficient() {
        let p = Polynomial::from_high_to_low(vec![r(-6, 1), r(12, 1)]);
        assert!(p.content().is_negative());
    }
}
