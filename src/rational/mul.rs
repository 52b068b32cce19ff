// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements multiplication and division.

use std::ops::{Div, Mul};

use crate::error::{CasError, CasResult};
use crate::rational::core::Rational;

impl Mul<&Rational> for &Rational {
    type Output = Rational;

    fn mul(self, rhs: &Rational) -> Rational {
        let numerator = &self.numerator * &rhs.numerator;
        let denominator = &self.denominator * &rhs.denominator;
        Rational::new(numerator, denominator).expect("product of two positive naturals is nonzero")
    }
}

impl Mul<&Rational> for Rational {
    type Output = Rational;

    fn mul(self, rhs: &Rational) -> Rational {
        (&self).mul(rhs)
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Rational {
        (&self).mul(&rhs)
    }
}

impl Rational {
    /// Divides `self` by `rhs`: multiplies by `rhs`'s reciprocal.
    ///
    /// Fails with [`CasError::DenominatorIsZero`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Rational) -> CasResult<Rational> {
        let reciprocal = rhs.checked_inverse()?;
        Ok(self * &reciprocal)
    }
}

impl Div<&Rational> for &Rational {
    type Output = Rational;

    fn div(self, rhs: &Rational) -> Rational {
        self.checked_div(rhs).expect("division by zero")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integer::Integer;
    use crate::natural::Natural;

    #[test]
    fn multiplies_numerators_and_denominators() {
        let a = Rational::new(Integer::from_i64(-17), Natural::from_u64(169)).unwrap();
        let b = Rational::new(Integer::from_i64(13), Natural::from_u64(54)).unwrap();
        let product = a * b;
        assert_eq!(product, Rational::new(Integer::from_i64(-17), Natural::from_u64(702)).unwrap());
    }

    #[test]
    fn division_by_zero_is_rejected() {
        let a = Rational::new(Integer::from_i64(1), Natural::from_u64(2)).unwrap();
        assert_eq!(a.checked_div(&Rational::default()), Err(CasError::DenominatorIsZero));
    }
}
