// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements negation and inversion.

use std::ops::Neg;

use crate::error::{CasError, CasResult};
use crate::integer::Integer;
use crate::natural::Natural;
use crate::rational::core::Rational;

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational::new(-self.numerator.clone(), self.denominator.clone())
            .expect("denominator is already known nonzero")
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        (&self).neg()
    }
}

impl Rational {
    /// Swaps numerator-absolute with denominator, preserving sign.
    ///
    /// Fails with [`CasError::DenominatorIsZero`] if `self` is zero.
    pub fn checked_inverse(&self) -> CasResult<Rational> {
        if self.is_zero() {
            return Err(CasError::DenominatorIsZero);
        }

        let new_numerator =
            Integer::from_magnitude_and_sign(self.denominator.clone(), self.is_negative());
        let new_denominator = self.numerator.magnitude().clone();
        Rational::new(new_numerator, new_denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negation_flips_numerator_sign() {
        let r = Rational::new(Integer::from_i64(3), Natural::from_u64(4)).unwrap();
        assert_eq!(-r.clone(), Rational::new(Integer::from_i64(-3), Natural::from_u64(4)).unwrap());
    }

    #[test]
    fn inverse_swaps_parts() {
        let r = Rational::new(Integer::from_i64(-3), Natural::from_u64(4)).unwrap();
        let inv = r.checked_inverse().unwrap();
        assert_eq!(inv, Rational::new(Integer::from_i64(-4), Natural::from_u64(3)).unwrap());
    }

    #[test]
    fn inverse_of_zero_fails() {
        let z = Rational::default();
        assert!(z.checked_inverse().is_err());
    }
}
