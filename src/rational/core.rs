// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Defines `Rational`.

use crate::algorithm::gcd;
use crate::error::{CasError, CasResult};
use crate::integer::Integer;
use crate::natural::Natural;

/// An arbitrary-precision rational number, always held in lowest terms
/// with a strictly positive denominator.
#[derive(Clone, Debug)]
pub struct Rational {
    pub(crate) numerator: Integer,
    pub(crate) denominator: Natural,
}

impl Rational {
    /// Builds a `Rational` from a numerator and denominator, reducing to
    /// lowest terms.
    ///
    /// Fails with [`CasError::DenominatorIsZero`] if `denominator` is zero.
    pub fn new(numerator: Integer, denominator: Natural) -> CasResult<Rational> {
        if denominator.is_zero() {
            return Err(CasError::DenominatorIsZero);
        }

        Ok(Rational::from_reduced_unchecked(numerator, denominator).reduce())
    }

    /// Builds a `Rational` from a non-negative integer, with denominator 1.
    pub fn from_integer(numerator: Integer) -> Rational {
        Rational::from_reduced_unchecked(numerator, Natural::from_u64(1))
    }

    fn from_reduced_unchecked(numerator: Integer, denominator: Natural) -> Rational {
        Rational { numerator, denominator }
    }

    fn reduce(self) -> Rational {
        if self.numerator.is_zero() {
            return Rational::from_reduced_unchecked(Integer::default(), Natural::from_u64(1));
        }

        let g = gcd(self.numerator.magnitude().clone(), self.denominator.clone())
            .expect("Natural gcd never fails");
        if g == Natural::from_u64(1) {
            return self;
        }

        let numerator_magnitude = self
            .numerator
            .magnitude()
            .checked_div_rem(&g)
            .expect("g divides the numerator exactly")
            .0;
        let denominator = self
            .denominator
            .checked_div_rem(&g)
            .expect("g divides the denominator exactly")
            .0;

        Rational {
            numerator: Integer::from_magnitude_and_sign(numerator_magnitude, self.numerator.is_negative()),
            denominator,
        }
    }

    pub(crate) fn numerator(&self) -> &Integer {
        &self.numerator
    }

    pub(crate) fn denominator(&self) -> &Natural {
        &self.denominator
    }
}

impl Default for Rational {
    fn default() -> Self {
        Rational::from_integer(Integer::default())
    }
}
