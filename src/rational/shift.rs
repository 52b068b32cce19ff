// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements scalar shifts of a [`Rational`] value.
//!
//! Unlike `Natural`/`Integer`, these are multiplications/divisions by
//! `2^k`, not the base-`B` digit shifts of the underlying representation.
//! Left-then-right does not always round-trip: `(1/3) << 1 >> 1` loses the
//! odd numerator's low bit to truncation.

use crate::algorithm::pow;
use crate::error::CasResult;
use crate::integer::Integer;
use crate::natural::Natural;
use crate::rational::core::Rational;

fn two_to_the(count: usize) -> Integer {
    pow(&Integer::from_i64(2), &Natural::from_u64(count as u64), |a, b| a * b)
}

impl Rational {
    /// Multiplies `self` by `2^count`.
    pub fn checked_shl(&self, count: usize) -> CasResult<Rational> {
        let numerator = &self.numerator * &two_to_the(count);
        Rational::new(numerator, self.denominator.clone())
    }

    /// Divides `self`'s numerator by `2^count`, truncating, and re-reduces.
    pub fn shr(&self, count: usize) -> Rational {
        let numerator = &self.numerator / &two_to_the(count);
        Rational::new(numerator, self.denominator.clone())
            .expect("denominator is unchanged and already known nonzero")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::natural::Natural;

    #[test]
    fn shl_multiplies_numerator() {
        let r = Rational::new(Integer::from_i64(3), Natural::from_u64(4)).unwrap();
        let shifted = r.checked_shl(2).unwrap();
        assert_eq!(shifted, Rational::new(Integer::from_i64(3), Natural::from_u64(1)).unwrap());
    }

    #[test]
    fn shl_then_shr_does_not_always_roundtrip() {
        let r = Rational::new(Integer::from_i64(3), Natural::from_u64(4)).unwrap();
        let roundtripped = r.checked_shl(1).unwrap().shr(1);
        assert_ne!(roundtripped, r);
        assert_eq!(roundtripped, Rational::new(Integer::from_i64(1), Natural::from_u64(2)).unwrap());
    }
}
