// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `gcd`/`lcm` over rationals.
//!
//! `ℚ` has no canonical notion of "divides" the way `ℕ` does, so this
//! follows the same pattern as `Polynomial`'s content normalization:
//! combine the numerators with `gcd` and the denominators with `lcm` (and
//! the reverse for `lcm`), which is the natural extension that keeps
//! `gcd`/`lcm` of integer-valued rationals identical to the `Integer`
//! versions.

use crate::algorithm;
use crate::integer::Integer;
use crate::rational::core::Rational;

impl Rational {
    /// `gcd` of the numerators over `lcm` of the denominators.
    pub fn gcd(&self, other: &Rational) -> Rational {
        let numerator = algorithm::gcd(
            self.numerator.magnitude().clone(),
            other.numerator.magnitude().clone(),
        )
        .expect("Natural gcd never fails");
        let denominator = algorithm::lcm(self.denominator.clone(), other.denominator.clone())
            .expect("Natural lcm never fails");
        Rational::new(Integer::from_natural(numerator), denominator)
            .expect("lcm of two positive naturals is nonzero")
    }

    /// `lcm` of the numerators over `gcd` of the denominators.
    pub fn lcm(&self, other: &Rational) -> Rational {
        let numerator = algorithm::lcm(
            self.numerator.magnitude().clone(),
            other.numerator.magnitude().clone(),
        )
        .expect("Natural lcm never fails");
        let denominator = algorithm::gcd(self.denominator.clone(), other.denominator.clone())
            .expect("Natural gcd never fails");
        Rational::new(Integer::from_natural(numerator), denominator)
            .expect("gcd of two positive naturals is nonzero")
    }
}
