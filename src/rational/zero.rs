// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Zero and sign queries for [`Rational`].

use crate::rational::core::Rational;

impl Rational {
    /// Whether this value is zero (canonical form forces denominator 1).
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Whether this value is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integer::Integer;
    use crate::natural::Natural;

    #[test]
    fn zero_has_unit_denominator() {
        let z = Rational::new(Integer::from_i64(0), Natural::from_u64(7)).unwrap();
        assert!(z.is_zero());
        assert_eq!(z.denominator().clone(), Natural::from_u64(1));
    }
}
