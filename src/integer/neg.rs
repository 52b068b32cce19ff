// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements negation.

use std::ops::Neg;

use crate::integer::core::Integer;

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Integer {
        Integer::from_parts(self.magnitude.clone(), self.sign.negate())
    }
}

impl Neg for Integer {
    type Output = Integer;

    fn neg(self) -> Integer {
        (&self).neg()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negates_sign() {
        assert_eq!(-Integer::from_i64(5), Integer::from_i64(-5));
        assert_eq!(-Integer::from_i64(-5), Integer::from_i64(5));
    }

    #[test]
    fn negating_zero_stays_zero() {
        assert_eq!(-Integer::from_i64(0), Integer::from_i64(0));
    }
}
