// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements multiplication.

use std::ops::Mul;

use crate::integer::core::Integer;

impl Mul<&Integer> for &Integer {
    type Output = Integer;

    fn mul(self, rhs: &Integer) -> Integer {
        let magnitude = &self.magnitude * &rhs.magnitude;
        Integer::from_parts(magnitude, self.sign.xor(rhs.sign))
    }
}

impl Mul<&Integer> for Integer {
    type Output = Integer;

    fn mul(self, rhs: &Integer) -> Integer {
        (&self).mul(rhs)
    }
}

impl Mul for Integer {
    type Output = Integer;

    fn mul(self, rhs: Integer) -> Integer {
        (&self).mul(&rhs)
    }
}
