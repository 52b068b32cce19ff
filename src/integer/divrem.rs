// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements division and remainder.
//!
//! Division truncates towards zero (`-7 / 2 == -3`); the remainder takes
//! the sign of the dividend (`-7 % 2 == -1`), matching Rust's native `%`
//! on signed integers.

use std::ops::{Div, Rem};

use crate::error::{CasError, CasResult};
use crate::integer::core::Integer;

impl Integer {
    /// Divides `self` by `rhs`, returning `(quotient, remainder)` with
    /// truncating-towards-zero division.
    ///
    /// Fails with [`CasError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div_rem(&self, rhs: &Integer) -> CasResult<(Integer, Integer)> {
        if rhs.is_zero() {
            return Err(CasError::DivisionByZero);
        }

        let (q_mag, r_mag) = self.magnitude.checked_div_rem(&rhs.magnitude)?;
        let quotient = Integer::from_parts(q_mag, self.sign.xor(rhs.sign));
        let remainder = Integer::from_parts(r_mag, self.sign);
        Ok((quotient, remainder))
    }
}

impl Div<&Integer> for &Integer {
    type Output = Integer;

    fn div(self, rhs: &Integer) -> Integer {
        self.checked_div_rem(rhs).expect("division by zero").0
    }
}

impl Rem<&Integer> for &Integer {
    type Output = Integer;

    fn rem(self, rhs: &Integer) -> Integer {
        self.checked_div_rem(rhs).expect("division by zero").1
    }
}
