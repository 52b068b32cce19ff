// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements shifting by whole base-`B` digits.
//!
//! A left shift by `k` multiplies by `B^k`; a right shift by `k` performs
//! the floor division by `B^k`, i.e. drops the `k` least significant
//! digits.

use crate::container::{shift_insert_zeros_front, trim_trailing_while};
use crate::error::{CasError, CasResult};
use crate::natural::core::Natural;

impl Natural {
    /// Multiplies `self` by `B^count`.
    ///
    /// Fails with [`CasError::LengthError`] if the resulting digit count
    /// would not fit in a `usize`.
    pub fn checked_shl(&self, count: usize) -> CasResult<Natural> {
        if self.is_zero() {
            return Ok(Natural::default());
        }

        let mut digits = self.as_digits().to_vec();
        digits
            .len()
            .checked_add(count)
            .ok_or(CasError::LengthError)?;

        shift_insert_zeros_front(&mut digits, count);
        Ok(Natural::from_canonical_digits(digits))
    }

    /// Divides `self` by `B^count`, discarding the remainder (i.e. drops
    /// the `count` least significant digits).
    pub fn shr(&self, count: usize) -> Natural {
        let source = self.as_digits();
        if count >= source.len() {
            return Natural::default();
        }

        let mut digits = source[count..].to_vec();
        trim_trailing_while(&mut digits, |&d| d == 0);
        Natural::from_canonical_digits(digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shl_inserts_zero_digits() {
        let n = Natural::from_u64(5);
        let shifted = n.checked_shl(2).unwrap();
        assert_eq!(shifted.as_digits(), &[0, 0, 5]);
    }

    #[test]
    fn shl_zero_stays_zero() {
        assert!(Natural::default().checked_shl(3).unwrap().is_zero());
    }

    #[test]
    fn shr_drops_low_digits() {
        let n = Natural::from_canonical_digits(vec![1, 2, 3]);
        assert_eq!(n.shr(1).as_digits(), &[2, 3]);
        assert!(n.shr(5).is_zero());
    }
}
