// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements subtraction.
//!
//! Unlike addition, subtraction of two `Natural`s is partial: a negative
//! result is not representable, and callers instead get
//! [`crate::error::CasError::Underflow`].

use std::cmp::Ordering;

use crate::container::trim_trailing_while;
use crate::error::{CasError, CasResult};
use crate::natural::cmp::cmp_digits;
use crate::natural::core::{is_valid_digits, Natural};
use crate::natural::digit::{Digit, BASE};

/// Subtracts `b` from `a`, both canonical digit slices, requiring `a >= b`.
///
/// Employs schoolbook long subtraction with borrowing.
pub(crate) fn sub_digits(a: &[Digit], b: &[Digit]) -> Vec<Digit> {
    debug_assert!(is_valid_digits(a));
    debug_assert!(is_valid_digits(b));
    debug_assert_ne!(cmp_digits(a, b), Ordering::Less);

    let mut result = Vec::with_capacity(a.len());
    let mut borrow: i64 = 0;

    for i in 0..a.len() {
        let x = a[i] as i64;
        let y = *b.get(i).unwrap_or(&0) as i64;
        let mut diff = x - y - borrow;
        if diff < 0 {
            diff += BASE as i64;
            borrow = 1;
        } else {
            borrow = 0;
        }
        result.push(diff as Digit);
    }
    debug_assert_eq!(borrow, 0);

    trim_trailing_while(&mut result, |&d| d == 0);
    result
}

impl Natural {
    /// Subtracts `rhs` from `self`.
    ///
    /// Fails with [`CasError::Underflow`] if `self < rhs`.
    pub fn checked_sub(&self, rhs: &Natural) -> CasResult<Natural> {
        if self < rhs {
            return Err(CasError::Underflow);
        }
        Ok(Natural::from_canonical_digits(sub_digits(
            self.as_digits(),
            rhs.as_digits(),
        )))
    }
}
