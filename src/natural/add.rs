// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements addition.

use std::ops::Add;

use crate::container::trim_trailing_while;
use crate::natural::core::{is_valid_digits, Natural};
use crate::natural::digit::{Digit, DoubleDigit, BASE};

/// Adds two canonical digit slices, returning a canonical result.
///
/// Employs schoolbook long addition: digits are added from the least
/// significant position upwards, propagating the carry.
pub(crate) fn add_digits(a: &[Digit], b: &[Digit]) -> Vec<Digit> {
    debug_assert!(is_valid_digits(a));
    debug_assert!(is_valid_digits(b));

    let mut result = Vec::with_capacity(a.len().max(b.len()) + 1);
    let mut carry: DoubleDigit = 0;

    for i in 0..a.len().max(b.len()) {
        let x = *a.get(i).unwrap_or(&0) as DoubleDigit;
        let y = *b.get(i).unwrap_or(&0) as DoubleDigit;
        let sum = x + y + carry;
        result.push((sum % BASE as DoubleDigit) as Digit);
        carry = sum / BASE as DoubleDigit;
    }
    if carry > 0 {
        result.push(carry as Digit);
    }

    trim_trailing_while(&mut result, |&d| d == 0);
    result
}

impl Add<&Natural> for &Natural {
    type Output = Natural;

    fn add(self, rhs: &Natural) -> Natural {
        Natural::from_canonical_digits(add_digits(self.as_digits(), rhs.as_digits()))
    }
}

impl Add<&Natural> for Natural {
    type Output = Natural;

    fn add(self, rhs: &Natural) -> Natural {
        (&self).add(rhs)
    }
}

impl Add<Natural> for &Natural {
    type Output = Natural;

    fn add(self, rhs: Natural) -> Natural {
        self.add(&rhs)
    }
}

impl Add for Natural {
    type Output = Natural;

    fn add(self, rhs: Natural) -> Natural {
        (&self).add(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_digits() {
        let data: &[(&[Digit], &[Digit], &[Digit])] = &[
            (&[1], &[2], &[3]),
            (&[BASE - 1], &[1], &[0, 1]),
            (&[BASE - 1, BASE - 1], &[1], &[0, 0, 1]),
            (&[0], &[0], &[0]),
        ];
        for &(a, b, expected) in data {
            assert_eq!(add_digits(a, b), expected);
        }
    }

    #[quickcheck_macros::quickcheck]
    fn matches_num_bigint(a: u64, b: u64) -> bool {
        let sum = &Natural::from_u64(a) + &Natural::from_u64(b);
        let expected = num_bigint::BigUint::from(a) + num_bigint::BigUint::from(b);
        sum.as_digits().iter().rev().fold(String::new(), |mut acc, d| {
            if acc.is_empty() {
                acc.push_str(&d.to_string());
            } else {
                acc.push_str(&format!("{d:09}"));
            }
            acc
        }) == expected.to_string()
    }
}
