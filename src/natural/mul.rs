// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements multiplication.
//!
//! Dispatches between schoolbook and Karatsuba multiplication based on
//! [`KARATSUBA_THRESHOLD`]: below the threshold the quadratic algorithm's
//! lower constant factor wins, above it Karatsuba's better asymptotic
//! complexity does.

use std::ops::Mul;

use crate::container::trim_trailing_while;
use crate::natural::add::add_digits;
use crate::natural::core::{is_valid_digits, Natural};
use crate::natural::digit::{Digit, DoubleDigit, BASE, KARATSUBA_THRESHOLD};
use crate::natural::sub::sub_digits;

/// Multiplies two canonical digit slices, returning a canonical result.
pub(crate) fn mul_digits(a: &[Digit], b: &[Digit]) -> Vec<Digit> {
    debug_assert!(is_valid_digits(a));
    debug_assert!(is_valid_digits(b));

    if is_zero_digits(a) || is_zero_digits(b) {
        return vec![0];
    }

    let result = if a.len().min(b.len()) < KARATSUBA_THRESHOLD {
        schoolbook_mul(a, b)
    } else {
        karatsuba_mul(a, b)
    };

    let mut result = result;
    trim_trailing_while(&mut result, |&d| d == 0);
    result
}

fn is_zero_digits(xs: &[Digit]) -> bool {
    xs.len() == 1 && xs[0] == 0
}

/// Quadratic-time multiplication: every digit of `a` times every digit of
/// `b`, accumulated with carry propagation.
fn schoolbook_mul(a: &[Digit], b: &[Digit]) -> Vec<Digit> {
    let mut result = vec![0 as Digit; a.len() + b.len()];

    for (i, &ai) in a.iter().enumerate() {
        if ai == 0 {
            continue;
        }
        let mut carry: DoubleDigit = 0;
        for (j, &bj) in b.iter().enumerate() {
            let product = ai as DoubleDigit * bj as DoubleDigit
                + result[i + j] as DoubleDigit
                + carry;
            result[i + j] = (product % BASE as DoubleDigit) as Digit;
            carry = product / BASE as DoubleDigit;
        }
        let mut k = i + b.len();
        while carry > 0 {
            let sum = result[k] as DoubleDigit + carry;
            result[k] = (sum % BASE as DoubleDigit) as Digit;
            carry = sum / BASE as DoubleDigit;
            k += 1;
        }
    }

    result
}

/// Splits `xs` at digit position `mid` into (low, high), both canonical.
fn split_at(xs: &[Digit], mid: usize) -> (Vec<Digit>, Vec<Digit>) {
    if xs.len() <= mid {
        return (xs.to_vec(), vec![0]);
    }
    let mut low = xs[..mid].to_vec();
    let mut high = xs[mid..].to_vec();
    trim_trailing_while(&mut low, |&d| d == 0);
    trim_trailing_while(&mut high, |&d| d == 0);
    (low, high)
}

fn shift_digits(xs: &[Digit], count: usize) -> Vec<Digit> {
    if is_zero_digits(xs) {
        return vec![0];
    }
    let mut result = vec![0 as Digit; count];
    result.extend_from_slice(xs);
    result
}

/// Karatsuba's divide-and-conquer multiplication: splits each operand into
/// a high and low half and reduces four half-sized multiplications to
/// three, at the cost of extra additions and subtractions.
fn karatsuba_mul(a: &[Digit], b: &[Digit]) -> Vec<Digit> {
    let mid = a.len().min(b.len()) / 2;

    let (a_low, a_high) = split_at(a, mid);
    let (b_low, b_high) = split_at(b, mid);

    let z0 = mul_digits(&a_low, &b_low);
    let z2 = mul_digits(&a_high, &b_high);

    let a_sum = add_digits(&a_low, &a_high);
    let b_sum = add_digits(&b_low, &b_high);
    let z1_full = mul_digits(&a_sum, &b_sum);

    // z1 = z1_full - z2 - z0, each term non-negative by construction.
    let z1 = sub_digits(&sub_digits(&z1_full, &z2), &z0);

    let mut result = z0;
    result = add_digits(&result, &shift_digits(&z1, mid));
    result = add_digits(&result, &shift_digits(&z2, 2 * mid));
    result
}

impl Mul<&Natural> for &Natural {
    type Output = Natural;

    fn mul(self, rhs: &Natural) -> Natural {
        Natural::from_canonical_digits(mul_digits(self.as_digits(), rhs.as_digits()))
    }
}

impl Mul<&Natural> for Natural {
    type Output = Natural;

    fn mul(self, rhs: &Natural) -> Natural {
        (&self).mul(rhs)
    }
}

impl Mul<Natural> for &Natural {
    type Output = Natural;

    fn mul(self, rhs: Natural) -> Natural {
        self.mul(&rhs)
    }
}

impl Mul for Natural {
    type Output = Natural;

    fn mul(self, rhs: Natural) -> Natural {
        (&self).mul(&rhs)
    }
}
