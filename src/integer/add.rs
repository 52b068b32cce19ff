// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements addition and subtraction.
//!
//! Both reduce to the same combinator: same-signed operands add their
//! magnitudes and keep the shared sign; differently-signed operands
//! subtract the smaller magnitude from the larger and take the sign of
//! whichever operand had the larger magnitude.

use std::ops::{Add, Sub};

use crate::integer::core::{Integer, Sign};

fn combine(a: &Integer, a_sign: Sign, b: &Integer, b_sign: Sign) -> Integer {
    if a_sign == b_sign {
        let magnitude = &a.magnitude + &b.magnitude;
        Integer::from_parts(magnitude, a_sign)
    } else if a.magnitude >= b.magnitude {
        let magnitude = a.magnitude.checked_sub(&b.magnitude).unwrap();
        Integer::from_parts(magnitude, a_sign)
    } else {
        let magnitude = b.magnitude.checked_sub(&a.magnitude).unwrap();
        Integer::from_parts(magnitude, b_sign)
    }
}

impl Add<&Integer> for &Integer {
    type Output = Integer;

    fn add(self, rhs: &Integer) -> Integer {
        combine(self, self.sign, rhs, rhs.sign)
    }
}

impl Add<&Integer> for Integer {
    type Output = Integer;

    fn add(self, rhs: &Integer) -> Integer {
        (&self).add(rhs)
    }
}

impl Add for Integer {
    type Output = Integer;

    fn add(self, rhs: Integer) -> Integer {
        (&self).add(&rhs)
    }
}

impl Sub<&Integer> for &Integer {
    type Output = Integer;

    fn sub(self, rhs: &Integer) -> Integer {
        combine(self, self.sign, rhs, rhs.sign.negate())
    }
}

impl Sub<&Integer> for Integer {
    type Output = Integer;

    fn sub(self, rhs: &Integer) -> Integer {
        (&self).sub(rhs)
    }
}

impl Sub for Integer {
    type Output = Integer;

    fn sub(self, rhs: Integer) -> Integer {
        (&self).sub(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_sign_adds_magnitudes() {
        assert_eq!(Integer::from_i64(3) + Integer::from_i64(4), Integer::from_i64(7));
        assert_eq!(Integer::from_i64(-3) + Integer::from_i64(-4), Integer::from_i64(-7));
    }

    #[test]
    fn different_sign_subtracts() {
        assert_eq!(Integer::from_i64(3) + Integer::from_i64(-5), Integer::from_i64(-2));
        assert_eq!(Integer::from_i64(-3) + Integer::from_i64(5), Integer::from_i64(2));
    }

    #[test]
    fn subtraction_is_add_of_negation() {
        assert_eq!(Integer::from_i64(3) - Integer::from_i64(5), Integer::from_i64(-2));
        assert_eq!(Integer::from_i64(-3) - Integer::from_i64(-5), Integer::from_i64(2));
    }

    #[quickcheck_macros::quickcheck]
    fn matches_i64_for_small_values(a: i32, b: i32) -> bool {
        let (a, b) = (a as i64, b as i64);
        Integer::from_i64(a) + Integer::from_i64(b) == Integer::from_i64(a + b)
    }
}
