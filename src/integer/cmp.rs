// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ordering for [`Integer`].

use std::cmp::Ordering;

use crate::integer::core::{Integer, Sign};

impl PartialEq for Integer {
    fn eq(&self, other: &Self) -> bool {
        self.sign == other.sign && self.magnitude == other.magnitude
    }
}

impl Eq for Integer {}

impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Integer {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => self.magnitude.cmp(&other.magnitude),
            (Sign::Negative, Sign::Negative) => other.magnitude.cmp(&self.magnitude),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_less_than_positive() {
        assert!(Integer::from_i64(-1) < Integer::from_i64(1));
    }

    #[test]
    fn more_negative_is_smaller() {
        assert!(Integer::from_i64(-5) < Integer::from_i64(-1));
    }

    #[test]
    fn zero_equals_negative_zero() {
        assert_eq!(
            Integer::from_decimal_str("0").unwrap(),
            Integer::from_decimal_str("-0").unwrap()
        );
    }
}
