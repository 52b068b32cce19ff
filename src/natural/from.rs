// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Constructors for [`Natural`].

use crate::container::trim_trailing_while;
use crate::error::{CasError, CasResult};
use crate::natural::core::Natural;
use crate::natural::digit::{Digit, BASE, BITS_PER_NUM};

impl Natural {
    /// Builds a `Natural` from a machine-width scalar.
    pub fn from_u64(mut value: u64) -> Natural {
        if value == 0 {
            return Natural::default();
        }

        let mut digits = Vec::new();
        while value > 0 {
            digits.push((value % BASE as u64) as Digit);
            value /= BASE as u64;
        }

        Natural::from_canonical_digits(digits)
    }

    /// Builds a `Natural` from a decimal string.
    ///
    /// Fails with [`CasError::InvalidInput`] if `s` is empty or contains any
    /// character outside `'0'..='9'`. The string is grouped into
    /// right-aligned chunks of [`BITS_PER_NUM`] decimal characters, most
    /// significant chunk first and possibly shorter than the rest.
    pub fn from_decimal_str(s: &str) -> CasResult<Natural> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CasError::InvalidInput(s.to_owned()));
        }

        let bytes = s.as_bytes();
        let mut digits = Vec::with_capacity(bytes.len() / BITS_PER_NUM + 1);

        let mut end = bytes.len();
        while end > 0 {
            let start = end.saturating_sub(BITS_PER_NUM);
            let chunk = std::str::from_utf8(&bytes[start..end]).unwrap();
            // Leading zeros within a chunk are fine: parse::<Digit> ignores them.
            let digit: Digit = chunk.parse().map_err(|_| CasError::InvalidInput(s.to_owned()))?;
            digits.push(digit);
            end = start;
        }

        trim_trailing_while(&mut digits, |&d| d == 0);
        Ok(Natural::from_canonical_digits(digits))
    }

    /// Builds a `Natural` from raw little-endian base-`B` digits.
    ///
    /// Fails with [`CasError::InvalidInput`] if any digit is `>= B`.
    pub fn from_digits(mut digits: Vec<Digit>) -> CasResult<Natural> {
        if digits.is_empty() {
            digits.push(0);
        }

        if digits.iter().any(|&d| d >= BASE) {
            return Err(CasError::InvalidInput(format!("{digits:?}")));
        }

        trim_trailing_while(&mut digits, |&d| d == 0);
        Ok(Natural::from_canonical_digits(digits))
    }
}

impl From<u64> for Natural {
    fn from(value: u64) -> Natural {
        Natural::from_u64(value)
    }
}

impl From<u32> for Natural {
    fn from(value: u32) -> Natural {
        Natural::from_u64(value as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u64_zero() {
        assert_eq!(Natural::from_u64(0).as_digits(), &[0]);
    }

    #[test]
    fn from_u64_splits_on_base() {
        assert_eq!(Natural::from_u64(1_000_000_000).as_digits(), &[0, 1]);
        assert_eq!(Natural::from_u64(1_234_567_890_123).as_digits(), &[567_890_123, 1234]);
    }

    #[test]
    fn from_decimal_str_groups_by_nine() {
        let n = Natural::from_decimal_str("1234567890123").unwrap();
        assert_eq!(n.as_digits(), &[567_890_123, 1234]);
    }

    #[test]
    fn from_decimal_str_single_short_chunk() {
        let n = Natural::from_decimal_str("42").unwrap();
        assert_eq!(n.as_digits(), &[42]);
    }

    #[test]
    fn from_decimal_str_rejects_empty_and_non_digit() {
        assert_eq!(
            Natural::from_decimal_str(""),
            Err(CasError::InvalidInput(String::new()))
        );
        assert!(Natural::from_decimal_str("12a3").is_err());
        assert!(Natural::from_decimal_str("-5").is_err());
    }

    #[test]
    fn from_decimal_str_all_zeros_is_zero() {
        let n = Natural::from_decimal_str("0000").unwrap();
        assert_eq!(n.as_digits(), &[0]);
    }

    #[test]
    fn from_digits_rejects_out_of_range() {
        assert!(Natural::from_digits(vec![0, BASE]).is_err());
    }

    #[test]
    fn from_digits_trims_trailing_zeros() {
        let n = Natural::from_digits(vec![5, 0, 0]).unwrap();
        assert_eq!(n.as_digits(), &[5]);
    }

    #[test]
    fn from_digits_empty_is_zero() {
        let n = Natural::from_digits(vec![]).unwrap();
        assert_eq!(n.as_digits(), &[0]);
    }
}
