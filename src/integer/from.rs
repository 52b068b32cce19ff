// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Constructors for [`Integer`].

use crate::error::{CasError, CasResult};
use crate::integer::core::{Integer, Sign};
use crate::natural::Natural;

impl Integer {
    /// Builds an `Integer` from a non-negative magnitude, always positive.
    pub fn from_natural(magnitude: Natural) -> Integer {
        Integer::from_parts(magnitude, Sign::Positive)
    }

    /// Builds an `Integer` from a magnitude and an explicit negativity flag.
    pub fn from_magnitude_and_sign(magnitude: Natural, is_negative: bool) -> Integer {
        let sign = if is_negative { Sign::Negative } else { Sign::Positive };
        Integer::from_parts(magnitude, sign)
    }

    /// Builds an `Integer` from a machine-width scalar.
    pub fn from_i64(value: i64) -> Integer {
        let is_negative = value < 0;
        let magnitude = Natural::from_u64(value.unsigned_abs());
        Integer::from_parts(magnitude, if is_negative { Sign::Negative } else { Sign::Positive })
    }

    /// Builds an `Integer` from a decimal string with an optional leading
    /// `-` (a leading `+` is not accepted).
    ///
    /// Fails with [`CasError::InvalidInput`] if the remainder of the string
    /// is not a valid `Natural` literal.
    pub fn from_decimal_str(s: &str) -> CasResult<Integer> {
        if let Some(rest) = s.strip_prefix('-') {
            let magnitude = Natural::from_decimal_str(rest)?;
            Ok(Integer::from_parts(magnitude, Sign::Negative))
        } else {
            let magnitude = Natural::from_decimal_str(s)?;
            Ok(Integer::from_parts(magnitude, Sign::Positive))
        }
    }
}

impl From<Natural> for Integer {
    fn from(value: Natural) -> Integer {
        Integer::from_natural(value)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Integer {
        Integer::from_i64(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_i64_tracks_sign() {
        assert!(Integer::from_i64(-5).is_sign_negative());
        assert!(!Integer::from_i64(5).is_sign_negative());
        assert!(!Integer::from_i64(0).is_sign_negative());
    }

    #[test]
    fn from_decimal_str_parses_negative() {
        let n = Integer::from_decimal_str("-1234567890123").unwrap();
        assert!(n.is_sign_negative());
        assert_eq!(n.magnitude().to_string(), "1234567890123");
    }

    #[test]
    fn negative_zero_is_canonically_positive() {
        let n = Integer::from_decimal_str("-0").unwrap();
        assert!(!n.is_sign_negative());
    }

    #[test]
    fn rejects_leading_plus() {
        assert!(Integer::from_decimal_str("+5").is_err());
    }
}
