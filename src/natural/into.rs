// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Converts a [`Natural`] back into a machine scalar.

use std::convert::TryFrom;

use crate::error::CasError;
use crate::natural::core::Natural;
use crate::natural::digit::BASE;

impl TryFrom<&Natural> for u64 {
    type Error = CasError;

    /// Extracts a `u64` via Horner's method over the base-`B` digits.
    ///
    /// Fails with [`CasError::InvalidInput`] if the value does not fit.
    fn try_from(value: &Natural) -> Result<u64, CasError> {
        let mut acc: u64 = 0;
        for &digit in value.as_digits().iter().rev() {
            acc = acc
                .checked_mul(BASE as u64)
                .and_then(|v| v.checked_add(digit as u64))
                .ok_or_else(|| CasError::InvalidInput(value.to_string()))?;
        }
        Ok(acc)
    }
}

impl TryFrom<Natural> for u64 {
    type Error = CasError;

    fn try_from(value: Natural) -> Result<u64, CasError> {
        u64::try_from(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrips_small_values() {
        for v in [0u64, 1, 42, 1_000_000_000, u64::MAX / 2] {
            let n = Natural::from_u64(v);
            assert_eq!(u64::try_from(&n).unwrap(), v);
        }
    }

    #[test]
    fn rejects_overflow() {
        let n = Natural::from_decimal_str("99999999999999999999999999999").unwrap();
        assert!(u64::try_from(&n).is_err());
    }
}
