// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Converts an [`Integer`] back into a machine scalar.

use std::convert::TryFrom;

use crate::error::CasError;
use crate::integer::core::Integer;

impl TryFrom<&Integer> for i64 {
    type Error = CasError;

    fn try_from(value: &Integer) -> Result<i64, CasError> {
        let magnitude = u64::try_from(value.magnitude())?;
        if value.is_sign_negative() {
            if magnitude > i64::MAX as u64 + 1 {
                return Err(CasError::InvalidInput(value.to_string()));
            }
            Ok((magnitude as i128 * -1) as i64)
        } else {
            i64::try_from(magnitude).map_err(|_| CasError::InvalidInput(value.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrips_small_values() {
        for v in [-100i64, -1, 0, 1, 100] {
            assert_eq!(i64::try_from(&Integer::from_i64(v)).unwrap(), v);
        }
    }

    #[test]
    fn roundtrips_i64_min() {
        assert_eq!(i64::try_from(&Integer::from_i64(i64::MIN)).unwrap(), i64::MIN);
    }
}
