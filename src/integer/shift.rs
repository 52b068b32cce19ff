// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements shifting by whole base-`B` digits, preserving sign.

use crate::error::CasResult;
use crate::integer::core::Integer;

impl Integer {
    /// Multiplies `self` by `B^count`.
    pub fn checked_shl(&self, count: usize) -> CasResult<Integer> {
        let magnitude = self.magnitude.checked_shl(count)?;
        Ok(Integer::from_parts(magnitude, self.sign))
    }

    /// Divides `self` by `B^count`, truncating towards zero.
    pub fn shr(&self, count: usize) -> Integer {
        let magnitude = self.magnitude.shr(count);
        Integer::from_parts(magnitude, self.sign)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shl_preserves_sign() {
        let n = Integer::from_i64(-5).checked_shl(1).unwrap();
        assert!(n.is_negative());
        assert_eq!(n.magnitude().to_string(), "5000000000");
    }

    #[test]
    fn shr_can_reach_zero() {
        let n = Integer::from_i64(-5).shr(3);
        assert!(n.is_zero());
        assert!(!n.is_negative());
    }
}
