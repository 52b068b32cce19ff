// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements left shift (multiplication by `x^k`).

use crate::container::shift_insert_zeros_front;
use crate::error::{CasError, CasResult};
use crate::polynomial::core::Polynomial;

impl Polynomial {
    /// Multiplies `self` by `x^count`: grows by `count`, copying existing
    /// coefficients upward and zeroing the low slots.
    ///
    /// Fails with [`CasError::LengthError`] if the resulting length would
    /// not fit in a `usize`.
    pub fn checked_shl(&self, count: usize) -> CasResult<Polynomial> {
        if self.is_zero() {
            return Ok(self.clone());
        }

        let mut coefficients = self.as_coefficients().to_vec();
        coefficients
            .len()
            .checked_add(count)
            .ok_or(CasError::LengthError)?;

        shift_insert_zeros_front(&mut coefficients, count);
        Ok(Polynomial::from_canonical_coefficients(coefficients))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integer::Integer;
    use crate::natural::Natural;
    use crate::rational::Rational;

    #[test]
    fn shl_grows_and_zero_fills() {
        let p = Polynomial::from_high_to_low(vec![
            Rational::new(Integer::from_i64(1), Natural::from_u64(1)).unwrap(),
        ]);
        let shifted = p.checked_shl(2).unwrap();
        assert_eq!(shifted.degree(), 2);
        assert!(shifted.at(0).unwrap().is_zero());
        assert!(shifted.at(1).unwrap().is_zero());
        assert!(!shifted.at(2).unwrap().is_zero());
    }

    #[test]
    fn shl_zero_stays_zero() {
        assert!(Polynomial::default().checked_shl(5).unwrap().is_zero());
    }
}
