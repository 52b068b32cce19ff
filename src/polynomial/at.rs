// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Coefficient access for [`Polynomial`].

use crate::error::{CasError, CasResult};
use crate::polynomial::core::Polynomial;
use crate::rational::Rational;

impl Polynomial {
    /// Returns the coefficient of `x^k`.
    ///
    /// Fails with [`CasError::DegreeOutOfRange`] if `k >= len()`.
    pub fn at(&self, k: usize) -> CasResult<&Rational> {
        let coefficients = self.as_coefficients();
        coefficients.get(k).ok_or(CasError::DegreeOutOfRange {
            degree: k,
            len: coefficients.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integer::Integer;
    use crate::natural::Natural;

    #[test]
    fn in_range_access() {
        let p = Polynomial::from_high_to_low(vec![
            Rational::new(Integer::from_i64(1), Natural::from_u64(1)).unwrap(),
            Rational::new(Integer::from_i64(2), Natural::from_u64(1)).unwrap(),
        ]);
        assert_eq!(p.at(0).unwrap().clone(), Rational::new(Integer::from_i64(2), Natural::from_u64(1)).unwrap());
    }

    #[test]
    fn out_of_range_is_rejected() {
        let p = Polynomial::default();
        assert_eq!(p.at(5), Err(CasError::DegreeOutOfRange { degree: 5, len: 1 }));
    }
}
