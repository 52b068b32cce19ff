// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Constructors for [`Rational`].

use crate::integer::Integer;
use crate::natural::Natural;
use crate::rational::core::Rational;

impl From<Integer> for Rational {
    fn from(value: Integer) -> Rational {
        Rational::from_integer(value)
    }
}

impl From<Natural> for Rational {
    fn from(value: Natural) -> Rational {
        Rational::from_integer(Integer::from_natural(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CasError;

    #[test]
    fn construction_reduces() {
        let r = Rational::new(Integer::from_i64(6), Natural::from_u64(8)).unwrap();
        assert_eq!(r.numerator().clone(), Integer::from_i64(3));
        assert_eq!(r.denominator().clone(), Natural::from_u64(4));
    }

    #[test]
    fn zero_denominator_is_rejected() {
        assert_eq!(
            Rational::new(Integer::from_i64(1), Natural::from_u64(0)),
            Err(CasError::DenominatorIsZero)
        );
    }

    #[test]
    fn domain_promotion_from_integer() {
        let r: Rational = Integer::from_i64(-5).into();
        assert_eq!(r.numerator().clone(), Integer::from_i64(-5));
        assert_eq!(r.denominator().clone(), Natural::from_u64(1));
    }
}
