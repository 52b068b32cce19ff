// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The Euclidean algorithm, generic over [`EuclideanValue`].

use crate::algorithm::traits::EuclideanValue;
use crate::error::CasResult;

/// Computes a greatest common divisor of `a` and `b` by repeated
/// remaindering: `gcd(a, b) = gcd(b, a mod b)` until `b` reaches zero.
///
/// The result is only a gcd up to the domain's units — callers that care
/// about a canonical representative (non-negative `Integer`, monic
/// `Polynomial`) normalize it themselves.
pub fn gcd<T: EuclideanValue>(a: T, b: T) -> CasResult<T> {
    let mut a = a;
    let mut b = b;
    while !b.is_zero_value() {
        let r = a.checked_rem(&b)?;
        a = b;
        b = r;
    }
    Ok(a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::natural::Natural;

    #[test]
    fn euclid_on_naturals() {
        let g = gcd(Natural::from_u64(693), Natural::from_u64(609)).unwrap();
        assert_eq!(g, Natural::from_u64(21));
    }

    #[test]
    fn gcd_with_zero_is_identity() {
        let g = gcd(Natural::from_u64(42), Natural::from_u64(0)).unwrap();
        assert_eq!(g, Natural::from_u64(42));
    }

    #[test]
    fn coprime_naturals() {
        let g = gcd(Natural::from_u64(17), Natural::from_u64(1)).unwrap();
        assert_eq!(g, Natural::from_u64(1));
    }

    #[test]
    fn worked_scenario_1() {
        let a = Natural::from_decimal_str("48123749817263487162398476123987461293846391").unwrap();
        let b = Natural::from_decimal_str("714263874612").unwrap();
        assert_eq!(gcd(a, b).unwrap(), Natural::from_u64(3));
    }
}
