// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Exponentiation by squaring, generic over [`MultiplicativeIdentity`].

use crate::algorithm::traits::MultiplicativeIdentity;
use crate::natural::Natural;

/// Raises `base` to the `exponent`-th power using binary exponentiation:
/// `O(log exponent)` multiplications instead of `O(exponent)`.
pub fn pow<T>(base: &T, exponent: &Natural, mul: impl Fn(&T, &T) -> T) -> T
where
    T: MultiplicativeIdentity,
{
    let mut result = T::one_value();
    let mut base = base.clone();
    let mut exponent = exponent.clone();
    let two = Natural::from_u64(2);

    while !exponent.is_zero() {
        if !exponent.is_even() {
            result = mul(&result, &base);
        }
        base = mul(&base, &base);
        exponent = exponent
            .checked_div_rem(&two)
            .expect("2 is never zero")
            .0;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integer::Integer;

    #[test]
    fn pow_of_integer() {
        let result = pow(&Integer::from_i64(3), &Natural::from_u64(4), |a, b| a * b);
        assert_eq!(result, Integer::from_i64(81));
    }

    #[test]
    fn pow_zero_is_one() {
        let result = pow(&Integer::from_i64(7), &Natural::from_u64(0), |a, b| a * b);
        assert_eq!(result, Integer::from_i64(1));
    }
}
