// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The least common multiple, generic over [`EuclideanValue`] and
//! [`MultiplicativeValue`].

use crate::algorithm::gcd::gcd;
use crate::algorithm::traits::{EuclideanValue, MultiplicativeValue};
use crate::error::CasResult;

/// Computes `a * b / gcd(a, b)`, dividing before multiplying to keep the
/// intermediate magnitude small.
pub fn lcm<T>(a: T, b: T) -> CasResult<T>
where
    T: EuclideanValue + MultiplicativeValue,
{
    if a.is_zero_value() || b.is_zero_value() {
        return Ok(T::zero_value());
    }

    let g = gcd(a.clone(), b.clone())?;
    let quotient = a.checked_div(&g)?;
    quotient.checked_mul(&b)
}
