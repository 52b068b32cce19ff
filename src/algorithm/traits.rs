// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Small capability traits that let [`super::gcd`], [`super::lcm`] and
//! [`super::pow`] operate over `Natural`, `Integer` and `Polynomial`
//! without being written three times.

use crate::error::CasResult;

/// A value with a Euclidean remainder: enough structure to run the
/// Euclidean algorithm.
pub trait EuclideanValue: Sized + Clone {
    fn is_zero_value(&self) -> bool;
    fn zero_value() -> Self;
    fn checked_rem(&self, other: &Self) -> CasResult<Self>;
}

/// A value that can be multiplied and exactly divided, needed on top of
/// [`EuclideanValue`] to compute an `lcm`.
pub trait MultiplicativeValue: Sized + Clone {
    fn checked_mul(&self, other: &Self) -> CasResult<Self>;
    fn checked_div(&self, other: &Self) -> CasResult<Self>;
}

/// A value with a multiplicative identity, needed to seed [`super::pow`].
pub trait MultiplicativeIdentity: Sized + Clone {
    fn one_value() -> Self;
}
