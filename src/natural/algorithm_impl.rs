// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements the capability traits [`crate::algorithm`] needs to run
//! `gcd`/`lcm`/`pow` over [`Natural`].

use crate::algorithm::traits::{EuclideanValue, MultiplicativeIdentity, MultiplicativeValue};
use crate::error::CasResult;
use crate::natural::core::Natural;

impl EuclideanValue for Natural {
    fn is_zero_value(&self) -> bool {
        self.is_zero()
    }

    fn zero_value() -> Self {
        Natural::default()
    }

    fn checked_rem(&self, other: &Self) -> CasResult<Self> {
        Ok(self.checked_div_rem(other)?.1)
    }
}

impl MultiplicativeValue for Natural {
    fn checked_mul(&self, other: &Self) -> CasResult<Self> {
        Ok(self * other)
    }

    fn checked_div(&self, other: &Self) -> CasResult<Self> {
        Ok(self.checked_div_rem(other)?.0)
    }
}

impl MultiplicativeIdentity for Natural {
    fn one_value() -> Self {
        Natural::from_u64(1)
    }
}
