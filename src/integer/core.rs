// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Defines `Integer`.

use crate::natural::Natural;

/// An arbitrary-precision signed integer.
///
/// Represented as a magnitude ([`Natural`]) and a [`Sign`]. Zero is always
/// canonically [`Sign::Positive`].
#[derive(Clone, Debug)]
pub struct Integer {
    pub(crate) magnitude: Natural,
    pub(crate) sign: Sign,
}

/// The sign of an [`Integer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Sign {
    Positive,
    Negative,
}

impl Sign {
    pub(crate) fn negate(self) -> Sign {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }

    pub(crate) fn xor(self, other: Sign) -> Sign {
        if self == other {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

impl Integer {
    /// Builds an `Integer` from a magnitude and a sign, canonicalizing the
    /// sign of zero to positive.
    pub(crate) fn from_parts(magnitude: Natural, sign: Sign) -> Integer {
        let sign = if magnitude.is_zero() { Sign::Positive } else { sign };
        Integer { magnitude, sign }
    }

    pub(crate) fn is_sign_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    pub(crate) fn magnitude(&self) -> &Natural {
        &self.magnitude
    }
}

impl Default for Integer {
    fn default() -> Self {
        Integer::from_parts(Natural::default(), Sign::Positive)
    }
}
