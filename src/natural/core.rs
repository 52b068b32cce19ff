// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Defines [`Natural`].

use super::digit::{Digit, BASE};

/// An arbitrary-precision non-negative integer.
///
/// Digits are stored in base `B = 10^9`, little-endian order (the least
/// significant digit is at index 0). Canonical form has no trailing
/// (most-significant) zero digit, except that zero itself is the
/// single-element sequence `[0]`.
#[derive(Clone, Debug)]
pub struct Natural {
    pub(crate) digits: Vec<Digit>,
}

/// Returns whether `digits` is a canonical digit sequence: non-empty, every
/// digit `< B`, and no trailing zero unless it is the single digit `0`.
pub(crate) fn is_valid_digits(digits: &[Digit]) -> bool {
    !digits.is_empty()
        && digits.iter().all(|&d| d < BASE)
        && (digits.len() == 1 || *digits.last().unwrap() != 0)
}

impl Natural {
    /// Builds a `Natural` directly from already-canonical little-endian
    /// digits. Only for use by code within this crate that has just
    /// produced a canonical sequence; everything reachable from outside
    /// the crate goes through a validating constructor or a mutator that
    /// re-trims.
    pub(crate) fn from_canonical_digits(digits: Vec<Digit>) -> Natural {
        debug_assert!(is_valid_digits(&digits));
        Natural { digits }
    }

    pub(crate) fn as_digits(&self) -> &[Digit] {
        debug_assert!(is_valid_digits(&self.digits));
        &self.digits
    }

    /// The number of base-`B` digits in this value's canonical form.
    pub(crate) fn digit_len(&self) -> usize {
        self.digits.len()
    }
}

impl Default for Natural {
    fn default() -> Self {
        Natural::from_canonical_digits(vec![0])
    }
}
