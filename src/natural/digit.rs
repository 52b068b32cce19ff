// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Defines the "base" of a [`super::Natural`].
//!
//! Unlike a typical binary bignum, digits here are base `B = 10^9` chunks of
//! decimal, not bits of a machine word — the spec's long division and
//! textual form both key off the decimal grouping. A Rust unsigned integer
//! type is still used as the storage "digit", and a larger type is needed
//! as "double-digit" for intermediate products during multiplication.

/// One base-`B` digit, little-endian within [`super::Natural`]'s storage.
pub(crate) type Digit = u32;

/// Wide enough to hold the product of two [`Digit`]s without overflow.
pub(crate) type DoubleDigit = u64;

/// `B`, the radix of a [`super::Natural`]'s digit sequence.
pub(crate) const BASE: Digit = 1_000_000_000;

/// Decimal digits per base-`B` digit (`B == 10^BITS_PER_NUM`).
pub(crate) const BITS_PER_NUM: usize = 9;

/// Per-operand digit count below which multiplication uses schoolbook
/// instead of Karatsuba.
pub(crate) const KARATSUBA_THRESHOLD: usize = 32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_matches_bits_per_num() {
        assert_eq!(BASE, 10_u32.pow(BITS_PER_NUM as u32));
    }
}
