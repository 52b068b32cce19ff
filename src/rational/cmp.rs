// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Equality and ordering for [`Rational`].
//!
//! Canonical form is unique (always reduced, denominator positive), so
//! equality is just componentwise equality; ordering cross-multiplies.

use std::cmp::Ordering;

use crate::rational::core::Rational;

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        self.numerator == other.numerator && self.denominator == other.denominator
    }
}

impl Eq for Rational {}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // a/b vs c/d, both b, d > 0: compare a*d vs c*b.
        let lhs = &self.numerator * &crate::integer::Integer::from_natural(other.denominator.clone());
        let rhs = &other.numerator * &crate::integer::Integer::from_natural(self.denominator.clone());
        lhs.cmp(&rhs)
    }
}
