// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements addition and subtraction.
//!
//! `a/b ± c/d = (a·d ± c·b) / (b·d)`, then reduce. Subtraction shares code
//! with addition by negating the right operand first.

use std::ops::{Add, Sub};

use crate::integer::Integer;
use crate::rational::core::Rational;

impl Add<&Rational> for &Rational {
    type Output = Rational;

    fn add(self, rhs: &Rational) -> Rational {
        let b = Integer::from_natural(self.denominator.clone());
        let d = Integer::from_natural(rhs.denominator.clone());
        let numerator = &(&self.numerator * &d) + &(&rhs.numerator * &b);
        let denominator = &self.denominator * &rhs.denominator;
        Rational::new(numerator, denominator).expect("product of two positive naturals is nonzero")
    }
}

impl Add<&Rational> for Rational {
    type Output = Rational;

    fn add(self, rhs: &Rational) -> Rational {
        (&self).add(rhs)
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(self, rhs: Rational) -> Rational {
        (&self).add(&rhs)
    }
}

impl Sub<&Rational> for &Rational {
    type Output = Rational;

    fn sub(self, rhs: &Rational) -> Rational {
        self.add(&(-rhs.clone()))
    }
}

impl Sub<&Rational> for Rational {
    type Output = Rational;

    fn sub(self, rhs: &Rational) -> Rational {
        (&self).sub(rhs)
    }
}

impl Sub for Rational {
    type Output = Rational;

    fn sub(self, rhs: Rational) -> Rational {
        (&self).sub(&rhs)
    }
}
