// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements addition and subtraction.
//!
//! Subtraction shares code with addition via negate-add-negate, matching
//! how `Rational` itself routes subtraction through negation.

use std::ops::{Add, Neg, Sub};

use crate::container::trim_trailing_while;
use crate::polynomial::core::Polynomial;
use crate::rational::Rational;

fn add_coefficients(a: &[Rational], b: &[Rational]) -> Vec<Rational> {
    let mut result: Vec<Rational> = a.to_vec();
    if b.len() > result.len() {
        result.resize(b.len(), Rational::default());
    }
    for (i, coefficient) in b.iter().enumerate() {
        result[i] = &result[i] + coefficient;
    }
    trim_trailing_while(&mut result, |c| c.is_zero());
    result
}

impl Add<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Polynomial {
        Polynomial::from_canonical_coefficients(add_coefficients(
            self.as_coefficients(),
            rhs.as_coefficients(),
        ))
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Polynomial) -> Polynomial {
        (&self).add(&rhs)
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        let negated: Vec<Rational> = self.as_coefficients().iter().map(|c| -c.clone()).collect();
        Polynomial::from_canonical_coefficients(negated)
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        (&self).neg()
    }
}

impl Sub<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Polynomial {
        self.add(&rhs.neg())
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Polynomial) -> Polynomial {
        (&self).sub(&rhs)
    }
}
