// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Defines `Polynomial`.

use crate::rational::Rational;

/// A univariate polynomial with rational coefficients.
///
/// `coefficients[i]` holds the coefficient of `x^i`. Canonical form has no
/// trailing (highest-degree) zero coefficient, except that the zero
/// polynomial is the single-element sequence `[0]`.
#[derive(Clone, Debug)]
pub struct Polynomial {
    pub(crate) coefficients: Vec<Rational>,
}

pub(crate) fn is_valid_coefficients(coefficients: &[Rational]) -> bool {
    !coefficients.is_empty()
        && (coefficients.len() == 1 || !coefficients.last().unwrap().is_zero())
}

impl Polynomial {
    /// Builds a `Polynomial` directly from already-canonical low-to-high
    /// coefficients.
    pub(crate) fn from_canonical_coefficients(coefficients: Vec<Rational>) -> Polynomial {
        debug_assert!(is_valid_coefficients(&coefficients));
        Polynomial { coefficients }
    }

    pub(crate) fn as_coefficients(&self) -> &[Rational] {
        debug_assert!(is_valid_coefficients(&self.coefficients));
        &self.coefficients
    }

    /// The polynomial's degree: `len() - 1`.
    pub fn degree(&self) -> usize {
        self.as_coefficients().len() - 1
    }

    /// The coefficient of the highest-degree term.
    pub fn major_coefficient(&self) -> &Rational {
        self.as_coefficients().last().unwrap()
    }
}

impl Default for Polynomial {
    fn default() -> Self {
        Polynomial::from_canonical_coefficients(vec![Rational::default()])
    }
}
