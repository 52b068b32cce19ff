// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The error surface shared by every domain in this crate.
//!
//! Every fallible operation in `natural`, `integer`, `rational`, `polynomial`
//! and `parse` returns [`CasError`]. There is no recovery inside the core;
//! callers (the CLI included) catch at their own boundary.

use std::fmt;
use std::fmt::Display;

/// An error raised by the computer-algebra kernel.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum CasError {
    /// An empty or non-digit string was passed where a `Natural` literal was
    /// expected, or a raw digit sequence held a digit `>= B`.
    InvalidInput(String),
    /// A `Natural` subtraction would have produced a negative result.
    Underflow,
    /// A `Natural` or `Integer` division or remainder by zero.
    DivisionByZero,
    /// A `Polynomial` division whose divisor is the zero polynomial.
    DivisionByZeroPolynomial,
    /// A `Rational` was constructed with a zero denominator, or divided by
    /// a zero rational.
    DenominatorIsZero,
    /// A `Polynomial` coefficient was accessed past its degree.
    DegreeOutOfRange { degree: usize, len: usize },
    /// A left shift would have overflowed the size type.
    LengthError,
    /// The tokenizer could not match the remaining expression prefix.
    BadToken(String),
    /// The evaluator finished with an empty value stack.
    EmptyExpression,
    /// A shift exponent did not reduce to a non-negative, in-range integer.
    BadShiftCount,
}

impl Display for CasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CasError::InvalidInput(s) => write!(f, "invalid input: {s:?}"),
            CasError::Underflow => write!(f, "natural subtraction underflow"),
            CasError::DivisionByZero => write!(f, "division by zero"),
            CasError::DivisionByZeroPolynomial => write!(f, "division by the zero polynomial"),
            CasError::DenominatorIsZero => write!(f, "rational denominator is zero"),
            CasError::DegreeOutOfRange { degree, len } => {
                write!(f, "degree {degree} out of range for polynomial of length {len}")
            }
            CasError::LengthError => write!(f, "shift would overflow the length type"),
            CasError::BadToken(s) => write!(f, "could not tokenize: {s:?}"),
            CasError::EmptyExpression => write!(f, "expression evaluated to no value"),
            CasError::BadShiftCount => write!(f, "shift count is not a valid non-negative integer"),
        }
    }
}

impl std::error::Error for CasError {}

pub type CasResult<T> = Result<T, CasError>;
