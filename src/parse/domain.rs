// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The small capability interface the expression evaluator needs, and its
//! implementations for [`Natural`], [`Integer`] and [`Rational`].
//!
//! The evaluator is written once, generic over [`Domain`], instead of once
//! per selectable CLI domain.

use crate::algorithm;
use crate::error::CasResult;
use crate::integer::Integer;
use crate::natural::Natural;
use crate::rational::Rational;

/// The operations the expression evaluator needs from a result domain.
pub trait Domain: Sized + Clone {
    /// Parses an `IntegerLiteral` token (an unsigned decimal run) into this
    /// domain via `Natural` promotion.
    fn from_natural_literal(text: &str) -> CasResult<Self>;

    fn zero() -> Self;
    fn one() -> Self;

    fn add(&self, other: &Self) -> Self;
    fn sub(&self, other: &Self) -> CasResult<Self>;
    fn mul(&self, other: &Self) -> Self;
    fn checked_div(&self, other: &Self) -> CasResult<Self>;
    fn checked_rem(&self, other: &Self) -> CasResult<Self>;
    fn gcd(&self, other: &Self) -> CasResult<Self>;
    fn lcm(&self, other: &Self) -> CasResult<Self>;
    fn checked_shl(&self, count: usize) -> CasResult<Self>;
    fn shr(&self, count: usize) -> Self;

    /// The value's numerator when viewed as a rational: used to extract a
    /// `Pow` exponent or a `Shl`/`Shr` count from the right-hand operand.
    fn numerator_as_integer(&self) -> Integer;
}

impl Domain for Natural {
    fn from_natural_literal(text: &str) -> CasResult<Self> {
        Natural::from_decimal_str(text)
    }

    fn zero() -> Self {
        Natural::default()
    }

    fn one() -> Self {
        Natural::from_u64(1)
    }

    fn add(&self, other: &Self) -> Self {
        self + other
    }

    fn sub(&self, other: &Self) -> CasResult<Self> {
        self.checked_sub(other)
    }

    fn mul(&self, other: &Self) -> Self {
        self * other
    }

    fn checked_div(&self, other: &Self) -> CasResult<Self> {
        Ok(self.checked_div_rem(other)?.0)
    }

    fn checked_rem(&self, other: &Self) -> CasResult<Self> {
        Ok(self.checked_div_rem(other)?.1)
    }

    fn gcd(&self, other: &Self) -> CasResult<Self> {
        algorithm::gcd(self.clone(), other.clone())
    }

    fn lcm(&self, other: &Self) -> CasResult<Self> {
        algorithm::lcm(self.clone(), other.clone())
    }

    fn checked_shl(&self, count: usize) -> CasResult<Self> {
        Natural::checked_shl(self, count)
    }

    fn shr(&self, count: usize) -> Self {
        Natural::shr(self, count)
    }

    fn numerator_as_integer(&self) -> Integer {
        Integer::from_natural(self.clone())
    }
}

impl Domain for Integer {
    fn from_natural_literal(text: &str) -> CasResult<Self> {
        Ok(Integer::from_natural(Natural::from_decimal_str(text)?))
    }

    fn zero() -> Self {
        Integer::default()
    }

    fn one() -> Self {
        Integer::from_i64(1)
    }

    fn add(&self, other: &Self) -> Self {
        self + other
    }

    fn sub(&self, other: &Self) -> CasResult<Self> {
        Ok(self - other)
    }

    fn mul(&self, other: &Self) -> Self {
        self * other
    }

    fn checked_div(&self, other: &Self) -> CasResult<Self> {
        Ok(self.checked_div_rem(other)?.0)
    }

    fn checked_rem(&self, other: &Self) -> CasResult<Self> {
        Ok(self.checked_div_rem(other)?.1)
    }

    fn gcd(&self, other: &Self) -> CasResult<Self> {
        algorithm::gcd(self.clone(), other.clone())
    }

    fn lcm(&self, other: &Self) -> CasResult<Self> {
        algorithm::lcm(self.clone(), other.clone())
    }

    fn checked_shl(&self, count: usize) -> CasResult<Self> {
        Integer::checked_shl(self, count)
    }

    fn shr(&self, count: usize) -> Self {
        Integer::shr(self, count)
    }

    fn numerator_as_integer(&self) -> Integer {
        self.clone()
    }
}

impl Domain for Rational {
    fn from_natural_literal(text: &str) -> CasResult<Self> {
        Ok(Rational::from_integer(Integer::from_natural(Natural::from_decimal_str(text)?)))
    }

    fn zero() -> Self {
        Rational::default()
    }

    fn one() -> Self {
        Rational::from_integer(Integer::from_i64(1))
    }

    fn add(&self, other: &Self) -> Self {
        self + other
    }

    fn sub(&self, other: &Self) -> CasResult<Self> {
        Ok(self - other)
    }

    fn mul(&self, other: &Self) -> Self {
        self * other
    }

    fn checked_div(&self, other: &Self) -> CasResult<Self> {
        Rational::checked_div(self, other)
    }

    fn checked_rem(&self, other: &Self) -> CasResult<Self> {
        Ok(self.rem_forced_zero())
    }

    fn gcd(&self, other: &Self) -> CasResult<Self> {
        Ok(Rational::gcd(self, other))
    }

    fn lcm(&self, other: &Self) -> CasResult<Self> {
        Ok(Rational::lcm(self, other))
    }

    fn checked_shl(&self, count: usize) -> CasResult<Self> {
        Rational::checked_shl(self, count)
    }

    fn shr(&self, count: usize) -> Self {
        Rational::shr(self, count)
    }

    fn numerator_as_integer(&self) -> Integer {
        self.numerator().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_literal_promotes_through_each_domain() {
        assert_eq!(Natural::from_natural_literal("42").unwrap(), Natural::from_u64(42));
        assert_eq!(Integer::from_natural_literal("42").unwrap(), Integer::from_i64(42));
        assert_eq!(
            Rational::from_natural_literal("42").unwrap(),
            Rational::from_integer(Integer::from_i64(42))
        );
    }
}
