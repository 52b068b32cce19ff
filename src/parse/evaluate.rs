// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Folds a postfix token stream into a single [`Domain`] value.

use std::convert::TryFrom;

use crate::error::{CasError, CasResult};
use crate::integer::Integer;
use crate::natural::Natural;
use crate::parse::domain::Domain;
use crate::parse::shunting_yard::to_postfix;
use crate::parse::token::TokenTag;

/// Raises `base` to the power of `exponent` by repeated squaring, the same
/// binary-exponentiation shape [`crate::algorithm::pow`] uses for `Natural`
/// and `Integer`.
///
/// A negative exponent is handled via `1 / pow(base, -exponent)`, matching
/// the domain's own reciprocal rather than special-casing each domain.
fn pow<D: Domain>(base: &D, exponent: &Integer) -> CasResult<D> {
    if exponent.is_negative() {
        let positive = pow(base, &Integer::from_natural(exponent.magnitude().clone()))?;
        return D::one().checked_div(&positive);
    }

    let mut result = D::one();
    let mut base = base.clone();
    let mut remaining = exponent.magnitude().clone();
    let two = Natural::from_u64(2);

    while !remaining.is_zero() {
        let (quotient, bit) = remaining.checked_div_rem(&two).expect("2 is never zero");
        if !bit.is_zero() {
            result = result.mul(&base);
        }
        base = base.mul(&base);
        remaining = quotient;
    }

    Ok(result)
}

/// Narrows a non-negative [`Integer`] into a shift/exponent count.
fn shift_count_from_integer(value: &Integer) -> CasResult<usize> {
    if value.is_negative() {
        return Err(CasError::BadShiftCount);
    }
    let as_u64 = u64::try_from(value.magnitude()).map_err(|_| CasError::BadShiftCount)?;
    usize::try_from(as_u64).map_err(|_| CasError::BadShiftCount)
}

/// Evaluates an infix expression over a chosen [`Domain`].
///
/// Tokens are converted to postfix order, then folded left to right into a
/// value stack. Most operators pop two operands; as a convenience, `-` with
/// only one operand on the stack is read as unary minus. Any other operator
/// that finds only one operand returns that operand unchanged, a quirk kept
/// for compatibility with how this evaluator has always behaved.
pub fn evaluate<D: Domain>(input: &str) -> CasResult<D> {
    let postfix = to_postfix(input);
    let mut values: Vec<D> = Vec::new();

    for token in postfix {
        match token.tag {
            TokenTag::IntegerLiteral => values.push(D::from_natural_literal(token.text)?),
            TokenTag::None => return Err(CasError::BadToken(token.text.to_string())),
            _ => {
                let rhs = values.pop().ok_or(CasError::EmptyExpression)?;
                let value = match values.pop() {
                    None => match token.tag {
                        TokenTag::Sub => D::zero().sub(&rhs)?,
                        _ => rhs,
                    },
                    Some(lhs) => apply(token.tag, &lhs, &rhs)?,
                };
                values.push(value);
            }
        }
    }

    values.pop().ok_or(CasError::EmptyExpression)
}

fn apply<D: Domain>(tag: TokenTag, lhs: &D, rhs: &D) -> CasResult<D> {
    match tag {
        TokenTag::Add => Ok(lhs.add(rhs)),
        TokenTag::Sub => lhs.sub(rhs),
        TokenTag::Mul => Ok(lhs.mul(rhs)),
        TokenTag::Div => lhs.checked_div(rhs),
        TokenTag::Mod => lhs.checked_rem(rhs),
        TokenTag::Gcd => lhs.gcd(rhs),
        TokenTag::Lcm => lhs.lcm(rhs),
        TokenTag::Pow => pow(lhs, &rhs.numerator_as_integer()),
        TokenTag::Shl => lhs.checked_shl(shift_count_from_integer(&rhs.numerator_as_integer())?),
        TokenTag::Shr => Ok(lhs.shr(shift_count_from_integer(&rhs.numerator_as_integer())?)),
        TokenTag::None | TokenTag::LParen | TokenTag::RParen | TokenTag::IntegerLiteral => {
            unreachable!("shunting-yard never emits these tags as operators")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integer::Integer as Int;
    use crate::natural::Natural;
    use crate::rational::Rational;

    #[test]
    fn adds_and_multiplies_with_precedence() {
        let v: Natural = evaluate("1 + 2 * 3").unwrap();
        assert_eq!(v, Natural::from_u64(7));
    }

    #[test]
    fn parentheses_override_precedence() {
        let v: Natural = evaluate("(1 + 2) * 3").unwrap();
        assert_eq!(v, Natural::from_u64(9));
    }

    #[test]
    fn unary_minus_on_integers() {
        let v: Int = evaluate("-5 + 3").unwrap();
        assert_eq!(v, Int::from_i64(-2));
    }

    #[test]
    fn power_and_shift_over_rationals() {
        let v: Rational = evaluate("2 ^ 10").unwrap();
        assert_eq!(v, Rational::from_integer(Int::from_i64(1024)));
        let v: Rational = evaluate("3 << 2").unwrap();
        assert_eq!(v, Rational::from_integer(Int::from_i64(12)));
    }

    #[test]
    fn negative_exponent_takes_reciprocal() {
        let v: Rational = evaluate("2 ^ (0 - 3)").unwrap();
        assert_eq!(v, Rational::new(Int::from_i64(1), Natural::from_u64(8)).unwrap());
    }

    #[test]
    fn gcd_and_lcm_keywords() {
        let v: Natural = evaluate("12 gcd 18").unwrap();
        assert_eq!(v, Natural::from_u64(6));
    }

    #[test]
    fn worked_scenario_7() {
        // gcd/lcm are infix keyword operators, not function calls, and bind
        // tighter than `^`, so no parentheses are needed around the gcd term.
        let v: Rational = evaluate("(2 + 3) * 12 gcd 18 ^ 2").unwrap();
        assert_eq!(v, Rational::from_integer(Int::from_i64(180)));
    }

    #[test]
    fn bad_token_is_reported() {
        let err = evaluate::<Natural>("1 , 2").unwrap_err();
        assert!(matches!(err, CasError::BadToken(_)));
    }

    #[test]
    fn empty_expression_is_reported() {
        let err = evaluate::<Natural>("   ").unwrap_err();
        assert_eq!(err, CasError::EmptyExpression);
    }
}
