// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parses the textual polynomial form `3x^2 - x + 1` into a [`Polynomial`].
//!
//! A term is `[coefficient [* ]] [ x [^ degree] ]`: coefficient and degree
//! are themselves handed to [`evaluate`], so `2/3x^2` and `x^(1+1)` both
//! work. Terms are summed by degree, so `x + x` and `2x` parse to the same
//! polynomial.

use std::collections::BTreeMap;
use std::convert::TryFrom;

use crate::error::{CasError, CasResult};
use crate::natural::Natural;
use crate::parse::evaluate::evaluate;
use crate::polynomial::Polynomial;
use crate::rational::Rational;

fn insert_plus_before_minus(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 4);
    for c in text.chars() {
        if c == '-' {
            out.push('+');
        }
        out.push(c);
    }
    out
}

fn validate_node(node: &str) -> CasResult<()> {
    if node.is_empty() {
        return Err(CasError::BadToken(node.to_string()));
    }

    let mul = node.find('*');
    let x = node.find('x');

    if let (Some(m), Some(xi)) = (mul, x) {
        if xi < m {
            return Err(CasError::BadToken(node.to_string()));
        }
    }

    if x.is_none() && !node.chars().any(|c| c.is_ascii_digit()) {
        return Err(CasError::BadToken(node.to_string()));
    }

    if let Some(m) = mul {
        if m == 0 || x.is_none() {
            return Err(CasError::BadToken(node.to_string()));
        }
    }

    Ok(())
}

/// Parses a single term into its `(degree, coefficient)` pair.
fn parse_node(node: &str) -> CasResult<(usize, Rational)> {
    validate_node(node)?;

    let mul = node.find('*');
    let x = node.find('x');
    let power_sign = x.and_then(|xi| node[xi + 1..].find('^').map(|p| xi + 1 + p));

    let coefficient_end = mul.or(x).unwrap_or(node.len());
    let mut coefficient_text = &node[..coefficient_end];
    let should_negate = coefficient_text.starts_with('-');
    if should_negate {
        coefficient_text = &coefficient_text[1..];
    }
    if coefficient_text.is_empty() {
        coefficient_text = "1";
    }

    let mut coefficient: Rational = evaluate(coefficient_text)?;
    if should_negate {
        coefficient = -coefficient;
    }

    let degree = if x.is_none() {
        0
    } else if let Some(power_sign) = power_sign {
        let degree_text = &node[power_sign + 1..];
        let degree_value: Natural = evaluate(degree_text)?;
        usize::try_from(u64::try_from(&degree_value).map_err(|_| CasError::BadToken(node.to_string()))?)
            .map_err(|_| CasError::BadToken(node.to_string()))?
    } else {
        1
    };

    Ok((degree, coefficient))
}

fn parse_terms(expression: &str, strict: bool) -> CasResult<BTreeMap<usize, Rational>> {
    let with_explicit_signs = insert_plus_before_minus(expression);
    let stripped: String = with_explicit_signs.chars().filter(|c| !c.is_whitespace()).collect();

    let mut coefficients: BTreeMap<usize, Rational> = BTreeMap::new();
    for node in stripped.split('+') {
        if node.is_empty() {
            continue;
        }
        match parse_node(node) {
            Ok((degree, coefficient)) => {
                let accumulated = coefficients.remove(&degree).unwrap_or_default();
                coefficients.insert(degree, &accumulated + &coefficient);
            }
            Err(err) if strict => return Err(err),
            Err(_) => {}
        }
    }
    Ok(coefficients)
}

/// Parses `expression`, propagating the first term that fails to parse.
pub fn parse_polynomial_strict(expression: &str) -> CasResult<Polynomial> {
    let coefficients = parse_terms(expression, true)?;
    Ok(Polynomial::from_degree_map(coefficients))
}

/// Parses `expression`, silently dropping any term that fails to parse.
pub fn parse_polynomial_lenient(expression: &str) -> Polynomial {
    let coefficients = parse_terms(expression, false).expect("lenient mode never returns Err");
    Polynomial::from_degree_map(coefficients)
}
