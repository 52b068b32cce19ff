// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Converts an infix token stream to postfix order.

use crate::parse::token::{next_token, Token, TokenTag};

/// Runs the shunting-yard algorithm over `input`, returning tokens in
/// postfix order.
///
/// Unmatched parentheses are tolerated: an `RParen` with no matching
/// `LParen` simply drains the operator stack; any leftover `LParen`s are
/// drained to the output at the end. Arity mismatches this creates are
/// left for the evaluator to surface.
pub(crate) fn to_postfix(input: &str) -> Vec<Token<'_>> {
    let mut output = Vec::new();
    let mut operators: Vec<Token<'_>> = Vec::new();
    let mut rest = input;

    while let Some((token, remaining)) = next_token(rest) {
        rest = remaining;
        match token.tag {
            TokenTag::IntegerLiteral | TokenTag::None => output.push(token),
            TokenTag::LParen => operators.push(token),
            TokenTag::RParen => {
                while let Some(top) = operators.last() {
                    if top.tag == TokenTag::LParen {
                        operators.pop();
                        break;
                    }
                    output.push(operators.pop().unwrap());
                }
            }
            _ => {
                while let Some(top) = operators.last() {
                    if top.tag.is_binary_operator() && top.tag.precedence() >= token.tag.precedence() {
                        output.push(operators.pop().unwrap());
                    } else {
                        break;
                    }
                }
                operators.push(token);
            }
        }
    }

    while let Some(op) = operators.pop() {
        output.push(op);
    }

    output
}
