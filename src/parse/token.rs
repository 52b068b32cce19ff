// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The token table and tokenizer shared by the expression parser.

/// The canonical token set: `+ - * / ^ mod gcd lcm << >> ( )`, plus a run
/// of decimal digits for `IntegerLiteral`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TokenTag {
    /// Sentinel for an unrecognized prefix.
    None,
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Mod,
    Gcd,
    Lcm,
    Shl,
    Shr,
    LParen,
    RParen,
    IntegerLiteral,
}

impl TokenTag {
    pub(crate) fn is_binary_operator(self) -> bool {
        !matches!(
            self,
            TokenTag::None | TokenTag::LParen | TokenTag::RParen | TokenTag::IntegerLiteral
        )
    }

    /// Lowest to highest: `{Add, Sub} < {Mul, Div, Mod} < {Shl, Shr, Pow} <
    /// {Gcd, Lcm}`.
    pub(crate) fn precedence(self) -> u8 {
        match self {
            TokenTag::Add | TokenTag::Sub => 0,
            TokenTag::Mul | TokenTag::Div | TokenTag::Mod => 1,
            TokenTag::Shl | TokenTag::Shr | TokenTag::Pow => 2,
            TokenTag::Gcd | TokenTag::Lcm => 3,
            TokenTag::None | TokenTag::LParen | TokenTag::RParen | TokenTag::IntegerLiteral => 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    pub(crate) tag: TokenTag,
    pub(crate) text: &'a str,
}

const SYMBOLIC_TOKENS: &[(&str, TokenTag)] = &[
    ("<<", TokenTag::Shl),
    (">>", TokenTag::Shr),
    ("mod", TokenTag::Mod),
    ("gcd", TokenTag::Gcd),
    ("lcm", TokenTag::Lcm),
    ("+", TokenTag::Add),
    ("-", TokenTag::Sub),
    ("*", TokenTag::Mul),
    ("/", TokenTag::Div),
    ("^", TokenTag::Pow),
    ("(", TokenTag::LParen),
    (")", TokenTag::RParen),
];

fn match_token(candidate: &str) -> Option<TokenTag> {
    if !candidate.is_empty() && candidate.bytes().all(|b| b.is_ascii_digit()) {
        return Some(TokenTag::IntegerLiteral);
    }

    SYMBOLIC_TOKENS
        .iter()
        .find(|(text, _)| *text == candidate)
        .map(|(_, tag)| *tag)
}

/// Skips leading blanks, then greedily matches the longest prefix of what
/// remains against the token table (trying the full remaining length down
/// to one character). Returns the matched token and the unconsumed rest of
/// the input, or `None` once only blanks remain.
///
/// If no prefix matches at any length, returns a single unmatched
/// character tagged [`TokenTag::None`] so the caller can report it and
/// scanning still makes progress.
pub(crate) fn next_token(input: &str) -> Option<(Token<'_>, &str)> {
    let trimmed = input.trim_start();
    if trimmed.is_empty() {
        return None;
    }

    for end in (1..=trimmed.len()).rev() {
        if !trimmed.is_char_boundary(end) {
            continue;
        }
        let candidate = &trimmed[..end];
        if let Some(tag) = match_token(candidate) {
            return Some((Token { tag, text: candidate }, &trimmed[end..]));
        }
    }

    let bad_end = trimmed
        .char_indices()
        .nth(1)
        .map_or(trimmed.len(), |(i, _)| i);
    Some((
        Token { tag: TokenTag::None, text: &trimmed[..bad_end] },
        &trimmed[bad_end..],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(input: &str) -> Vec<TokenTag> {
        let mut rest = input;
        let mut out = Vec::new();
        while let Some((token, remaining)) = next_token(rest) {
            out.push(token.tag);
            rest = remaining;
        }
        out
    }

    #[test]
    fn tokenizes_a_mixed_expression() {
        assert_eq!(
            tags("(2 + 3) * gcd(12, 18) ^ 2"),
            vec![
                TokenTag::LParen,
                TokenTag::IntegerLiteral,
                TokenTag::Add,
                TokenTag::IntegerLiteral,
                TokenTag::RParen,
                TokenTag::Mul,
                TokenTag::Gcd,
                TokenTag::LParen,
                TokenTag::IntegerLiteral,
                TokenTag::None, // comma is not in the token table
                TokenTag::IntegerLiteral,
                TokenTag::RParen,
                TokenTag::Pow,
                TokenTag::IntegerLiteral,
            ]
        );
    }

    #[test]
    fn longest_match_prefers_shl_over_two_subs() {
        let (token, rest) = next_token("<<5").unwrap();
        assert_eq!(token.tag, TokenTag::Shl);
        assert_eq!(rest, "5");
    }

    #[test]
    fn keyword_operators_match_exactly() {
        let (token, rest) = next_token("mod 3").unwrap();
        assert_eq!(token.tag, TokenTag::Mod);
        assert_eq!(rest, " 3");
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(next_token("").is_none());
        assert!(next_token("   ").is_none());
    }
}
