// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reads a domain selector and an expression from standard input and
//! prints the result.
//!
//! # Examples
//!
//! ```text
//! domain [N/Z/Q/P]: Q
//! expression: 2 ^ 10 / 3
//! 1024/3
//! ```
//!
//! For `P`, the expression line is instead an operation name (`der`, `gcd`,
//! `lcm`, `+`/`add`, `-`/`sub`, `*`/`mul`, `/`/`div`, `%`/`mod`) followed by
//! one or two polynomial lines.

use std::io::{self, BufRead, Write};

use bignum_cas::error::CasError;
use bignum_cas::integer::Integer;
use bignum_cas::natural::Natural;
use bignum_cas::parse::{evaluate, parse_polynomial_strict};
use bignum_cas::polynomial::Polynomial;
use bignum_cas::rational::Rational;

fn prompt(message: &str) -> io::Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn run_number_domain(selector: char) -> Result<String, CasError> {
    let expression = prompt("expression: ").expect("failed to read standard input");
    match selector {
        'n' => evaluate::<Natural>(&expression).map(|v| v.to_string()),
        'z' => evaluate::<Integer>(&expression).map(|v| v.to_string()),
        'q' => evaluate::<Rational>(&expression).map(|v| v.to_string()),
        _ => unreachable!("caller already validated the selector"),
    }
}

fn read_polynomial(label: &str) -> Result<Polynomial, CasError> {
    let line = prompt(label).expect("failed to read standard input");
    parse_polynomial_strict(&line)
}

fn run_polynomial_domain() -> Result<String, CasError> {
    let operation = prompt("operation [der/gcd/lcm/+/-/*//%]: ").expect("failed to read standard input");

    if operation == "der" {
        let a = read_polynomial("polynomial: ")?;
        return Ok(a.derivative().to_string());
    }

    let a = read_polynomial("polynomial a: ")?;
    let b = read_polynomial("polynomial b: ")?;

    match operation.as_str() {
        "gcd" => a.gcd(&b).map(|p| p.to_string()),
        "lcm" => a.lcm(&b).map(|p| p.to_string()),
        "+" | "add" => Ok((&a + &b).to_string()),
        "-" | "sub" => Ok((&a - &b).to_string()),
        "*" | "mul" => Ok((&a * &b).to_string()),
        "/" | "div" => a.long_div(&b).map(|(quotient, _)| quotient.to_string()),
        "%" | "mod" => a.long_div(&b).map(|(_, remainder)| remainder.to_string()),
        _ => Err(CasError::BadToken(operation)),
    }
}

fn main() {
    let selector = prompt("domain [N/Z/Q/P]: ").expect("failed to read standard input");
    let selector = match selector.chars().next() {
        Some(c) => c.to_ascii_lowercase(),
        None => {
            println!("error: missing domain selector");
            return;
        }
    };

    let result = match selector {
        'n' | 'z' | 'q' => run_number_domain(selector),
        'p' => run_polynomial_domain(),
        _ => Err(CasError::BadToken(selector.to_string())),
    };

    match result {
        Ok(text) => println!("{text}"),
        Err(err) => println!("error: {err}"),
    }
}
