// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! An arbitrary-precision computer-algebra kernel.
//!
//! Builds up four numeric domains, each implemented in terms of the one
//! before it: [`natural::Natural`] (non-negative integers), [`integer`]
//! (signed integers), [`rational`] (reduced fractions) and [`polynomial`]
//! (univariate polynomials with rational coefficients). [`algorithm`] holds
//! the domain-generic `gcd`/`lcm`/`pow`, and [`parse`] turns an infix
//! expression string into a value in one of these domains.

pub(crate) mod container;
pub mod error;

pub mod natural;

pub mod integer;

pub mod rational;

pub mod polynomial;

pub mod algorithm;

pub mod parse;
