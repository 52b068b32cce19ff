// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Univariate polynomials with rational coefficients.

mod add;
mod at;
mod content;
mod core;
mod derivative;
mod display;
mod divrem;
mod from;
mod gcd_lcm;
mod mul;
mod shift;
mod squarefree;
mod zero;

pub use self::core::Polynomial;
