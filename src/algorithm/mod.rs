// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Domain-generic `gcd`, `lcm` and `pow`, dispatching on the small
//! capability traits in [`traits`] instead of being written once per
//! numeric domain.

mod gcd;
mod lcm;
mod pow;
pub mod traits;

pub use gcd::gcd;
pub use lcm::lcm;
pub use pow::pow;
