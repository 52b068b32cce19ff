// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements the textual form of [`Natural`].

use std::fmt;

use crate::natural::core::Natural;
use crate::natural::digit::BITS_PER_NUM;

impl fmt::Display for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.as_digits();
        let mut iter = digits.iter().rev();
        // Most significant digit is written unpadded; every following digit
        // is zero-padded to BITS_PER_NUM characters.
        write!(f, "{}", iter.next().unwrap())?;
        for digit in iter {
            write!(f, "{digit:0width$}", width = BITS_PER_NUM)?;
        }
        Ok(())
    }
}
