// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements the textual form of [`Integer`].

use std::fmt;

use crate::integer::core::Integer;

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_sign_negative() {
            write!(f, "-")?;
        }
        write!(f, "{}", self.magnitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_with_leading_minus() {
        assert_eq!(Integer::from_i64(-42).to_string(), "-42");
        assert_eq!(Integer::from_i64(42).to_string(), "42");
        assert_eq!(Integer::from_i64(0).to_string(), "0");
    }
}
