// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements the textual form of [`Polynomial`]: highest degree to
//! lowest, skipping zero terms, eliding unit coefficients and the implicit
//! exponent on `x`.

use std::fmt;

use crate::integer::Integer;
use crate::natural::Natural;
use crate::polynomial::core::Polynomial;
use crate::rational::Rational;

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let one = Rational::new(Integer::from_i64(1), Natural::from_u64(1)).unwrap();
        let coefficients = self.as_coefficients();
        let mut first = true;

        for i in (0..=self.degree()).rev() {
            let c = &coefficients[i];
            if c.is_zero() {
                continue;
            }

            let negative = c.is_negative();
            if first {
                if negative {
                    write!(f, "-")?;
                }
                first = false;
            } else {
                write!(f, " {} ", if negative { "-" } else { "+" })?;
            }

            let magnitude = if negative { -c.clone() } else { c.clone() };
            let elide_magnitude = i != 0 && magnitude == one;

            match i {
                0 => write!(f, "{magnitude}")?,
                1 => {
                    if !elide_magnitude {
                        write!(f, "{magnitude}")?;
                    }
                    write!(f, "x")?;
                }
                _ => {
                    if !elide_magnitude {
                        write!(f, "{magnitude}")?;
                    }
                    write!(f, "x^{i}")?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(n: i64, d: u64) -> Rational {
        Rational::new(Integer::from_i64(n), Natural::from_u64(d)).unwrap()
    }

    #[test]
    fn zero_polynomial_prints_zero() {
        assert_eq!(Polynomial::default().to_string(), "0");
    }

    #[test]
    fn elides_unit_coefficients_and_caret_one() {
        // x^2 - x + 1
        let p = Polynomial::from_high_to_low(vec![r(1, 1), r(-1, 1), r(1, 1)]);
        assert_eq!(p.to_string(), "x^2 - x + 1");
    }

    #[test]
    fn keeps_nonunit_coefficients_and_fractions() {
        // 3/2 x^2 + 4
        let p = Polynomial::from_high_to_low(vec![r(3, 2), r(0, 1), r(4, 1)]);
        assert_eq!(p.to_string(), "3/2x^2 + 4");
    }

    #[test]
    fn single_constant_term() {
        let p = Polynomial::from_high_to_low(vec![r(-5, 1)]);
        assert_eq!(p.to_string(), "-5");
    }
}
