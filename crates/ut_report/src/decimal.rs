//! Fixed-point rendering of exact rationals with truncation.
//!
//! Steps for `d` digits:
//! 1. scale `|v|` by `10^(d+1)` and round to nearest (half away from zero),
//!    i.e. format with one guard digit;
//! 2. drop the guard digit (cut, not round);
//! 3. strip trailing `'0'`s of the fraction, stopping at the decimal point,
//!    so an integral value keeps its point (`3.`, `0.`).
//!
//! `d = 0` prints the integer part only, without a point. All steps are big-integer exact, so
//! there is no precision ceiling and no output-length limit.

use num_bigint::BigInt;
use num_traits::Zero;

use ut_core::rational::pow10;
use ut_core::ExactRational;

/// Digit count used when the caller does not pass one.
pub const DEFAULT_DIGITS: u32 = 100;

/// Renderer configured once with its digit count; reused for every value.
#[derive(Clone, Debug)]
pub struct DecimalRenderer {
    digits: u32,
    // 10^(digits + 1), i.e. including the guard digit.
    scale: BigInt,
}

impl Default for DecimalRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_DIGITS)
    }
}

impl DecimalRenderer {
    pub fn new(digits: u32) -> Self {
        Self {
            digits,
            scale: pow10(digits as usize + 1),
        }
    }

    pub fn digits(&self) -> u32 {
        self.digits
    }

    /// Render `v` as a truncated fixed-point decimal string.
    pub fn render(&self, v: &ExactRational) -> String {
        let negative = v.is_negative();
        let magnitude = v.abs();
        let (num, den) = (magnitude.numer(), magnitude.denom());

        // round(num * scale / den), half away from zero; all operands ≥ 0.
        let two_den: BigInt = den * 2u32;
        let guarded: BigInt = (num * &self.scale * 2u32 + den) / &two_den;
        let kept: BigInt = guarded / 10u32;

        let d = self.digits as usize;
        let mut raw = kept.to_string();
        if raw.len() <= d {
            // Left-pad so there is always at least one integer digit.
            raw = format!("{}{raw}", "0".repeat(d + 1 - raw.len()));
        }
        let (int_part, frac_part) = raw.split_at(raw.len() - d);
        let frac_part = frac_part.trim_end_matches('0');

        let mut out = String::with_capacity(raw.len() + 2);
        if negative && !kept.is_zero() {
            out.push('-');
        }
        out.push_str(int_part);
        if d > 0 {
            out.push('.');
            out.push_str(frac_part);
        }
        out
    }
}

/// One-shot convenience for `DecimalRenderer::new(digits).render(v)`.
pub fn render_truncated(v: &ExactRational, digits: u32) -> String {
    DecimalRenderer::new(digits).render(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn q(s: &str) -> ExactRational {
        s.parse().unwrap()
    }

    #[test]
    fn truncates_instead_of_rounding() {
        assert_eq!(render_truncated(&q("1/3"), 5), "0.33333");
        assert_eq!(render_truncated(&q("2/3"), 3), "0.666");
        assert_eq!(render_truncated(&q("0.99989"), 3), "0.999");
    }

    #[test]
    fn strips_trailing_zeros() {
        assert_eq!(render_truncated(&q("1/2"), 10), "0.5");
        assert_eq!(render_truncated(&q("0.25"), 2), "0.25");
        assert_eq!(render_truncated(&q("0.2500"), 7), "0.25");
        assert_eq!(render_truncated(&q("28412122/2909907"), 20), "9.7639278506151571167");
        assert_eq!(render_truncated(&q("517/130"), 10), "3.9769230769");
    }

    #[test]
    fn trimming_stops_at_the_point() {
        assert_eq!(render_truncated(&q("3"), 5), "3.");
        assert_eq!(render_truncated(&ExactRational::zero(), 5), "0.");
        assert_eq!(render_truncated(&ExactRational::zero(), 100), "0.");
        assert_eq!(render_truncated(&q("120"), 2), "120.");
        assert_eq!(render_truncated(&q("120.001"), 2), "120.");
        assert_eq!(render_truncated(&q("-7"), 1), "-7.");
    }

    #[test]
    fn zero_digits_prints_integer_part() {
        assert_eq!(render_truncated(&q("9.76"), 0), "9");
        assert_eq!(render_truncated(&q("0.3"), 0), "0");
    }

    #[test]
    fn guard_digit_rounds_before_cut() {
        // Formatting with d+1 digits rounds 0.1996 to 0.200 before the cut.
        assert_eq!(render_truncated(&q("0.1996"), 2), "0.2");
        assert_eq!(render_truncated(&q("0.1994"), 2), "0.19");
        assert_eq!(render_truncated(&q("0.96"), 0), "1");
        assert_eq!(render_truncated(&q("0.99999"), 3), "1.");
        assert_eq!(render_truncated(&q("0.99949"), 3), "0.999");
    }

    #[test]
    fn negative_values() {
        assert_eq!(render_truncated(&q("-1/3"), 4), "-0.3333");
        assert_eq!(render_truncated(&q("-3/2"), 4), "-1.5");
        // Rounds to zero at this precision: no sign.
        assert_eq!(render_truncated(&q("-0.00001"), 2), "0.");
        assert_eq!(render_truncated(&q("-0.4"), 0), "0");
    }

    #[test]
    fn default_precision_is_one_hundred_digits() {
        let r = DecimalRenderer::default();
        assert_eq!(r.digits(), DEFAULT_DIGITS);
        let s = r.render(&q("1/3"));
        assert_eq!(s.len(), 2 + 100);
        assert!(s[2..].bytes().all(|b| b == b'3'));
    }

    #[test]
    fn long_output_has_no_ceiling() {
        let s = render_truncated(&q("1/7"), 5000);
        assert_eq!(s.len(), 2 + 5000);
        assert!(s.ends_with("14"));
        assert!(s.starts_with("0.142857142857"));
    }

    proptest! {
        #[test]
        fn agrees_with_floor_and_guard_carry(num in 0u64..1_000_000, den in 1u64..1_000, d in 0u32..8) {
            // Expected kept digits: floor(v·10^d), plus one when the remainder
            // reaches 0.95, which is exactly when the guard digit rounds up and
            // carries into the last kept digit.
            let (num, den) = (u128::from(num), u128::from(den));
            let scaled = num * 10u128.pow(d);
            let mut kept = scaled / den;
            if 20 * (scaled % den) >= 19 * den {
                kept += 1;
            }

            let v = ExactRational::from(num as u64) / ExactRational::from(den as u64);
            let out = render_truncated(&v, d);

            // Read the output back: it must denote kept / 10^d exactly.
            let back: ExactRational = out.parse().unwrap();
            let expected = ExactRational::from(kept as u64) / ExactRational::from(10u64.pow(d));
            prop_assert_eq!(back, expected);

            // Layout: a point iff d > 0, never a trailing '0' after it, at most d fractional digits.
            match out.split_once('.') {
                None => prop_assert_eq!(d, 0),
                Some((int_part, frac)) => {
                    prop_assert!(d > 0);
                    prop_assert!(!int_part.is_empty());
                    prop_assert!(!frac.ends_with('0'));
                    prop_assert!(frac.len() <= d as usize);
                }
            }
        }
    }
}
