//! crates/ut_core/src/rational.rs
//! Exact rational value type over `num_rational::BigRational`.
//! Values are canonical at all times: reduced, denominator > 0, sign on the numerator.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};
use core::str::FromStr;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Pow, Signed, ToPrimitive, Zero};

use crate::errors::CoreError;

/// Arbitrary-precision rational number with exact arithmetic.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExactRational(BigRational);

impl ExactRational {
    /// Build `num/den`; rejects a zero denominator.
    pub fn new(num: BigInt, den: BigInt) -> Result<Self, CoreError> {
        if den.is_zero() {
            return Err(CoreError::ZeroDenominator {
                token: format!("{num}/{den}"),
            });
        }
        Ok(Self(BigRational::new(num, den)))
    }

    pub fn from_integer<T: Into<BigInt>>(n: T) -> Self {
        Self(BigRational::from_integer(n.into()))
    }

    pub fn zero() -> Self {
        Self(BigRational::zero())
    }

    pub fn one() -> Self {
        Self(BigRational::one())
    }

    /// Reduce by the gcd and normalize the sign onto the numerator.
    ///
    /// Every constructor already yields canonical values, so this is
    /// idempotent; it is kept for callers that build values from raw parts.
    pub fn canonicalize(self) -> Self {
        let (n, d) = self.0.into_raw();
        Self(BigRational::new(n, d))
    }

    pub fn numer(&self) -> &BigInt {
        self.0.numer()
    }

    pub fn denom(&self) -> &BigInt {
        self.0.denom()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// `f64` approximation truncated toward zero: the largest-magnitude
    /// double whose magnitude does not exceed `|self|`. Magnitudes beyond
    /// `f64` range saturate to ±infinity.
    ///
    /// Used only where a floating comparison is explicitly part of the
    /// algorithm (chi-squared bucket walk); never for statistic arithmetic.
    pub fn to_f64_approx(&self) -> f64 {
        let mut f = match self.0.to_f64() {
            Some(f) if f.is_finite() => f,
            Some(f) => return f,
            None if self.0.is_negative() => return f64::NEG_INFINITY,
            None => return f64::INFINITY,
        };
        // `to_f64` rounds to nearest; step back toward zero while the double
        // overshoots the exact magnitude.
        let exact = self.0.abs();
        while f != 0.0 {
            match BigRational::from_float(f.abs()) {
                Some(r) if r > exact => f = f64::from_bits(f.to_bits() - 1),
                _ => break,
            }
        }
        f
    }

    /// Three-way exact comparison (cross-multiplication, no float).
    #[inline]
    pub fn compare(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }

    /// Parse a decimal (`[+-]int[.frac]`) or fraction (`[+-]num/den`) literal.
    pub fn parse_literal(token: &str) -> Result<Self, CoreError> {
        let invalid = || CoreError::InvalidLiteral {
            token: token.to_string(),
        };

        let (negative, body) = match token.as_bytes().first() {
            Some(b'-') => (true, &token[1..]),
            Some(b'+') => (false, &token[1..]),
            Some(_) => (false, token),
            None => return Err(invalid()),
        };

        let magnitude = if let Some((num, den)) = body.split_once('/') {
            if !is_digits(num) || !is_digits(den) {
                return Err(invalid());
            }
            let num = parse_digits(num).ok_or_else(invalid)?;
            let den = parse_digits(den).ok_or_else(invalid)?;
            if den.is_zero() {
                return Err(CoreError::ZeroDenominator {
                    token: token.to_string(),
                });
            }
            BigRational::new(num, den)
        } else {
            let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));
            if int_part.is_empty() && frac_part.is_empty() {
                return Err(invalid());
            }
            let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
            if !all_digits(int_part) || !all_digits(frac_part) {
                return Err(invalid());
            }
            let mut digits = String::with_capacity(int_part.len() + frac_part.len());
            digits.push_str(int_part);
            digits.push_str(frac_part);
            let num = parse_digits(&digits).ok_or_else(invalid)?;
            let scale = pow10(frac_part.len());
            BigRational::new(num, scale)
        };

        Ok(Self(if negative { -magnitude } else { magnitude }))
    }
}

/// `10^exp` as a big integer.
pub fn pow10(exp: usize) -> BigInt {
    Pow::pow(BigInt::from(10u8), exp)
}

#[inline]
fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_digits(s: &str) -> Option<BigInt> {
    BigInt::parse_bytes(s.as_bytes(), 10)
}

impl FromStr for ExactRational {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_literal(s)
    }
}

impl fmt::Display for ExactRational {
    /// `num/den`, or just `num` for integers.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_integer() {
            write!(f, "{}", self.0.numer())
        } else {
            write!(f, "{}/{}", self.0.numer(), self.0.denom())
        }
    }
}

impl From<BigRational> for ExactRational {
    fn from(r: BigRational) -> Self {
        Self(r)
    }
}

impl From<ExactRational> for BigRational {
    fn from(r: ExactRational) -> Self {
        r.0
    }
}

impl From<u64> for ExactRational {
    fn from(n: u64) -> Self {
        Self::from_integer(n)
    }
}

impl Neg for ExactRational {
    type Output = ExactRational;
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

// Forward each binary operator for owned and borrowed operands.
// Division by zero panics (precondition: callers never divide by zero).
macro_rules! forward_binop {
    ($imp:ident, $method:ident) => {
        impl $imp<ExactRational> for ExactRational {
            type Output = ExactRational;
            #[inline]
            fn $method(self, rhs: ExactRational) -> ExactRational {
                ExactRational($imp::$method(self.0, rhs.0))
            }
        }

        impl<'a> $imp<&'a ExactRational> for ExactRational {
            type Output = ExactRational;
            #[inline]
            fn $method(self, rhs: &'a ExactRational) -> ExactRational {
                ExactRational($imp::$method(self.0, &rhs.0))
            }
        }

        impl<'a, 'b> $imp<&'b ExactRational> for &'a ExactRational {
            type Output = ExactRational;
            #[inline]
            fn $method(self, rhs: &'b ExactRational) -> ExactRational {
                ExactRational($imp::$method(&self.0, &rhs.0))
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);
forward_binop!(Div, div);
