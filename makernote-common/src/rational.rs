use crate::math::{MathError, SafeDiv};

/// Fraction as stored in TIFF `RATIONAL` and `SRATIONAL` fields
///
/// Equality is exact, `1/2` and `2/4` are different values. Compare
/// [`Rational::simplified`] results to ignore the representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rational {
    pub numerator: i64,
    pub denominator: i64,
}

impl Rational {
    pub const fn new(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Value as float
    ///
    /// A zero numerator always gives `0.0`, even for `0/0`.
    pub fn to_f64(self) -> f64 {
        if self.numerator == 0 {
            0.
        } else {
            self.numerator as f64 / self.denominator as f64
        }
    }

    /// Same as [`Self::to_f64`] but fails for `n/0`
    pub fn checked_f64(self) -> Result<f64, MathError> {
        if self.numerator == 0 {
            Ok(0.)
        } else {
            (self.numerator as f64).safe_div(self.denominator as f64)
        }
    }

    /// Integer part, truncated toward zero
    ///
    /// ```
    /// # use makernote_common::Rational;
    /// assert_eq!(Rational::new(7, 2).to_i64(), Some(3));
    /// assert_eq!(Rational::new(-7, 2).to_i64(), Some(-3));
    /// assert_eq!(Rational::new(0, 0).to_i64(), Some(0));
    /// assert_eq!(Rational::new(1, 0).to_i64(), None);
    /// ```
    pub fn to_i64(self) -> Option<i64> {
        if self.numerator == 0 {
            Some(0)
        } else {
            self.numerator.checked_div(self.denominator)
        }
    }

    pub fn reciprocal(self) -> Self {
        Self::new(self.denominator, self.numerator)
    }

    pub fn is_integer(self) -> bool {
        self.denominator == 1
            || (self.denominator != 0 && self.numerator.checked_rem(self.denominator) == Some(0))
            || (self.denominator == 0 && self.numerator == 0)
    }

    pub fn is_zero(self) -> bool {
        self.numerator == 0 || self.denominator == 0
    }

    /// Divides numerator and denominator by their greatest common divisor
    ///
    /// ```
    /// # use makernote_common::Rational;
    /// assert_eq!(Rational::new(10, 4).simplified(), Rational::new(5, 2));
    /// assert_eq!(Rational::new(0, 0).simplified(), Rational::new(0, 0));
    /// ```
    pub fn simplified(self) -> Self {
        let gcd = gcd(self.numerator.unsigned_abs(), self.denominator.unsigned_abs());

        let Ok(gcd) = i64::try_from(gcd) else {
            return self;
        };

        match (
            self.numerator.checked_div(gcd),
            self.denominator.checked_div(gcd),
        ) {
            (Some(numerator), Some(denominator)) => Self::new(numerator, denominator),
            _ => self,
        }
    }

    /// Shortest readable representation
    ///
    /// ```
    /// # use makernote_common::Rational;
    /// assert_eq!(Rational::new(10, 2).to_simple_string(true), "5");
    /// assert_eq!(Rational::new(3, 15).to_simple_string(false), "1/5");
    /// assert_eq!(Rational::new(5, 10).to_simple_string(true), "0.5");
    /// assert_eq!(Rational::new(2, 6).to_simple_string(true), "1/3");
    /// assert_eq!(Rational::new(7, 4).to_simple_string(true), "1.75");
    /// assert_eq!(Rational::new(7, 0).to_simple_string(true), "7/0");
    /// ```
    pub fn to_simple_string(self, allow_decimal: bool) -> String {
        if self.denominator == 0 && self.numerator != 0 {
            return self.to_string();
        }

        if self.is_integer() {
            if let Some(integer) = self.to_i64() {
                return integer.to_string();
            }
        }

        if self.numerator != 1 && self.denominator.checked_rem(self.numerator) == Some(0) {
            if let Some(denominator) = self.denominator.checked_div(self.numerator) {
                return Self::new(1, denominator).to_simple_string(allow_decimal);
            }
        }

        let simplified = self.simplified();
        if allow_decimal {
            let decimal = simplified.to_f64().to_string();
            if decimal.len() < 5 {
                return decimal;
            }
        }

        simplified.to_string()
    }
}

impl std::fmt::Display for Rational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl From<(u32, u32)> for Rational {
    fn from((numerator, denominator): (u32, u32)) -> Self {
        Self::new(numerator.into(), denominator.into())
    }
}

impl From<(i32, i32)> for Rational {
    fn from((numerator, denominator): (i32, i32)) -> Self {
        Self::new(numerator.into(), denominator.into())
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while a != 0 && b != 0 {
        if a > b {
            a = a.checked_rem(b).unwrap_or(0);
        } else {
            b = b.checked_rem(a).unwrap_or(0);
        }
    }

    if a == 0 {
        b
    } else {
        a
    }
}
