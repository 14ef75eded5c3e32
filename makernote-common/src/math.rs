//! Arithmetic that reports overflow as [`MathError`]
//!
//! Tag values come from untrusted files. Index and offset arithmetic on them
//! goes through these traits instead of the plain operators.

#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("{lhs} {op} {rhs} overflows")]
    Overflow { op: Operator, lhs: i64, rhs: i64 },
    #[error("Value {0} does not fit the target type")]
    OutOfRange(i64),
    #[error("Division result is not finite")]
    NotFinite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
        })
    }
}

macro_rules! checked_operator {
    ($op:ident) => {
        paste::paste! {
            pub trait [< Safe $op >]: Sized {
                fn [< safe_ $op:lower >](self, rhs: Self) -> Result<Self, MathError>;
            }

            impl [< Safe $op >] for i64 {
                fn [< safe_ $op:lower >](self, rhs: Self) -> Result<Self, MathError> {
                    self.[< checked_ $op:lower >](rhs).ok_or(MathError::Overflow {
                        op: Operator::$op,
                        lhs: self,
                        rhs,
                    })
                }
            }
        }
    };
}

checked_operator!(Add);
checked_operator!(Sub);
checked_operator!(Mul);

/// Float division that refuses to produce infinite or NaN values
///
/// ```
/// # use makernote_common::math::*;
/// assert_eq!(1_f64.safe_div(4.), Ok(0.25));
/// assert_eq!(1_f64.safe_div(0.), Err(MathError::NotFinite));
/// ```
pub trait SafeDiv: Sized {
    fn safe_div(self, rhs: Self) -> Result<Self, MathError>;
}

impl SafeDiv for f64 {
    fn safe_div(self, rhs: Self) -> Result<Self, MathError> {
        let value = self / rhs;

        if value.is_finite() {
            Ok(value)
        } else {
            Err(MathError::NotFinite)
        }
    }
}

/// Conversion of tag values into indices
///
/// ```
/// # use makernote_common::math::*;
/// assert_eq!(4_i64.safe_sub(3).and_then(ToUsize::usize), Ok(1));
/// assert_eq!((-1_i64).usize(), Err(MathError::OutOfRange(-1)));
/// assert!(i64::MIN.safe_sub(1).is_err());
/// ```
pub trait ToUsize: Copy {
    fn usize(self) -> Result<usize, MathError>;
}

impl ToUsize for i64 {
    fn usize(self) -> Result<usize, MathError> {
        usize::try_from(self).map_err(|_| MathError::OutOfRange(self))
    }
}
