//! Raw tag values
//!
//! A [`Value`] is what a byte decoder produces for one tag. The typed
//! accessors coerce between the shapes where that is meaningful and return
//! `None` otherwise.

use crate::rational::Rational;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Int(i64),
    Float(f64),
    Rational(Rational),
    String(String),
    Bytes(Vec<u8>),
    IntArray(Vec<i64>),
    FloatArray(Vec<f64>),
    RationalArray(Vec<Rational>),
    StringArray(Vec<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueKind {
    Int,
    Float,
    Rational,
    String,
    Bytes,
    IntArray,
    FloatArray,
    RationalArray,
    StringArray,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Int => "integer",
            Self::Float => "float",
            Self::Rational => "rational",
            Self::String => "string",
            Self::Bytes => "byte array",
            Self::IntArray => "integer array",
            Self::FloatArray => "float array",
            Self::RationalArray => "rational array",
            Self::StringArray => "string array",
        };

        f.write_str(name)
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::Rational(_) => ValueKind::Rational,
            Self::String(_) => ValueKind::String,
            Self::Bytes(_) => ValueKind::Bytes,
            Self::IntArray(_) => ValueKind::IntArray,
            Self::FloatArray(_) => ValueKind::FloatArray,
            Self::RationalArray(_) => ValueKind::RationalArray,
            Self::StringArray(_) => ValueKind::StringArray,
        }
    }

    /// Number of elements for array values
    ///
    /// Byte sequences count as arrays, strings do not.
    pub fn array_len(&self) -> Option<usize> {
        match self {
            Self::Bytes(x) => Some(x.len()),
            Self::IntArray(x) => Some(x.len()),
            Self::FloatArray(x) => Some(x.len()),
            Self::RationalArray(x) => Some(x.len()),
            Self::StringArray(x) => Some(x.len()),
            Self::Int(_) | Self::Float(_) | Self::Rational(_) | Self::String(_) => None,
        }
    }

    /// Value as integer
    ///
    /// Rationals are truncated, strings are parsed and single element arrays
    /// give their element. Floats are not converted.
    ///
    /// ```
    /// # use makernote_common::{Rational, Value};
    /// assert_eq!(Value::Int(3).as_i64(), Some(3));
    /// assert_eq!(Value::from(Rational::new(9, 2)).as_i64(), Some(4));
    /// assert_eq!(Value::from(" 42").as_i64(), None);
    /// assert_eq!(Value::from("42").as_i64(), Some(42));
    /// assert_eq!(Value::Bytes(vec![7]).as_i64(), Some(7));
    /// assert_eq!(Value::Bytes(vec![7, 8]).as_i64(), None);
    /// assert_eq!(Value::Float(1.0).as_i64(), None);
    /// ```
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(x) => Some(*x),
            Self::Rational(x) => x.to_i64(),
            Self::String(x) => x.parse().ok(),
            Self::Bytes(x) => match x.as_slice() {
                [x] => Some(i64::from(*x)),
                _ => None,
            },
            Self::IntArray(x) => match x.as_slice() {
                [x] => Some(*x),
                _ => None,
            },
            Self::RationalArray(x) => match x.as_slice() {
                [x] => x.to_i64(),
                _ => None,
            },
            Self::Float(_) | Self::FloatArray(_) | Self::StringArray(_) => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(x) => Some(*x as f64),
            Self::Float(x) => Some(*x),
            Self::Rational(x) => x.checked_f64().ok(),
            Self::String(x) => x.parse().ok(),
            _ => None,
        }
    }

    pub fn as_rational(&self) -> Option<Rational> {
        match self {
            Self::Rational(x) => Some(*x),
            Self::Int(x) => Some(Rational::new(*x, 1)),
            Self::RationalArray(x) => match x.as_slice() {
                [x] => Some(*x),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn as_rational_array(&self) -> Option<&[Rational]> {
        match self {
            Self::RationalArray(x) => Some(x),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(x) => Some(x),
            _ => None,
        }
    }

    /// Value as bytes
    ///
    /// Integers are truncated to their lowest byte.
    ///
    /// ```
    /// # use makernote_common::Value;
    /// assert_eq!(Value::IntArray(vec![1, 0x102]).as_bytes(), Some(vec![1, 2]));
    /// assert_eq!(Value::from("ab").as_bytes(), Some(b"ab".to_vec()));
    /// assert_eq!(Value::Float(1.).as_bytes(), None);
    /// ```
    pub fn as_bytes(&self) -> Option<Vec<u8>> {
        match self {
            Self::Bytes(x) => Some(x.clone()),
            Self::String(x) => Some(x.as_bytes().to_vec()),
            Self::Int(x) => Some(vec![low_byte(*x)]),
            Self::IntArray(x) => Some(x.iter().copied().map(low_byte).collect()),
            Self::RationalArray(x) => x
                .iter()
                .map(|x| x.to_i64().map(low_byte))
                .collect::<Option<Vec<_>>>(),
            Self::Float(_) | Self::Rational(_) | Self::FloatArray(_) | Self::StringArray(_) => None,
        }
    }

    pub fn as_i64_array(&self) -> Option<Vec<i64>> {
        match self {
            Self::IntArray(x) => Some(x.clone()),
            Self::Int(x) => Some(vec![*x]),
            Self::Bytes(x) => Some(x.iter().copied().map(i64::from).collect()),
            Self::RationalArray(x) => x.iter().map(|x| x.to_i64()).collect(),
            Self::String(x) => Some(x.chars().map(|c| i64::from(u32::from(c))).collect()),
            Self::Float(_) | Self::Rational(_) | Self::FloatArray(_) | Self::StringArray(_) => None,
        }
    }
}

fn low_byte(x: i64) -> u8 {
    x.to_le_bytes()[0]
}

/// Formats like `0.###`, at most three decimals without trailing zeros
///
/// ```
/// # use makernote_common::value::format_float;
/// assert_eq!(format_float(1.5), "1.5");
/// assert_eq!(format_float(2.0), "2");
/// assert_eq!(format_float(0.12345), "0.123");
/// assert_eq!(format_float(-0.0001), "0");
/// ```
pub fn format_float(value: f64) -> String {
    let s = format!("{value:.3}");
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s.as_str()
    };

    if s == "-0" {
        String::from("0")
    } else {
        s.to_string()
    }
}

fn join<T>(values: &[T], f: impl Fn(&T) -> String) -> String {
    values.iter().map(f).collect::<Vec<_>>().join(" ")
}

/// Raw rendering without any vendor knowledge
///
/// ```
/// # use makernote_common::{Rational, Value};
/// assert_eq!(Value::Int(-3).to_string(), "-3");
/// assert_eq!(Value::Float(0.5).to_string(), "0.5");
/// assert_eq!(Value::from(Rational::new(1, 60)).to_string(), "1/60");
/// assert_eq!(Value::Bytes(vec![0, 255]).to_string(), "0 255");
/// assert_eq!(
///     Value::RationalArray(vec![Rational::new(4, 2)]).to_string(),
///     "4/2"
/// );
/// ```
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(x) => write!(f, "{x}"),
            Self::Float(x) => f.write_str(&format_float(*x)),
            Self::Rational(x) => f.write_str(&x.to_simple_string(true)),
            Self::String(x) => f.write_str(x),
            Self::Bytes(x) => f.write_str(&join(x, ToString::to_string)),
            Self::IntArray(x) => f.write_str(&join(x, ToString::to_string)),
            Self::FloatArray(x) => f.write_str(&join(x, |x| format_float(*x))),
            Self::RationalArray(x) => f.write_str(&join(x, ToString::to_string)),
            Self::StringArray(x) => f.write_str(&x.join(" ")),
        }
    }
}

macro_rules! impl_from {
    ($variant:ident, $($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Self::$variant(value.into())
                }
            }
        )*
    };
}

impl_from!(Int, i64, i32, i16, i8, u32, u16, u8);
impl_from!(Float, f64, f32);
impl_from!(Rational, Rational);
impl_from!(String, String, &str);
impl_from!(Bytes, Vec<u8>, &[u8]);
impl_from!(IntArray, Vec<i64>);
impl_from!(FloatArray, Vec<f64>);
impl_from!(RationalArray, Vec<Rational>);
impl_from!(StringArray, Vec<String>);

impl<const N: usize> From<[u8; N]> for Value {
    fn from(value: [u8; N]) -> Self {
        Self::Bytes(value.to_vec())
    }
}

impl From<Vec<u16>> for Value {
    fn from(value: Vec<u16>) -> Self {
        Self::IntArray(value.into_iter().map(i64::from).collect())
    }
}

impl From<Vec<i32>> for Value {
    fn from(value: Vec<i32>) -> Self {
        Self::IntArray(value.into_iter().map(i64::from).collect())
    }
}
