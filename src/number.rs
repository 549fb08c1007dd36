//! Numeric kinds understood by the range and sign checks
//!
//! Every numeric value a check sees is classified into one [`Number`] variant,
//! and each variant is compared against an `f64` bound in its own domain:
//!
//! - integers compare exactly, without first being cast to a float
//! - floats compare as IEEE values
//! - decimals compare decimal-exact against the bound converted to a `Decimal`
//!
//! A comparison involving NaN is undefined and yields `None`, which the checks
//! treat as "no violation".
//!
//! # Example
//!
//! ```rust
//! use fluentcheck::Number;
//! use std::cmp::Ordering;
//!
//! assert_eq!(Number::from(200).cmp_bound(100.0), Some(Ordering::Greater));
//! assert_eq!(Number::from(-0.5f32).cmp_bound(0.0), Some(Ordering::Less));
//! assert_eq!(Number::from(f64::NAN).cmp_bound(0.0), None);
//! ```

use std::cmp::Ordering;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

// 2^127 and 2^128, both exactly representable as f64.
const I128_LIMIT: f64 = i128::MAX as f64;
const U128_LIMIT: f64 = u128::MAX as f64;

/// A numeric value tagged with the kind it was produced from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Any signed integer, and unsigned integers up to 64 bits.
    Integer(i128),
    /// 128-bit unsigned integer.
    Unsigned(u128),
    /// Single-precision float.
    Float32(f32),
    /// Double-precision float.
    Float64(f64),
    /// Arbitrary-precision decimal.
    Decimal(Decimal),
}

impl Number {
    /// Compare this number with an `f64` bound in the number's native domain.
    ///
    /// Returns `None` when either side is NaN.
    pub fn cmp_bound(&self, bound: f64) -> Option<Ordering> {
        match *self {
            Number::Integer(value) => cmp_signed(value, bound),
            Number::Unsigned(value) => cmp_unsigned(value, bound),
            Number::Float32(value) => f64::from(value).partial_cmp(&bound),
            Number::Float64(value) => value.partial_cmp(&bound),
            Number::Decimal(value) => cmp_decimal(value, bound),
        }
    }

    /// True when this number is strictly below `bound`.
    pub fn is_below(&self, bound: f64) -> bool {
        self.cmp_bound(bound) == Some(Ordering::Less)
    }

    /// True when this number is strictly above `bound`.
    pub fn is_above(&self, bound: f64) -> bool {
        self.cmp_bound(bound) == Some(Ordering::Greater)
    }
}

fn cmp_signed(value: i128, bound: f64) -> Option<Ordering> {
    if bound.is_nan() {
        return None;
    }
    if bound >= I128_LIMIT {
        return Some(Ordering::Less);
    }
    if bound < -I128_LIMIT {
        return Some(Ordering::Greater);
    }
    let whole = bound.trunc();
    let fraction = 0.0f64.partial_cmp(&(bound - whole))?;
    Some(value.cmp(&(whole as i128)).then(fraction))
}

fn cmp_unsigned(value: u128, bound: f64) -> Option<Ordering> {
    if bound.is_nan() {
        return None;
    }
    if bound < 0.0 {
        return Some(Ordering::Greater);
    }
    if bound >= U128_LIMIT {
        return Some(Ordering::Less);
    }
    let whole = bound.trunc();
    let fraction = 0.0f64.partial_cmp(&(bound - whole))?;
    Some(value.cmp(&(whole as u128)).then(fraction))
}

fn cmp_decimal(value: Decimal, bound: f64) -> Option<Ordering> {
    match Decimal::try_from(bound) {
        Ok(bound) => Some(value.cmp(&bound)),
        // NaN, infinities and magnitudes beyond the decimal range
        Err(_) => value.to_f64()?.partial_cmp(&bound),
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                #[inline]
                fn from(value: $t) -> Self {
                    Number::Integer(i128::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<isize> for Number {
    #[inline]
    fn from(value: isize) -> Self {
        Number::Integer(value as i128)
    }
}

impl From<usize> for Number {
    #[inline]
    fn from(value: usize) -> Self {
        Number::Integer(value as i128)
    }
}

impl From<u128> for Number {
    #[inline]
    fn from(value: u128) -> Self {
        Number::Unsigned(value)
    }
}

impl From<f32> for Number {
    #[inline]
    fn from(value: f32) -> Self {
        Number::Float32(value)
    }
}

impl From<f64> for Number {
    #[inline]
    fn from(value: f64) -> Self {
        Number::Float64(value)
    }
}

impl From<Decimal> for Number {
    #[inline]
    fn from(value: Decimal) -> Self {
        Number::Decimal(value)
    }
}
