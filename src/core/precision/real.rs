use crate::core::precision::kinds::PrecisionKinds;
use std::error::Error;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRealError {
    input: String,
    precision: PrecisionKinds,
}

impl ParseRealError {
    pub fn new(input: &str, precision: PrecisionKinds) -> Self {
        Self {
            input: input.to_string(),
            precision,
        }
    }
}

impl fmt::Display for ParseRealError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot parse '{}' as a finite {} precision number",
            self.input, self.precision
        )
    }
}

impl Error for ParseRealError {}

/// Scalar type used for all plane and orbit arithmetic.
///
/// The mapper and sampler are written once against this trait and
/// instantiated per width. Values need not be `Copy`; wide types own heap
/// storage, so arithmetic consumes its operands.
pub trait Real:
    Clone
    + Default
    + PartialOrd
    + fmt::Debug
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    const KIND: PrecisionKinds;

    fn from_f64(value: f64) -> Self;

    fn from_u32(value: u32) -> Self;

    /// Parses a decimal string directly at this width, rejecting non-finite values.
    fn parse(input: &str) -> Result<Self, ParseRealError>;

    /// Largest integer not greater than `self`, at this width.
    fn floor(self) -> Self;

    fn to_f64(&self) -> f64;

    /// Decimal form carrying `KIND.significant_digits()` digits.
    fn to_decimal(&self) -> String;
}

impl Real for f64 {
    const KIND: PrecisionKinds = PrecisionKinds::Standard;

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn from_u32(value: u32) -> Self {
        f64::from(value)
    }

    fn parse(input: &str) -> Result<Self, ParseRealError> {
        input
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| ParseRealError::new(input, Self::KIND))
    }

    #[inline]
    fn floor(self) -> Self {
        f64::floor(self)
    }

    #[inline]
    fn to_f64(&self) -> f64 {
        *self
    }

    fn to_decimal(&self) -> String {
        format!("{:.*e}", Self::KIND.significant_digits() - 1, self)
    }
}
