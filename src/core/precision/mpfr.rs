use crate::core::precision::kinds::PrecisionKinds;
use crate::core::precision::real::{ParseRealError, Real};
use rug::Float;
use std::ops::{Add, Div, Mul, Sub};

pub const EXTENDED_MANTISSA_BITS: u32 = PrecisionKinds::Extended.mantissa_bits();
pub const QUADRUPLE_MANTISSA_BITS: u32 = PrecisionKinds::Quadruple.mantissa_bits();

/// MPFR float pinned to a fixed mantissa width.
///
/// Every value of a given `BITS` is created at that width, so results of the
/// arithmetic operators stay at `BITS` as well.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub struct Mpfr<const BITS: u32>(Float);

/// Same mantissa width as an x87 `long double`.
pub type Extended = Mpfr<EXTENDED_MANTISSA_BITS>;

/// Same mantissa width as IEEE 754 binary128.
pub type Quadruple = Mpfr<QUADRUPLE_MANTISSA_BITS>;

impl<const BITS: u32> Mpfr<BITS> {
    #[must_use]
    pub fn as_float(&self) -> &Float {
        &self.0
    }

    fn parse_at_width(input: &str, kind: PrecisionKinds) -> Result<Self, ParseRealError> {
        let parsed = Float::parse(input.trim()).map_err(|_| ParseRealError::new(input, kind))?;
        let value = Float::with_val(BITS, parsed);

        if !value.is_finite() {
            return Err(ParseRealError::new(input, kind));
        }

        Ok(Self(value))
    }

    fn decimal(&self, kind: PrecisionKinds) -> String {
        self.0.to_string_radix(10, Some(kind.significant_digits()))
    }
}

impl<const BITS: u32> Default for Mpfr<BITS> {
    fn default() -> Self {
        Self(Float::new(BITS))
    }
}

impl<const BITS: u32> Add for Mpfr<BITS> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<const BITS: u32> Sub for Mpfr<BITS> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl<const BITS: u32> Mul for Mpfr<BITS> {
    type Output = Self;

    #[inline]
    fn mul(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl<const BITS: u32> Div for Mpfr<BITS> {
    type Output = Self;

    #[inline]
    fn div(self, other: Self) -> Self {
        Self(self.0 / other.0)
    }
}

impl Real for Extended {
    const KIND: PrecisionKinds = PrecisionKinds::Extended;

    fn from_f64(value: f64) -> Self {
        Self(Float::with_val(EXTENDED_MANTISSA_BITS, value))
    }

    fn from_u32(value: u32) -> Self {
        Self(Float::with_val(EXTENDED_MANTISSA_BITS, value))
    }

    fn parse(input: &str) -> Result<Self, ParseRealError> {
        Self::parse_at_width(input, Self::KIND)
    }

    fn floor(self) -> Self {
        Self(self.0.floor())
    }

    fn to_f64(&self) -> f64 {
        self.0.to_f64()
    }

    fn to_decimal(&self) -> String {
        self.decimal(Self::KIND)
    }
}

impl Real for Quadruple {
    const KIND: PrecisionKinds = PrecisionKinds::Quadruple;

    fn from_f64(value: f64) -> Self {
        Self(Float::with_val(QUADRUPLE_MANTISSA_BITS, value))
    }

    fn from_u32(value: u32) -> Self {
        Self(Float::with_val(QUADRUPLE_MANTISSA_BITS, value))
    }

    fn parse(input: &str) -> Result<Self, ParseRealError> {
        Self::parse_at_width(input, Self::KIND)
    }

    fn floor(self) -> Self {
        Self(self.0.floor())
    }

    fn to_f64(&self) -> f64 {
        self.0.to_f64()
    }

    fn to_decimal(&self) -> String {
        self.decimal(Self::KIND)
    }
}
