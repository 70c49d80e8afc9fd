use serde::Deserialize;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPrecisionError(pub String);

impl fmt::Display for UnknownPrecisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown precision '{}', expected one of: auto, standard, extended, quadruple",
            self.0
        )
    }
}

impl Error for UnknownPrecisionError {}

/// Arithmetic width used for every coordinate and orbit computation of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrecisionKinds {
    #[default]
    Standard,
    Extended,
    Quadruple,
}

impl PrecisionKinds {
    pub const ALL: &'static [Self] = &[Self::Standard, Self::Extended, Self::Quadruple];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Extended => "extended",
            Self::Quadruple => "quadruple",
        }
    }

    #[must_use]
    pub const fn mantissa_bits(self) -> u32 {
        match self {
            Self::Standard => 53,
            Self::Extended => 64,
            Self::Quadruple => 113,
        }
    }

    /// Decimal digits needed to print a value of this width without loss.
    #[must_use]
    pub const fn significant_digits(self) -> usize {
        match self {
            Self::Standard => 17,
            Self::Extended => 21,
            Self::Quadruple => 36,
        }
    }
}

impl fmt::Display for PrecisionKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for PrecisionKinds {
    type Err = UnknownPrecisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "double" => Ok(Self::Standard),
            "extended" | "long" => Ok(Self::Extended),
            "quadruple" | "quad" => Ok(Self::Quadruple),
            _ => Err(UnknownPrecisionError(s.to_string())),
        }
    }
}

/// A region span below this needs the 113-bit width to keep neighbouring pixels apart.
pub const QUADRUPLE_SPAN_THRESHOLD: f64 = 1.0e-15;

/// A region span below this needs at least the 64-bit width.
pub const EXTENDED_SPAN_THRESHOLD: f64 = 1.0e-11;

impl PrecisionKinds {
    /// Narrowest width that still resolves a region of `width` by `height`.
    /// The smaller of the two spans decides.
    #[must_use]
    pub fn for_spans(width: f64, height: f64) -> Self {
        let span = width.abs().min(height.abs());

        if span < QUADRUPLE_SPAN_THRESHOLD {
            Self::Quadruple
        } else if span < EXTENDED_SPAN_THRESHOLD {
            Self::Extended
        } else {
            Self::Standard
        }
    }
}

/// Precision as requested by the user: a fixed width, or one picked from the region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum PrecisionSelection {
    Auto,
    Fixed(PrecisionKinds),
}

impl Default for PrecisionSelection {
    fn default() -> Self {
        Self::Fixed(PrecisionKinds::default())
    }
}

impl FromStr for PrecisionSelection {
    type Err = UnknownPrecisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }

        s.parse().map(Self::Fixed)
    }
}

impl TryFrom<String> for PrecisionSelection {
    type Error = UnknownPrecisionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
