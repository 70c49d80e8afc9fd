use serde::Deserialize;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFractalError(pub String);

impl fmt::Display for UnknownFractalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown fractal '{}', expected mandelbrot or julia", self.0)
    }
}

impl Error for UnknownFractalError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FractalKinds {
    #[default]
    Mandelbrot,
    Julia,
}

impl FractalKinds {
    pub const ALL: &'static [Self] = &[Self::Mandelbrot, Self::Julia];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
        }
    }

    /// File the membership mask of this fractal is written to.
    #[must_use]
    pub const fn mask_file_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "mandelbrot.txt",
            Self::Julia => "julia.txt",
        }
    }
}

impl FromStr for FractalKinds {
    type Err = UnknownFractalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.display_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownFractalError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_case_insensitively() {
        assert_eq!("mandelbrot".parse(), Ok(FractalKinds::Mandelbrot));
        assert_eq!("JULIA".parse(), Ok(FractalKinds::Julia));
    }

    #[test]
    fn test_rejects_other_families() {
        let result: Result<FractalKinds, _> = "burning-ship".parse();

        assert_eq!(result, Err(UnknownFractalError("burning-ship".to_string())));
    }

    #[test]
    fn test_mask_file_follows_the_kind() {
        assert_eq!(FractalKinds::Mandelbrot.mask_file_name(), "mandelbrot.txt");
        assert_eq!(FractalKinds::Julia.mask_file_name(), "julia.txt");
    }
}
