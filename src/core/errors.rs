use crate::core::actions::generate_fractal::errors::GenerateFractalError;
use crate::core::data::complex_rect::ComplexRectError;
use crate::core::data::screen_resolution::ScreenResolutionError;
use crate::core::fractals::escape_time::FractalParamsError;
use crate::core::precision::ParseRealError;
use std::error::Error;
use std::fmt;

/// Every way a run can fail before or during sampling.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    InvalidNumber(ParseRealError),
    InvalidRegion(ComplexRectError),
    InvalidResolution(ScreenResolutionError),
    InvalidIterationBudget(FractalParamsError),
    Sampling(GenerateFractalError),
}

impl EngineError {
    /// Input problems exit with 1, failures of the pass itself with 2.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Sampling(_) => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumber(e) => write!(f, "invalid number: {}", e),
            Self::InvalidRegion(e) => write!(f, "invalid region: {}", e),
            Self::InvalidResolution(e) => write!(f, "invalid resolution: {}", e),
            Self::InvalidIterationBudget(e) => write!(f, "invalid iteration budget: {}", e),
            Self::Sampling(e) => write!(f, "sampling failed: {}", e),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidNumber(e) => Some(e),
            Self::InvalidRegion(e) => Some(e),
            Self::InvalidResolution(e) => Some(e),
            Self::InvalidIterationBudget(e) => Some(e),
            Self::Sampling(e) => Some(e),
        }
    }
}

impl From<ParseRealError> for EngineError {
    fn from(e: ParseRealError) -> Self {
        Self::InvalidNumber(e)
    }
}

impl From<ComplexRectError> for EngineError {
    fn from(e: ComplexRectError) -> Self {
        Self::InvalidRegion(e)
    }
}

impl From<ScreenResolutionError> for EngineError {
    fn from(e: ScreenResolutionError) -> Self {
        Self::InvalidResolution(e)
    }
}

impl From<FractalParamsError> for EngineError {
    fn from(e: FractalParamsError) -> Self {
        Self::InvalidIterationBudget(e)
    }
}

impl From<GenerateFractalError> for EngineError {
    fn from(e: GenerateFractalError) -> Self {
        Self::Sampling(e)
    }
}
