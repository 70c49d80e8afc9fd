use crate::core::fractals::escape_time::errors::FractalParamsError;
use crate::core::fractals::escape_time::variant::FractalVariant;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::precision::Real;

pub const DEFAULT_MAX_ITERATIONS: u32 = 1024;

/// Variant and iteration cap for one sampling pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FractalParams<R> {
    variant: FractalVariant<R>,
    max_iterations: u32,
}

impl<R: Real> FractalParams<R> {
    pub fn new(variant: FractalVariant<R>, max_iterations: u32) -> Result<Self, FractalParamsError> {
        if max_iterations == 0 {
            return Err(FractalParamsError::InvalidIterationBudget);
        }

        Ok(Self {
            variant,
            max_iterations,
        })
    }

    pub fn mandelbrot(max_iterations: u32) -> Result<Self, FractalParamsError> {
        Self::new(FractalVariant::Mandelbrot, max_iterations)
    }

    pub fn display_name(&self) -> &str {
        self.kind().display_name()
    }

    pub fn kind(&self) -> FractalKinds {
        self.variant.kind()
    }

    pub fn variant(&self) -> &FractalVariant<R> {
        &self.variant
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
