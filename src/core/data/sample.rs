use crate::core::data::complex::Complex;

/// Result of sampling one pixel.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sample<R> {
    pub x0: R,
    pub y0: R,
    pub iteration_count: u32,
}

impl<R: Clone> Sample<R> {
    #[must_use]
    pub fn coordinate(&self) -> Complex<R> {
        Complex {
            real: self.x0.clone(),
            imag: self.y0.clone(),
        }
    }
}
