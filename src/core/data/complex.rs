use crate::core::precision::Real;

// implement Complex instead of using the num-complex trait so it can carry any Real width
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Complex<R> {
    pub real: R,
    pub imag: R,
}

impl<R: Real> Complex<R> {
    pub fn new(real: R, imag: R) -> Self {
        Self { real, imag }
    }

    pub fn from_f64(real: f64, imag: f64) -> Self {
        Self {
            real: R::from_f64(real),
            imag: R::from_f64(imag),
        }
    }
}
