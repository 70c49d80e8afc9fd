use crate::core::data::complex::Complex;
use crate::core::precision::Real;
use std::cmp::Ordering;
use std::error::Error;
use std::fmt;

/// `x_min, x_max, y_min, y_max` of the built-in view, parsed at the run's width.
pub const DEFAULT_BOUNDS: [&str; 4] = ["-2.5", "1.0", "-1.3", "1.3"];

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ComplexRectError {
    InvalidRegion { width: f64, height: f64 },
}

impl fmt::Display for ComplexRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRegion { width, height } => {
                write!(
                    f,
                    "plane region must have positive width and height: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for ComplexRectError {}

/// Axis-aligned region of the complex plane, `min` is `(x_min, y_min)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexRect<R> {
    min: Complex<R>,
    max: Complex<R>,
}

fn is_positive<R: Real>(span: &R) -> bool {
    span.partial_cmp(&R::default()) == Some(Ordering::Greater)
}

impl<R: Real> ComplexRect<R> {
    pub fn new(min: Complex<R>, max: Complex<R>) -> Result<Self, ComplexRectError> {
        let width = max.real.clone() - min.real.clone();
        let height = max.imag.clone() - min.imag.clone();

        if !is_positive(&width) || !is_positive(&height) {
            return Err(ComplexRectError::InvalidRegion {
                width: width.to_f64(),
                height: height.to_f64(),
            });
        }

        Ok(Self { min, max })
    }

    pub fn from_bounds(x_min: R, x_max: R, y_min: R, y_max: R) -> Result<Self, ComplexRectError> {
        Self::new(Complex::new(x_min, y_min), Complex::new(x_max, y_max))
    }

    /// The built-in `[-2.5, 1.0] x [-1.3, 1.3]` view.
    #[must_use]
    pub fn default_region() -> Self {
        let [x_min, x_max, y_min, y_max] =
            DEFAULT_BOUNDS.map(|bound| R::parse(bound).expect("default bounds are valid decimals"));

        Self::from_bounds(x_min, x_max, y_min, y_max).expect("default plane region is valid")
    }

    #[must_use]
    pub fn min(&self) -> &Complex<R> {
        &self.min
    }

    #[must_use]
    pub fn max(&self) -> &Complex<R> {
        &self.max
    }

    #[must_use]
    pub fn width(&self) -> R {
        self.max.real.clone() - self.min.real.clone()
    }

    #[must_use]
    pub fn height(&self) -> R {
        self.max.imag.clone() - self.min.imag.clone()
    }

    /// Maps `point` linearly so that `min` lands on `(0, 0)` and `max` on `(1, 1)`.
    #[must_use]
    pub fn normalize(&self, point: &Complex<R>) -> (R, R) {
        (
            (point.real.clone() - self.min.real.clone()) / self.width(),
            (point.imag.clone() - self.min.imag.clone()) / self.height(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::precision::Quadruple;

    fn rect(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<ComplexRect<f64>, ComplexRectError> {
        ComplexRect::from_bounds(x_min, x_max, y_min, y_max)
    }

    #[test]
    fn test_complex_rect_new_valid() {
        let value = rect(-2.0, 1.0, -1.0, 1.0).unwrap();

        assert_eq!(value.min(), &Complex { real: -2.0, imag: -1.0 });
        assert_eq!(value.max(), &Complex { real: 1.0, imag: 1.0 });
    }

    #[test]
    fn test_complex_rect_dimensions_must_be_positive() {
        assert_eq!(
            rect(0.0, 0.0, 0.0, 100.0),
            Err(ComplexRectError::InvalidRegion { width: 0.0, height: 100.0 })
        );
        assert_eq!(
            rect(0.0, -100.0, 0.0, 10.0),
            Err(ComplexRectError::InvalidRegion { width: -100.0, height: 10.0 })
        );
        assert_eq!(
            rect(0.0, 100.0, 0.0, 0.0),
            Err(ComplexRectError::InvalidRegion { width: 100.0, height: 0.0 })
        );
        assert_eq!(
            rect(2.0, -2.0, 2.0, -2.0),
            Err(ComplexRectError::InvalidRegion { width: -4.0, height: -4.0 })
        );
    }

    #[test]
    fn test_complex_rect_rejects_nan_bounds() {
        assert!(rect(f64::NAN, 1.0, 0.0, 1.0).is_err());
        assert!(rect(0.0, 1.0, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_complex_rect_dimensions() {
        let value = rect(-2.5, 1.0, -1.0, 1.0).unwrap();

        assert_eq!(value.width(), 3.5);
        assert_eq!(value.height(), 2.0);
    }

    #[test]
    fn test_default_region_matches_classic_view() {
        let value = ComplexRect::<Quadruple>::default_region();

        assert_eq!(value.width().to_f64(), 3.5);
        assert!((value.height().to_f64() - 2.6).abs() < 1e-15);
    }

    #[test]
    fn test_normalize_maps_corners_to_unit_square() {
        let value = rect(-2.0, 2.0, -1.0, 3.0).unwrap();

        assert_eq!(value.normalize(&Complex { real: -2.0, imag: -1.0 }), (0.0, 0.0));
        assert_eq!(value.normalize(&Complex { real: 2.0, imag: 3.0 }), (1.0, 1.0));
        assert_eq!(value.normalize(&Complex { real: 0.0, imag: 0.0 }), (0.5, 0.25));
    }
}
