use crate::core::data::complex::Complex;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::precision::Real;

/// Real and imaginary parts of the Julia constant used when none is given.
pub const DEFAULT_JULIA_CONSTANT: [&str; 2] = ["-0.7", "0.27"];

/// Selects how a pixel seeds the shared escape-time iteration.
#[derive(Debug, Clone, PartialEq)]
pub enum FractalVariant<R> {
    /// `z` starts at the origin, the pixel is the constant.
    Mandelbrot,
    /// `z` starts at the pixel, `c` is fixed for the whole image.
    Julia { c: Complex<R> },
}

impl<R: Real> FractalVariant<R> {
    #[must_use]
    pub fn default_julia() -> Self {
        let [real, imag] = DEFAULT_JULIA_CONSTANT
            .map(|part| R::parse(part).expect("default julia constant is a valid decimal"));

        Self::Julia {
            c: Complex { real, imag },
        }
    }

    #[must_use]
    pub fn kind(&self) -> FractalKinds {
        match self {
            Self::Mandelbrot => FractalKinds::Mandelbrot,
            Self::Julia { .. } => FractalKinds::Julia,
        }
    }

    /// Starting `z` and iterated constant `c` for the pixel at `point`.
    #[must_use]
    pub fn orbit_start(&self, point: &Complex<R>) -> (Complex<R>, Complex<R>) {
        match self {
            Self::Mandelbrot => (Complex::default(), point.clone()),
            Self::Julia { c } => (point.clone(), c.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mandelbrot_iterates_the_pixel_from_the_origin() {
        let point = Complex::<f64>::from_f64(0.25, -0.5);
        let (z, c) = FractalVariant::Mandelbrot.orbit_start(&point);

        assert_eq!(z, Complex { real: 0.0, imag: 0.0 });
        assert_eq!(c, point);
    }

    #[test]
    fn test_julia_starts_at_the_pixel_with_a_fixed_constant() {
        let point = Complex::<f64>::from_f64(0.25, -0.5);
        let variant = FractalVariant::Julia {
            c: Complex::from_f64(-0.4, 0.6),
        };
        let (z, c) = variant.orbit_start(&point);

        assert_eq!(z, point);
        assert_eq!(c, Complex { real: -0.4, imag: 0.6 });
        assert_eq!(variant.kind(), FractalKinds::Julia);
    }

    #[test]
    fn test_default_julia_constant() {
        let variant = FractalVariant::<f64>::default_julia();

        assert_eq!(
            variant,
            FractalVariant::Julia {
                c: Complex { real: -0.7, imag: 0.27 }
            }
        );
    }
}
