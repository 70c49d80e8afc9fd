use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::point::Point;
use crate::core::data::sample::Sample;
use crate::core::data::screen_mapping::ScreenMapping;
use crate::core::fractals::escape_time::iteration::escape_time;
use crate::core::fractals::escape_time::params::FractalParams;
use crate::core::precision::Real;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

/// Escape-time sampler for both quadratic variants.
#[derive(Debug, Clone, PartialEq)]
pub struct EscapeTimeAlgorithm<R> {
    complex_rect: ComplexRect<R>,
    mapping: ScreenMapping<R>,
    params: FractalParams<R>,
}

impl<R: Real> FractalAlgorithm for EscapeTimeAlgorithm<R> {
    type Success = Sample<R>;

    fn compute(&self, pixel: Point) -> Self::Success {
        let point = pixel_to_complex_coords(pixel, &self.complex_rect, &self.mapping);
        let (z, c) = self.params.variant().orbit_start(&point);
        let iteration_count = escape_time(z, c, self.params.max_iterations());

        Sample {
            x0: point.real,
            y0: point.imag,
            iteration_count,
        }
    }
}

impl<R: Real> EscapeTimeAlgorithm<R> {
    pub fn new(complex_rect: ComplexRect<R>, mapping: ScreenMapping<R>, params: FractalParams<R>) -> Self {
        Self {
            complex_rect,
            mapping,
            params,
        }
    }

    pub fn complex_rect(&self) -> &ComplexRect<R> {
        &self.complex_rect
    }

    pub fn mapping(&self) -> &ScreenMapping<R> {
        &self.mapping
    }

    pub fn params(&self) -> &FractalParams<R> {
        &self.params
    }
}
