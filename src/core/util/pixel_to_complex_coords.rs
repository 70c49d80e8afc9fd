use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::point::Point;
use crate::core::data::screen_mapping::ScreenMapping;
use crate::core::precision::Real;

/// Plane coordinate of `pixel`: `(x_min + delta_x * x, y_min + delta_y * y)`.
///
/// Column `width` would land on `x_max`, so the sampled coordinates cover
/// `[x_min, x_max)` and `[y_min, y_max)`.
pub fn pixel_to_complex_coords<R: Real>(
    pixel: Point,
    complex_rect: &ComplexRect<R>,
    mapping: &ScreenMapping<R>,
) -> Complex<R> {
    debug_assert!(mapping.resolution().contains_point(pixel));

    let real = complex_rect.min().real.clone() + mapping.delta_x().clone() * R::from_u32(pixel.x);
    let imag = complex_rect.min().imag.clone() + mapping.delta_y().clone() * R::from_u32(pixel.y);

    Complex { real, imag }
}
