use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::screen_mapping::ScreenMapping;
use crate::core::data::screen_resolution::{ScreenResolution, ScreenResolutionError};
use crate::core::precision::Real;

/// Pixel count for the shorter axis: `floor(max_pixels * short / long)`, at least 1.
///
/// The floor is taken at width `R`; converting first would round values just
/// below an integer up to it.
fn scaled_axis<R: Real>(max_pixels: u32, short_span: R, long_span: R) -> u32 {
    let scaled = (short_span * R::from_u32(max_pixels) / long_span).floor().to_f64();

    if scaled < 1.0 {
        log::warn!(
            "region is too thin for a {} pixel budget, clamping the short axis to 1 pixel",
            max_pixels
        );
        return 1;
    }

    scaled as u32
}

/// Gives the longer plane axis the whole pixel budget and scales the other by
/// the aspect ratio, so square plane regions stay square on screen.
pub fn fit_resolution<R: Real>(
    rect: &ComplexRect<R>,
    max_pixels: u32,
) -> Result<ScreenMapping<R>, ScreenResolutionError> {
    if max_pixels == 0 {
        return Err(ScreenResolutionError::ZeroPixelBudget);
    }

    let width = rect.width();
    let height = rect.height();

    let resolution = if height > width {
        ScreenResolution::new(scaled_axis(max_pixels, width, height), max_pixels)?
    } else {
        ScreenResolution::new(max_pixels, scaled_axis(max_pixels, height, width))?
    };

    let mapping = ScreenMapping::new(rect, resolution);
    log::debug!(
        "fitted {}x{} pixels, delta x {}, delta y {}",
        resolution.width(),
        resolution.height(),
        mapping.delta_x().to_decimal(),
        mapping.delta_y().to_decimal()
    );

    Ok(mapping)
}
