use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::screen_resolution::ScreenResolution;
use crate::core::precision::Real;

/// Screen resolution plus the plane distance covered by one pixel on each axis.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenMapping<R> {
    resolution: ScreenResolution,
    delta_x: R,
    delta_y: R,
}

impl<R: Real> ScreenMapping<R> {
    /// Spreads `rect` over an explicitly chosen resolution.
    #[must_use]
    pub fn new(rect: &ComplexRect<R>, resolution: ScreenResolution) -> Self {
        Self {
            delta_x: rect.width() / R::from_u32(resolution.width()),
            delta_y: rect.height() / R::from_u32(resolution.height()),
            resolution,
        }
    }

    #[must_use]
    pub fn resolution(&self) -> ScreenResolution {
        self.resolution
    }

    #[must_use]
    pub fn delta_x(&self) -> &R {
        &self.delta_x
    }

    #[must_use]
    pub fn delta_y(&self) -> &R {
        &self.delta_y
    }
}
