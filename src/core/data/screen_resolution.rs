use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScreenResolutionError {
    InvalidResolution { width: u32, height: u32 },
    ZeroPixelBudget,
}

impl fmt::Display for ScreenResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidResolution { width, height } => {
                write!(f, "screen resolution must be at least 1x1: {}x{}", width, height)
            }
            Self::ZeroPixelBudget => write!(f, "pixel budget must be greater than zero"),
        }
    }
}

impl Error for ScreenResolutionError {}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ScreenResolution {
    width: u32,
    height: u32,
}

impl ScreenResolution {
    pub fn new(width: u32, height: u32) -> Result<Self, ScreenResolutionError> {
        if width == 0 || height == 0 {
            return Err(ScreenResolutionError::InvalidResolution { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    /// Number of pixels, or `None` when it does not fit in `usize`.
    #[must_use]
    pub fn cell_count(&self) -> Option<usize> {
        (self.width as usize).checked_mul(self.height as usize)
    }

    /// Row-major offset of `point` in a grid of this resolution.
    #[must_use]
    pub fn index_of(&self, point: Point) -> Option<usize> {
        self.contains_point(point)
            .then(|| point.y as usize * self.width as usize + point.x as usize)
    }
}
