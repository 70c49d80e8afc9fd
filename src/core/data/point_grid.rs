use crate::core::data::point::Point;
use crate::core::data::sample::Sample;
use crate::core::data::screen_resolution::ScreenResolution;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointGridError {
    BoundsMismatch {
        resolution_size: usize,
        samples_size: usize,
    },
}

impl fmt::Display for PointGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                resolution_size,
                samples_size,
            } => {
                write!(
                    f,
                    "resolution size {} does not match sample count {}",
                    resolution_size, samples_size
                )
            }
        }
    }
}

impl Error for PointGridError {}

/// Row-major samples of one sampling pass, row 0 first.
///
/// The grid is immutable once built. Every accessor hands out a fresh
/// iterator, so consumers can walk it as often as they need.
#[derive(Debug, Clone, PartialEq)]
pub struct PointGrid<R> {
    resolution: ScreenResolution,
    max_iterations: u32,
    samples: Vec<Sample<R>>,
}

impl<R> PointGrid<R> {
    pub fn from_samples(
        resolution: ScreenResolution,
        max_iterations: u32,
        samples: Vec<Sample<R>>,
    ) -> Result<Self, PointGridError> {
        let resolution_size = resolution.cell_count().unwrap_or(usize::MAX);

        if resolution_size != samples.len() {
            return Err(PointGridError::BoundsMismatch {
                resolution_size,
                samples_size: samples.len(),
            });
        }

        Ok(Self {
            resolution,
            max_iterations,
            samples,
        })
    }

    /// Wraps generator output, which always holds exactly one sample per pixel.
    pub(crate) fn from_generated(
        resolution: ScreenResolution,
        max_iterations: u32,
        samples: Vec<Sample<R>>,
    ) -> Self {
        debug_assert_eq!(resolution.cell_count(), Some(samples.len()));

        Self {
            resolution,
            max_iterations,
            samples,
        }
    }

    #[must_use]
    pub fn resolution(&self) -> ScreenResolution {
        self.resolution
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn get(&self, point: Point) -> Option<&Sample<R>> {
        self.resolution
            .index_of(point)
            .map(|index| &self.samples[index])
    }

    pub fn samples(&self) -> std::slice::Iter<'_, Sample<R>> {
        self.samples.iter()
    }

    pub fn rows(&self) -> std::slice::ChunksExact<'_, Sample<R>> {
        self.samples.chunks_exact(self.resolution.width() as usize)
    }

    /// Whether the orbit of `sample` stayed bounded for the whole iteration budget.
    #[must_use]
    pub fn is_member(&self, sample: &Sample<R>) -> bool {
        sample.iteration_count == self.max_iterations
    }

    /// Row-major set-membership view derived from the iteration counts.
    pub fn membership(&self) -> impl Iterator<Item = bool> + '_ {
        self.samples.iter().map(|sample| self.is_member(sample))
    }

    #[must_use]
    pub fn member_count(&self) -> usize {
        self.membership().filter(|&member| member).count()
    }
}

impl<'a, R> IntoIterator for &'a PointGrid<R> {
    type Item = &'a Sample<R>;
    type IntoIter = std::slice::Iter<'a, Sample<R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples()
    }
}
