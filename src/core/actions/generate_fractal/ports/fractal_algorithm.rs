use crate::core::data::point::Point;

/// Per-pixel computation driven by the grid generators.
///
/// `compute` must depend only on `pixel` and the algorithm's own immutable
/// state, so pixels can be evaluated in any order or in parallel.
pub trait FractalAlgorithm {
    type Success: Default + Send;

    fn compute(&self, pixel: Point) -> Self::Success;
}
