use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::generate_fractal::errors::GenerateFractalError;
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon_cancelable;
use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
use crate::core::data::point_grid::PointGrid;
use crate::core::fractals::escape_time::EscapeTimeAlgorithm;
use crate::core::precision::Real;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationStrategy {
    /// Row-major on the calling thread.
    Serial,
    /// Rows spread over the rayon thread pool.
    #[default]
    Parallel,
}

/// Runs one full sampling pass and wraps the result as a read-only grid.
pub fn sample_point_grid<R, C>(
    algorithm: &EscapeTimeAlgorithm<R>,
    strategy: GenerationStrategy,
    cancel: &C,
) -> Result<PointGrid<R>, GenerateFractalError>
where
    R: Real,
    C: CancelToken,
{
    let resolution = algorithm.mapping().resolution();

    let samples = match strategy {
        GenerationStrategy::Serial => generate_fractal_serial(resolution, algorithm, cancel)?,
        GenerationStrategy::Parallel => {
            generate_fractal_parallel_rayon_cancelable(resolution, algorithm, cancel)?
        }
    };

    Ok(PointGrid::from_generated(
        resolution,
        algorithm.params().max_iterations(),
        samples,
    ))
}
