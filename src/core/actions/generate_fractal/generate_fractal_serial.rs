use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled};
use crate::core::actions::generate_fractal::errors::GenerateFractalError;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::screen_resolution::ScreenResolution;

/// Reserves exactly one default-initialised cell per pixel, failing instead of aborting.
pub(crate) fn allocate_cells<S: Default>(
    resolution: ScreenResolution,
) -> Result<Vec<S>, GenerateFractalError> {
    let failure = GenerateFractalError::AllocationFailure {
        width: resolution.width(),
        height: resolution.height(),
    };
    let cells = resolution.cell_count().ok_or_else(|| failure.clone())?;

    let mut buffer = Vec::new();
    buffer.try_reserve_exact(cells).map_err(|_| failure)?;
    buffer.resize_with(cells, S::default);

    Ok(buffer)
}

/// Computes every pixel of row `y` into `row`, polling `cancel` at the row
/// start and every [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels.
pub(crate) fn fill_row<Alg, C>(
    y: usize,
    row: &mut [Alg::Success],
    algorithm: &Alg,
    cancel: &C,
) -> Result<(), Cancelled>
where
    Alg: FractalAlgorithm,
    C: CancelToken,
{
    for (x, cell) in row.iter_mut().enumerate() {
        if x % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
            return Err(Cancelled);
        }

        *cell = algorithm.compute(Point {
            x: x as u32,
            y: y as u32,
        });
    }

    Ok(())
}

/// Reference generator: visits pixels row-major on the calling thread.
pub fn generate_fractal_serial<Alg, C>(
    resolution: ScreenResolution,
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, GenerateFractalError>
where
    Alg: FractalAlgorithm,
    C: CancelToken,
{
    let mut cells = allocate_cells(resolution)?;

    for (y, row) in cells.chunks_mut(resolution.width() as usize).enumerate() {
        fill_row(y, row, algorithm, cancel)?;
    }

    Ok(cells)
}
