use rayon::prelude::*;

use crate::core::actions::cancellation::{CancelToken, NeverCancel};
use crate::core::actions::generate_fractal::errors::GenerateFractalError;
use crate::core::actions::generate_fractal::generate_fractal_serial::{allocate_cells, fill_row};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::screen_resolution::ScreenResolution;

/// Generates fractal data in parallel using rayon.
///
/// Output is identical to [`generate_fractal_serial`] run with [`NeverCancel`].
/// For cancel-aware generation, use [`generate_fractal_parallel_rayon_cancelable`].
///
/// [`generate_fractal_serial`]: crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial
pub fn generate_fractal_parallel_rayon<Alg>(
    resolution: ScreenResolution,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, GenerateFractalError>
where
    Alg: FractalAlgorithm + Sync,
{
    generate_fractal_parallel_rayon_cancelable(resolution, algorithm, &NeverCancel)
}

/// Generates fractal data in parallel with cancellation support.
///
/// The grid is allocated up front and split into rows; every rayon task
/// writes only the rows it was handed, so no locking is needed. Each row
/// checks for cancellation at its start and periodically within it.
///
/// Returns [`GenerateFractalError::Cancelled`] if cancellation was requested,
/// in which case the partially filled grid is dropped.
pub fn generate_fractal_parallel_rayon_cancelable<Alg, C>(
    resolution: ScreenResolution,
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, GenerateFractalError>
where
    Alg: FractalAlgorithm + Sync,
    C: CancelToken,
{
    let mut cells = allocate_cells(resolution)?;

    cells
        .par_chunks_mut(resolution.width() as usize)
        .enumerate()
        .try_for_each(|(y, row)| fill_row(y, row, algorithm, cancel))?;

    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::Cancelled;
    use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
    use crate::core::data::point::Point;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    #[derive(Debug)]
    struct StubSuccessAlgorithm {}

    impl FractalAlgorithm for StubSuccessAlgorithm {
        type Success = u64;

        fn compute(&self, pixel: Point) -> Self::Success {
            u64::from(pixel.x + pixel.y)
        }
    }

    fn resolution(width: u32, height: u32) -> ScreenResolution {
        ScreenResolution::new(width, height).unwrap()
    }

    #[test]
    fn test_rayon_generates_same_results_as_sequential() {
        let algorithm = StubSuccessAlgorithm {};

        let sequential_results =
            generate_fractal_serial(resolution(11, 9), &algorithm, &NeverCancel).unwrap();
        let rayon_results = generate_fractal_parallel_rayon(resolution(11, 9), &algorithm).unwrap();

        assert_eq!(rayon_results, sequential_results);
    }

    #[test]
    fn test_rayon_with_smallest_dimensions() {
        let algorithm = StubSuccessAlgorithm {};

        let rayon_results = generate_fractal_parallel_rayon(resolution(1, 1), &algorithm).unwrap();

        assert_eq!(rayon_results, vec![0]);
    }

    #[test]
    fn test_rayon_with_large_rect() {
        let algorithm = StubSuccessAlgorithm {};

        let sequential_results =
            generate_fractal_serial(resolution(101, 101), &algorithm, &NeverCancel).unwrap();
        let rayon_results = generate_fractal_parallel_rayon(resolution(101, 101), &algorithm).unwrap();

        assert_eq!(rayon_results.len(), 101 * 101);
        assert_eq!(rayon_results, sequential_results);
    }

    #[test]
    fn test_rayon_writes_every_cell_exactly_once() {
        struct CountingAlgorithm {
            calls: AtomicUsize,
        }

        impl FractalAlgorithm for CountingAlgorithm {
            type Success = u32;

            fn compute(&self, pixel: Point) -> Self::Success {
                self.calls.fetch_add(1, Ordering::Relaxed);
                pixel.y * 1000 + pixel.x + 1
            }
        }

        let algorithm = CountingAlgorithm {
            calls: AtomicUsize::new(0),
        };

        let results = generate_fractal_parallel_rayon(resolution(37, 23), &algorithm).unwrap();

        assert_eq!(algorithm.calls.load(Ordering::Relaxed), 37 * 23);
        assert!(results.iter().all(|&cell| cell != 0));
    }

    #[test]
    fn test_cancelable_returns_cancelled_when_token_is_cancelled() {
        let algorithm = StubSuccessAlgorithm {};
        let cancelled = AtomicBool::new(true);
        let cancel_token = || cancelled.load(Ordering::Relaxed);

        let result =
            generate_fractal_parallel_rayon_cancelable(resolution(11, 9), &algorithm, &cancel_token);

        assert_eq!(result, Err(GenerateFractalError::Cancelled(Cancelled)));
    }

    #[test]
    fn test_cancelable_cancels_after_k_polls() {
        let algorithm = StubSuccessAlgorithm {};
        let poll_count = AtomicUsize::new(0);
        let cancel_after = 3;
        let cancel_token = || poll_count.fetch_add(1, Ordering::Relaxed) >= cancel_after;

        let result =
            generate_fractal_parallel_rayon_cancelable(resolution(6, 6), &algorithm, &cancel_token);

        assert!(matches!(result, Err(GenerateFractalError::Cancelled(_))));
        assert!(poll_count.load(Ordering::Relaxed) >= cancel_after);
    }

    #[test]
    fn test_cancellation_polled_at_row_start() {
        let algorithm = StubSuccessAlgorithm {};
        let poll_count = AtomicUsize::new(0);
        let cancel_token = || {
            poll_count.fetch_add(1, Ordering::Relaxed);
            false
        };

        let result =
            generate_fractal_parallel_rayon_cancelable(resolution(2, 5), &algorithm, &cancel_token);

        assert!(result.is_ok());
        assert_eq!(poll_count.load(Ordering::Relaxed), 5);
    }

    #[test]
    fn test_cancellation_polled_multiple_times_on_wide_rows() {
        let algorithm = StubSuccessAlgorithm {};
        // 3000 pixels per row polls at 0, 1024 and 2048.
        let poll_count = AtomicUsize::new(0);
        let cancel_token = || {
            poll_count.fetch_add(1, Ordering::Relaxed);
            false
        };

        let result =
            generate_fractal_parallel_rayon_cancelable(resolution(3000, 2), &algorithm, &cancel_token);

        assert!(result.is_ok());
        assert_eq!(poll_count.load(Ordering::Relaxed), 6);
    }

    #[test]
    fn test_generate_fractal_error_displays_cancelled() {
        let err = GenerateFractalError::Cancelled(Cancelled);
        assert_eq!(format!("{}", err), "sampling pass cancelled");
    }
}
