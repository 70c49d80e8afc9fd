use std::io::{self, Write};
use std::num::NonZeroU32;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::point_grid::PointGrid;
use crate::core::precision::Real;

pub const CONTOURS_CSV_FILE_NAME: &str = "contours.csv";

/// One `x, y, band` line per sample, coordinates normalized to the unit square
/// and a blank line after every row so gnuplot reads the file as a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContourCsvPresenter {
    contour_levels: NonZeroU32,
}

impl ContourCsvPresenter {
    pub fn new(contour_levels: NonZeroU32) -> Self {
        Self { contour_levels }
    }
}

impl<R: Real> FilePresenterPort<R> for ContourCsvPresenter {
    fn file_name(&self) -> &str {
        CONTOURS_CSV_FILE_NAME
    }

    fn render(&self, grid: &PointGrid<R>, rect: &ComplexRect<R>, out: &mut dyn Write) -> io::Result<()> {
        let levels = self.contour_levels.get();

        for row in grid.rows() {
            for sample in row {
                let (x, y) = rect.normalize(&sample.coordinate());
                writeln!(
                    out,
                    "{}, {}, {}",
                    x.to_decimal(),
                    y.to_decimal(),
                    sample.iteration_count % levels
                )?;
            }
            writeln!(out)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::sample::Sample;
    use crate::core::data::screen_resolution::ScreenResolution;

    fn grid() -> (PointGrid<f64>, ComplexRect<f64>) {
        let rect = ComplexRect::from_bounds(-2.0, 2.0, -1.0, 1.0).unwrap();
        let samples = vec![
            Sample { x0: -2.0, y0: -1.0, iteration_count: 1 },
            Sample { x0: 0.0, y0: -1.0, iteration_count: 70 },
            Sample { x0: -2.0, y0: 0.0, iteration_count: 100 },
            Sample { x0: 0.0, y0: 0.0, iteration_count: 64 },
        ];
        let grid = PointGrid::from_samples(ScreenResolution::new(2, 2).unwrap(), 100, samples).unwrap();

        (grid, rect)
    }

    fn render(levels: u32) -> String {
        let (grid, rect) = grid();
        let presenter = ContourCsvPresenter::new(NonZeroU32::new(levels).unwrap());
        let mut out = Vec::new();

        presenter.render(&grid, &rect, &mut out).unwrap();

        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_rows_are_separated_by_blank_lines() {
        let text = render(64);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[2], "");
        assert_eq!(lines[5], "");
    }

    #[test]
    fn test_bands_wrap_at_contour_levels() {
        let text = render(64);
        let bands: Vec<&str> = text
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| line.rsplit(", ").next().unwrap())
            .collect();

        assert_eq!(bands, vec!["1", "6", "36", "0"]);
    }

    #[test]
    fn test_coordinates_are_normalized() {
        let text = render(64);
        let first: Vec<f64> = text
            .lines()
            .nth(4)
            .unwrap()
            .split(", ")
            .take(2)
            .map(|field| field.parse().unwrap())
            .collect();

        assert_eq!(first, vec![0.5, 0.5]);
    }

    #[test]
    fn test_single_level_collapses_every_band() {
        let text = render(1);

        assert!(text.lines().filter(|line| !line.is_empty()).all(|line| line.ends_with(", 0")));
    }
}
