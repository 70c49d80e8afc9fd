use std::io::{self, Write};

use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::point_grid::PointGrid;
use crate::core::precision::Real;

/// Output collaborator fed with a finished grid.
pub trait FilePresenterPort<R: Real> {
    fn file_name(&self) -> &str;

    fn render(&self, grid: &PointGrid<R>, rect: &ComplexRect<R>, out: &mut dyn Write) -> io::Result<()>;

    /// Whole file contents, so a run can hold every output before writing any.
    fn render_to_bytes(&self, grid: &PointGrid<R>, rect: &ComplexRect<R>) -> io::Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.render(grid, rect, &mut bytes)?;

        Ok(bytes)
    }
}
