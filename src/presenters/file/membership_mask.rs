use std::io::{self, Write};

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::point_grid::PointGrid;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::precision::Real;

pub const MEMBER_SYMBOL: char = '*';
pub const NON_MEMBER_SYMBOL: char = ' ';

/// Text mask of the set: one character per sample, one line per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MembershipMaskPresenter {
    file_name: &'static str,
}

impl MembershipMaskPresenter {
    pub fn new(kind: FractalKinds) -> Self {
        Self {
            file_name: kind.mask_file_name(),
        }
    }
}

impl<R: Real> FilePresenterPort<R> for MembershipMaskPresenter {
    fn file_name(&self) -> &str {
        self.file_name
    }

    fn render(&self, grid: &PointGrid<R>, _rect: &ComplexRect<R>, out: &mut dyn Write) -> io::Result<()> {
        for row in grid.rows() {
            let line: String = row
                .iter()
                .map(|sample| {
                    if grid.is_member(sample) {
                        MEMBER_SYMBOL
                    } else {
                        NON_MEMBER_SYMBOL
                    }
                })
                .collect();
            writeln!(out, "{}", line)?;
        }

        Ok(())
    }
}
