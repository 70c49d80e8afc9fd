use std::io::{self, Write};
use std::num::NonZeroU32;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::point_grid::PointGrid;
use crate::core::precision::Real;
use crate::presenters::file::colour_theme::ColourTheme;
use crate::presenters::file::contours_csv::CONTOURS_CSV_FILE_NAME;

pub const GNUPLOT_SCRIPT_FILE_NAME: &str = "contours.plt";
pub const CONTOURS_PNG_FILE_NAME: &str = "contours.png";

/// Gnuplot script that draws `contours.csv` as a borderless image sized to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GnuplotScriptPresenter {
    contour_levels: NonZeroU32,
    theme: ColourTheme,
}

impl GnuplotScriptPresenter {
    pub fn new(contour_levels: NonZeroU32, theme: ColourTheme) -> Self {
        Self {
            contour_levels,
            theme,
        }
    }
}

impl<R: Real> FilePresenterPort<R> for GnuplotScriptPresenter {
    fn file_name(&self) -> &str {
        GNUPLOT_SCRIPT_FILE_NAME
    }

    fn render(&self, grid: &PointGrid<R>, _rect: &ComplexRect<R>, out: &mut dyn Write) -> io::Result<()> {
        let resolution = grid.resolution();

        writeln!(out, "reset")?;
        for setting in ["key", "grid", "xzeroaxis", "yzeroaxis", "xtics", "ytics", "border", "surface", "colorbox"] {
            writeln!(out, "unset {}", setting)?;
        }
        writeln!(out, "set contour base")?;
        writeln!(out, "set view map")?;
        writeln!(out, "set cntrparam levels {}", self.contour_levels)?;
        writeln!(out, "set isosample 250, 250")?;
        writeln!(out, "set palette rgbformulae {}", self.theme.rgb_formulae())?;
        writeln!(out, "set size ratio -1")?;
        writeln!(out, "set lmargin at screen 0")?;
        writeln!(out, "set rmargin at screen 1")?;
        writeln!(out, "set tmargin at screen 0")?;
        writeln!(out, "set bmargin at screen 1")?;
        writeln!(
            out,
            "set terminal png size {},{}",
            resolution.width(),
            resolution.height()
        )?;
        writeln!(out, "set output '{}'", CONTOURS_PNG_FILE_NAME)?;
        writeln!(out, "splot '{}' u 1:2:3 w image", CONTOURS_CSV_FILE_NAME)?;

        Ok(())
    }
}
