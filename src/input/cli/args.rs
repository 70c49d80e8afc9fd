use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::precision::PrecisionSelection;

#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "fractal_field",
    about = "Sample an escape-time fractal over a plane region and write contour data",
    version
)]
pub struct CliArgs {
    /// Number of contour levels
    #[arg(short = 'c', long = "contours", value_name = "N")]
    pub contour_levels: Option<u32>,

    /// Pixel budget of the longer screen axis
    #[arg(short = 's', long = "size", value_name = "N")]
    pub max_pixels: Option<u32>,

    /// Colour theme, 1 to 7
    #[arg(short = 't', long = "theme", value_name = "N")]
    pub colour_theme: Option<u32>,

    /// Iteration cap per pixel
    #[arg(short = 'i', long = "iterations", value_name = "N")]
    pub max_iterations: Option<u32>,

    /// mandelbrot or julia
    #[arg(short = 'f', long = "fractal", value_name = "KIND")]
    pub fractal: Option<FractalKinds>,

    /// Real part of the Julia constant
    #[arg(long = "julia-re", value_name = "RE", allow_negative_numbers = true)]
    pub julia_re: Option<String>,

    /// Imaginary part of the Julia constant
    #[arg(long = "julia-im", value_name = "IM", allow_negative_numbers = true)]
    pub julia_im: Option<String>,

    /// auto, standard, extended or quadruple
    #[arg(short = 'p', long = "precision", value_name = "WIDTH")]
    pub precision: Option<PrecisionSelection>,

    /// Directory the output files are written to
    #[arg(short = 'o', long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Run gnuplot on the written script
    #[arg(long = "render", action = ArgAction::SetTrue)]
    pub render: bool,

    /// TOML file with default settings
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Plane region, all four bounds or none
    #[arg(
        value_names = ["X_MIN", "X_MAX", "Y_MIN", "Y_MAX"],
        num_args = 4,
        allow_negative_numbers = true
    )]
    pub bounds: Option<Vec<String>>,
}
