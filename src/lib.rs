pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;
pub mod storage;

pub use controllers::cli::render::{RenderController, RenderReport};
pub use crate::core::actions::cancellation::{CancelFlag, CancelToken, NeverCancel};
pub use crate::core::actions::sample_point_grid::{GenerationStrategy, sample_point_grid};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_rect::ComplexRect;
pub use crate::core::data::point::Point;
pub use crate::core::data::point_grid::PointGrid;
pub use crate::core::data::sample::Sample;
pub use crate::core::data::screen_mapping::ScreenMapping;
pub use crate::core::data::screen_resolution::ScreenResolution;
pub use crate::core::errors::EngineError;
pub use crate::core::fractals::escape_time::{EscapeTimeAlgorithm, FractalParams, FractalVariant};
pub use crate::core::fractals::fractal_kinds::FractalKinds;
pub use crate::core::precision::{Extended, PrecisionKinds, PrecisionSelection, Quadruple, Real};
pub use crate::core::util::fit_resolution::fit_resolution;
pub use input::cli::args::CliArgs;
pub use input::settings::{RenderSettings, SettingsError};
