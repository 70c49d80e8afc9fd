use std::error::Error;
use std::fmt;
use std::num::NonZeroU32;
use std::path::PathBuf;

use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::errors::EngineError;
use crate::core::fractals::escape_time::{DEFAULT_MAX_ITERATIONS, FractalVariant};
use crate::core::fractals::escape_time::variant::DEFAULT_JULIA_CONSTANT;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::precision::{PrecisionKinds, PrecisionSelection, Quadruple, Real};
use crate::input::cli::args::CliArgs;
use crate::input::config::FileConfig;
use crate::presenters::file::colour_theme::ColourTheme;

pub const DEFAULT_MAX_PIXELS: u32 = 2048;
pub const DEFAULT_CONTOUR_LEVELS: u32 = 64;
pub const DEFAULT_COLOUR_THEME: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    ZeroContourLevels,
    RegionArity { given: usize },
    Config(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroContourLevels => write!(f, "contour levels must be greater than zero"),
            Self::RegionArity { given } => {
                write!(f, "a region needs exactly four bounds, got {}", given)
            }
            Self::Config(message) => write!(f, "{}", message),
        }
    }
}

impl Error for SettingsError {}

/// Fully resolved run settings: command line over config file over defaults.
///
/// Numbers that end up in the plane stay as decimal strings here and are
/// parsed later, once the precision of the run is known.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    pub fractal: FractalKinds,
    pub precision: PrecisionSelection,
    pub max_pixels: u32,
    pub max_iterations: u32,
    pub contour_levels: NonZeroU32,
    pub theme: ColourTheme,
    pub region: Option<[String; 4]>,
    pub julia_constant: [String; 2],
    pub output_dir: PathBuf,
    pub render: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            fractal: FractalKinds::default(),
            precision: PrecisionSelection::default(),
            max_pixels: DEFAULT_MAX_PIXELS,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            contour_levels: NonZeroU32::new(DEFAULT_CONTOUR_LEVELS).expect("default contour levels is non-zero"),
            theme: ColourTheme::default(),
            region: None,
            julia_constant: DEFAULT_JULIA_CONSTANT.map(String::from),
            output_dir: PathBuf::from("."),
            render: false,
        }
    }
}

impl RenderSettings {
    /// Loads `--config` when given and merges it under the command line.
    pub fn from_args(args: CliArgs) -> Result<Self, SettingsError> {
        let config = match &args.config {
            Some(path) => FileConfig::load(path).map_err(|err| SettingsError::Config(format!("{:#}", err)))?,
            None => FileConfig::default(),
        };

        Self::resolve(args, config)
    }

    pub fn resolve(args: CliArgs, config: FileConfig) -> Result<Self, SettingsError> {
        let defaults = Self::default();

        let contour_levels = args
            .contour_levels
            .or(config.contour_levels)
            .map_or(Some(defaults.contour_levels), NonZeroU32::new)
            .ok_or(SettingsError::ZeroContourLevels)?;

        let region = match args.bounds {
            Some(bounds) => {
                let given = bounds.len();
                let bounds: [String; 4] = bounds
                    .try_into()
                    .map_err(|_| SettingsError::RegionArity { given })?;
                Some(bounds)
            }
            None => config.region.as_ref().map(|region| region.bounds()),
        };

        let [default_re, default_im] = defaults.julia_constant;
        let julia_re = args
            .julia_re
            .or_else(|| config.julia.re.as_ref().map(|re| re.to_decimal_string()))
            .unwrap_or(default_re);
        let julia_im = args
            .julia_im
            .or_else(|| config.julia.im.as_ref().map(|im| im.to_decimal_string()))
            .unwrap_or(default_im);

        let theme = args
            .colour_theme
            .or(config.colour_theme)
            .map_or(defaults.theme, ColourTheme::from_number);

        Ok(Self {
            fractal: args.fractal.or(config.fractal).unwrap_or(defaults.fractal),
            precision: args.precision.or(config.precision).unwrap_or(defaults.precision),
            max_pixels: args.max_pixels.or(config.max_pixels).unwrap_or(defaults.max_pixels),
            max_iterations: args
                .max_iterations
                .or(config.max_iterations)
                .unwrap_or(defaults.max_iterations),
            contour_levels,
            theme,
            region,
            julia_constant: [julia_re, julia_im],
            output_dir: args.output_dir.or(config.output_dir).unwrap_or(defaults.output_dir),
            render: args.render || config.render.unwrap_or(defaults.render),
        })
    }

    /// Plane region parsed at the width `R`, or the default region.
    pub fn complex_rect<R: Real>(&self) -> Result<ComplexRect<R>, EngineError> {
        let Some([x_min, x_max, y_min, y_max]) = &self.region else {
            return Ok(ComplexRect::default_region());
        };

        Ok(ComplexRect::from_bounds(
            R::parse(x_min)?,
            R::parse(x_max)?,
            R::parse(y_min)?,
            R::parse(y_max)?,
        )?)
    }

    /// Width of the run. `auto` measures the region at the widest width, so a
    /// deep zoom is not collapsed by `f64` before its span is known.
    pub fn precision_kind(&self) -> Result<PrecisionKinds, EngineError> {
        match self.precision {
            PrecisionSelection::Fixed(kind) => Ok(kind),
            PrecisionSelection::Auto => {
                let rect = self.complex_rect::<Quadruple>()?;
                Ok(PrecisionKinds::for_spans(rect.width().to_f64(), rect.height().to_f64()))
            }
        }
    }

    pub fn variant<R: Real>(&self) -> Result<FractalVariant<R>, EngineError> {
        match self.fractal {
            FractalKinds::Mandelbrot => Ok(FractalVariant::Mandelbrot),
            FractalKinds::Julia => {
                let [re, im] = &self.julia_constant;
                Ok(FractalVariant::Julia {
                    c: Complex {
                        real: R::parse(re)?,
                        imag: R::parse(im)?,
                    },
                })
            }
        }
    }
}
