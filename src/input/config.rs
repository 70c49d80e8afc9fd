use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::precision::PrecisionSelection;

/// A decimal given either as a TOML string (kept verbatim) or a TOML number.
///
/// Strings are preferred for deep zooms, since a TOML float has already
/// been rounded to `f64` by the time it reaches us.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ConfigDecimal {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl ConfigDecimal {
    #[must_use]
    pub fn to_decimal_string(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Integer(value) => value.to_string(),
            Self::Float(value) => value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegionConfig {
    pub x_min: ConfigDecimal,
    pub x_max: ConfigDecimal,
    pub y_min: ConfigDecimal,
    pub y_max: ConfigDecimal,
}

impl RegionConfig {
    #[must_use]
    pub fn bounds(&self) -> [String; 4] {
        [&self.x_min, &self.x_max, &self.y_min, &self.y_max].map(ConfigDecimal::to_decimal_string)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JuliaConfig {
    pub re: Option<ConfigDecimal>,
    pub im: Option<ConfigDecimal>,
}

/// Settings file read with `--config`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub max_pixels: Option<u32>,
    pub max_iterations: Option<u32>,
    pub contour_levels: Option<u32>,
    pub colour_theme: Option<u32>,
    pub fractal: Option<FractalKinds>,
    pub precision: Option<PrecisionSelection>,
    pub output_dir: Option<PathBuf>,
    pub render: Option<bool>,
    pub region: Option<RegionConfig>,
    pub julia: JuliaConfig,
}

impl FileConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("parsing settings")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;

        Self::from_toml_str(&text).with_context(|| format!("loading {}", path.display()))
    }
}
