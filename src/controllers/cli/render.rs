use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::cancellation::{CancelToken, NeverCancel};
use crate::core::actions::sample_point_grid::{GenerationStrategy, sample_point_grid};
use crate::core::data::screen_resolution::ScreenResolution;
use crate::core::errors::EngineError;
use crate::core::fractals::escape_time::{EscapeTimeAlgorithm, FractalParams};
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::precision::{Extended, PrecisionKinds, Quadruple, Real};
use crate::core::util::fit_resolution::fit_resolution;
use crate::input::settings::RenderSettings;
use crate::presenters::file::contours_csv::ContourCsvPresenter;
use crate::presenters::file::gnuplot_runner::render_with_gnuplot;
use crate::presenters::file::gnuplot_script::{CONTOURS_PNG_FILE_NAME, GnuplotScriptPresenter};
use crate::presenters::file::membership_mask::MembershipMaskPresenter;
use crate::storage::atomic_write::{atomic_write, remove_if_present};

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderReport {
    pub precision: PrecisionKinds,
    pub resolution: ScreenResolution,
    pub member_count: usize,
    pub files: Vec<PathBuf>,
    pub rendered: bool,
    pub duration: Duration,
}

pub struct RenderController<C: CancelToken = NeverCancel> {
    settings: RenderSettings,
    strategy: GenerationStrategy,
    cancel: C,
}

impl RenderController {
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            strategy: GenerationStrategy::default(),
            cancel: NeverCancel,
        }
    }
}

impl<C: CancelToken> RenderController<C> {
    pub fn with_cancel<T: CancelToken>(self, cancel: T) -> RenderController<T> {
        RenderController {
            settings: self.settings,
            strategy: self.strategy,
            cancel,
        }
    }

    pub fn with_strategy(mut self, strategy: GenerationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Samples the configured region and writes every output file.
    ///
    /// Nothing is written unless the sampling pass completes.
    pub fn run(&self) -> Result<RenderReport> {
        let precision = self.settings.precision_kind()?;
        log::debug!("precision {} selected by {:?}", precision, self.settings.precision);

        match precision {
            PrecisionKinds::Standard => self.run_at::<f64>(),
            PrecisionKinds::Extended => self.run_at::<Extended>(),
            PrecisionKinds::Quadruple => self.run_at::<Quadruple>(),
        }
    }

    fn run_at<R: Real>(&self) -> Result<RenderReport> {
        let settings = &self.settings;

        let complex_rect = settings.complex_rect::<R>()?;
        let mapping = fit_resolution(&complex_rect, settings.max_pixels).map_err(EngineError::from)?;
        let params = FractalParams::new(settings.variant::<R>()?, settings.max_iterations).map_err(EngineError::from)?;
        let resolution = mapping.resolution();

        log::info!(
            "Rendering {} set at {}x{}",
            params.display_name(),
            resolution.width(),
            resolution.height()
        );
        log::info!("Precision: {}", R::KIND);
        log::info!("Max iterations: {}", params.max_iterations());

        let kind = params.kind();
        let algorithm = EscapeTimeAlgorithm::new(complex_rect, mapping, params);
        let start = Instant::now();
        let grid = sample_point_grid(&algorithm, self.strategy, &self.cancel).map_err(EngineError::from)?;
        let duration = start.elapsed();

        log::info!("Duration: {:?}", duration);

        let csv = ContourCsvPresenter::new(settings.contour_levels);
        let mask = MembershipMaskPresenter::new(kind);
        let script = GnuplotScriptPresenter::new(settings.contour_levels, settings.theme);
        let presenters: [&dyn FilePresenterPort<R>; 3] = [&csv, &mask, &script];

        let rendered_files = presenters
            .iter()
            .map(|presenter| {
                let path = settings.output_dir.join(presenter.file_name());
                presenter
                    .render_to_bytes(&grid, algorithm.complex_rect())
                    .with_context(|| format!("rendering {}", path.display()))
                    .map(|bytes| (path, bytes))
            })
            .collect::<Result<Vec<_>>>()?;

        remove_stale_outputs(&settings.output_dir, kind)?;

        let mut files = Vec::with_capacity(rendered_files.len());
        for (path, bytes) in rendered_files {
            atomic_write(&path, bytes).with_context(|| format!("writing {}", path.display()))?;
            log::info!("Saved to {}", path.display());
            files.push(path);
        }

        let rendered = settings.render && render_with_gnuplot(&settings.output_dir);

        Ok(RenderReport {
            precision: R::KIND,
            resolution,
            member_count: grid.member_count(),
            files,
            rendered,
            duration,
        })
    }
}

/// Removes outputs a previous run may have left that this run will not rewrite:
/// the other fractal's mask and the rendered image.
fn remove_stale_outputs(dir: &Path, kind: FractalKinds) -> Result<()> {
    let stale_masks = FractalKinds::ALL
        .iter()
        .filter(|&&other| other != kind)
        .map(|other| other.mask_file_name());

    for name in stale_masks.chain([CONTOURS_PNG_FILE_NAME]) {
        let path = dir.join(name);
        if remove_if_present(&path).with_context(|| format!("removing {}", path.display()))? {
            log::debug!("removed stale {}", path.display());
        }
    }

    Ok(())
}
