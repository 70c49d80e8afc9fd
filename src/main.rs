use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use fractal_field::{CliArgs, EngineError, RenderController, RenderSettings, SettingsError};

/// Input problems exit with 1, everything that fails after validation with 2.
fn exit_code(err: &anyhow::Error) -> u8 {
    if let Some(engine) = err.downcast_ref::<EngineError>() {
        return engine.exit_code();
    }
    if err.downcast_ref::<SettingsError>().is_some() {
        return 1;
    }
    2
}

/// Prints the error chain to `out` whatever the log filter is, and picks the exit code.
fn report_failure(err: &anyhow::Error, out: &mut dyn Write) -> u8 {
    let _ = writeln!(out, "error: {:#}", err);
    exit_code(err)
}

fn run(args: CliArgs) -> anyhow::Result<()> {
    let settings = RenderSettings::from_args(args)?;
    let report = RenderController::new(settings).run()?;

    log::info!(
        "{} of {} points in the set",
        report.member_count,
        report.resolution.cell_count().unwrap_or_default()
    );

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => ExitCode::from(report_failure(&err, &mut io::stderr())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fractal_field::core::actions::cancellation::Cancelled;
    use fractal_field::core::actions::generate_fractal::errors::GenerateFractalError;
    use fractal_field::core::fractals::escape_time::FractalParamsError;

    #[test]
    fn test_exit_codes() {
        let invalid = anyhow::Error::from(EngineError::InvalidIterationBudget(
            FractalParamsError::InvalidIterationBudget,
        ));
        let cancelled = anyhow::Error::from(EngineError::Sampling(GenerateFractalError::Cancelled(Cancelled)));
        let settings = anyhow::Error::from(SettingsError::ZeroContourLevels);
        let io = anyhow::Error::from(std::io::Error::other("disk full"));

        assert_eq!(exit_code(&invalid), 1);
        assert_eq!(exit_code(&cancelled), 2);
        assert_eq!(exit_code(&settings), 1);
        assert_eq!(exit_code(&io), 2);
    }

    #[test]
    fn test_failure_is_printed_with_its_context_chain() {
        let err = anyhow::Error::from(std::io::Error::other("disk full")).context("writing out/contours.csv");
        let mut out = Vec::new();

        let code = report_failure(&err, &mut out);

        assert_eq!(code, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "error: writing out/contours.csv: disk full\n");
    }
}
