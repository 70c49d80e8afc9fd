use std::fs::File;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::presenters::file::gnuplot_script::{CONTOURS_PNG_FILE_NAME, GNUPLOT_SCRIPT_FILE_NAME};

/// Feeds `contours.plt` to gnuplot from inside `dir`, so the script's relative
/// paths resolve next to the data file. Failures are logged, never fatal.
pub fn render_with_gnuplot(dir: &Path) -> bool {
    match run_gnuplot(dir) {
        Ok(()) => {
            log::info!("rendered {}", dir.join(CONTOURS_PNG_FILE_NAME).display());
            true
        }
        Err(err) => {
            log::warn!("gnuplot rendering skipped: {}", err);
            false
        }
    }
}

fn run_gnuplot(dir: &Path) -> io::Result<()> {
    let script = File::open(dir.join(GNUPLOT_SCRIPT_FILE_NAME))?;

    let status = Command::new("gnuplot")
        .current_dir(dir)
        .stdin(Stdio::from(script))
        .status()?;

    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other(format!("gnuplot exited with {}", status)))
    }
}
