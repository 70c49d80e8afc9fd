pub mod algorithm;
pub mod errors;
pub mod iteration;
pub mod params;
pub mod variant;

pub use algorithm::EscapeTimeAlgorithm;
pub use errors::FractalParamsError;
pub use iteration::escape_time;
pub use params::{DEFAULT_MAX_ITERATIONS, FractalParams};
pub use variant::FractalVariant;
