use crate::core::actions::cancellation::Cancelled;
use std::error::Error;
use std::fmt;

/// Failure of a whole sampling pass. Individual pixels cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateFractalError {
    /// The cancel token was raised before the grid was complete.
    Cancelled(Cancelled),
    /// Backing storage for `width x height` cells could not be reserved.
    AllocationFailure { width: u32, height: u32 },
}

impl fmt::Display for GenerateFractalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::AllocationFailure { width, height } => {
                write!(f, "unable to allocate a {}x{} point grid", width, height)
            }
        }
    }
}

impl Error for GenerateFractalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::AllocationFailure { .. } => None,
        }
    }
}

impl From<Cancelled> for GenerateFractalError {
    fn from(cancelled: Cancelled) -> Self {
        Self::Cancelled(cancelled)
    }
}
