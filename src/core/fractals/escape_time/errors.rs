use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractalParamsError {
    InvalidIterationBudget,
}

impl fmt::Display for FractalParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIterationBudget => {
                write!(f, "Maximum iterations must be greater than zero")
            }
        }
    }
}

impl Error for FractalParamsError {}
