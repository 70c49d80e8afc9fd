pub mod actions;
pub mod data;
pub mod errors;
pub mod fractals;
pub mod precision;
pub mod util;
