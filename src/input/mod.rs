//! Input adapters: the command line and the optional settings file,
//! merged into one set of run settings.

pub mod cli;
pub mod config;
pub mod settings;
