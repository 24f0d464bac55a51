//! proposal-cli library root.
//!
//! The binary is a thin wrapper around [`run`]; keeping it here lets
//! integration tests drive the whole pipeline with a stand-in renderer.

pub mod cli;
pub mod run;

pub use cli::Cli;
pub use run::run;
