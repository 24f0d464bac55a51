//! proposal-core
//!
//! Proposal data model, layered configuration resolution and output file
//! naming. No rendering here; the only I/O is reading the optional data file.

pub mod error;
pub mod models;
pub mod output;
pub mod resolve;

pub use error::ConfigError;
pub use models::proposal::{Payment, ProposalConfig};
pub use models::variant::Variant;
pub use resolve::{ConfigOverrides, resolve};
