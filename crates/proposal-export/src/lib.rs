//! proposal-export
//!
//! HTML assembly from the proposal templates, and PDF rendering through an
//! external HTML-to-PDF program.

pub mod error;
pub mod pdf;
pub mod render;
pub mod styles;

pub use error::ExportError;
pub use pdf::{DocumentRenderer, WeasyPrint};
pub use render::{assemble, assemble_value};
