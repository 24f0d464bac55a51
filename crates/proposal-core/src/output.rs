//! Output file naming.
//!
//! Pure string functions. The same client name and variant always map to
//! the same file name.

use std::path::{Path, PathBuf};

use crate::models::variant::Variant;

const FILE_PREFIX: &str = "DCB_Proposal_";

/// Make a client name safe to use as a single path component.
///
/// Spaces become `_`, path separators become `-`. Best-effort only; two
/// names that differ just in those characters can still collide.
pub fn sanitize_client_name(client_name: &str) -> String {
    client_name
        .chars()
        .map(|c| match c {
            ' ' => '_',
            '/' | '\\' => '-',
            other => other,
        })
        .collect()
}

/// `DCB_Proposal_<safe name><variant suffix>.pdf`
pub fn file_name(variant: Variant, client_name: &str) -> String {
    format!(
        "{FILE_PREFIX}{}{}.pdf",
        sanitize_client_name(client_name),
        variant.file_suffix()
    )
}

pub fn derive_output_path(base_dir: &Path, variant: Variant, client_name: &str) -> PathBuf {
    base_dir.join(file_name(variant, client_name))
}
