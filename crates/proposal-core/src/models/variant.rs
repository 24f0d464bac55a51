use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which proposal layout to produce.
///
/// Both layouts share the same [`ProposalConfig`](super::proposal::ProposalConfig)
/// shape; they differ in built-in defaults, output file naming and static
/// template content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Cover, design, addition/remodel, kitchen, payments, notes.
    #[default]
    Standard,
    /// Longer layout: 2nd story addition, kitchen, master bath, ADU, roofing.
    FullScope,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Standard, Variant::FullScope];

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Standard => "standard",
            Variant::FullScope => "full-scope",
        }
    }

    /// Suffix appended to the derived file stem, before `.pdf`.
    pub fn file_suffix(self) -> &'static str {
        match self {
            Variant::Standard => "",
            Variant::FullScope => "_FullScope",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(Variant::Standard),
            "full-scope" | "full_scope" | "fullscope" => Ok(Variant::FullScope),
            other => Err(format!(
                "unknown variant `{other}` (expected `standard` or `full-scope`)"
            )),
        }
    }
}
