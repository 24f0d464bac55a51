use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::variant::Variant;
use crate::output;

/// One milestone in the payment schedule.
///
/// Numbering is never stored; it comes from the position in
/// [`ProposalConfig::payments`] at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub description: String,
    pub amount: String,
}

impl Payment {
    pub fn new(description: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            amount: amount.into(),
        }
    }
}

impl<D: Into<String>, A: Into<String>> From<(D, A)> for Payment {
    fn from((description, amount): (D, A)) -> Self {
        Payment::new(description, amount)
    }
}

/// All client/project-specific values for one proposal.
///
/// Text fields are free-form display strings. `project_total` is never
/// parsed as currency and `proposal_date` is never parsed as a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalConfig {
    pub client_name: String,
    pub client_address: String,
    pub proposal_date: String,
    pub project_total: String,
    /// Cover page bullets, in display order.
    pub scope_items: Vec<String>,
    /// Payment schedule, in display order.
    pub payments: Vec<Payment>,
    /// Explicit output location. `None` or an empty path derives one from
    /// `client_name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_path: Option<PathBuf>,
}

impl Default for ProposalConfig {
    fn default() -> Self {
        Self::defaults(Variant::Standard)
    }
}

impl ProposalConfig {
    /// Built-in values for a template variant.
    pub fn defaults(variant: Variant) -> Self {
        match variant {
            Variant::Standard => standard_defaults(),
            Variant::FullScope => full_scope_defaults(),
        }
    }

    /// Where the rendered PDF goes: `output_path` if set and non-empty,
    /// otherwise a name derived from `client_name` inside `base_dir`.
    pub fn resolve_output(&self, variant: Variant, base_dir: &Path) -> PathBuf {
        match &self.output_path {
            Some(path) if !path.as_os_str().is_empty() => path.clone(),
            _ => output::derive_output_path(base_dir, variant, &self.client_name),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn payments(rows: &[(&str, &str)]) -> Vec<Payment> {
    rows.iter().map(|&row| Payment::from(row)).collect()
}

fn standard_defaults() -> ProposalConfig {
    ProposalConfig {
        client_name: "Sergio castillo".to_string(),
        client_address: "11263 Stonecress Ave, Fountain Valley, CA, 92708".to_string(),
        proposal_date: "February 2026".to_string(),
        project_total: "$298,800".to_string(),
        scope_items: strings(&["Plans", "350 SF 1st story Addition", "Interior Remodel"]),
        payments: payments(&[
            ("Down payment", "$1,000"),
            ("Mobilization & Start Architectural Design", "$10,500"),
            ("Upon plans approval", "$6,000"),
            ("Site Prep & Start Demo", "$25,000"),
            ("Upon Start Foundation Work", "$25,000"),
            ("Upon Foundation Inspection", "$15,000"),
            ("Pass framing Inspection", "$30,000"),
            ("Upon Start Rough MEP", "$36,000"),
            ("Pass rough MEP", "$20,000"),
            ("Upon Start Drywall Work", "$16,000"),
            ("Upon Start Exterior Lath", "$15,000"),
            (
                "Upon finish cabinets installation and start countertop fabrication",
                "$22,700",
            ),
            ("Upon pass lath & insulation inspection", "$15,000"),
            ("Upon Finish Stucco", "$20,000"),
            ("Upon Start Roofing For addition", "$14,000"),
            ("Upon Pass Final Inspection", "$21,100"),
            ("Upon Completion final touch ups", "$6,500"),
        ]),
        output_path: None,
    }
}

fn full_scope_defaults() -> ProposalConfig {
    ProposalConfig {
        client_name: "Robert & Angela Martinez".to_string(),
        client_address: "4821 Seabreeze Lane, Huntington Beach, CA 92648".to_string(),
        proposal_date: "March 2026".to_string(),
        project_total: "$541,000".to_string(),
        scope_items: strings(&[
            "Plans & Engineering",
            "Full 2nd Story Addition (1,200 SF)",
            "Complete Kitchen Remodel",
            "Master Bathroom Remodel",
            "Garage Conversion to ADU (400 SF)",
            "Roofing (Full Replacement)",
        ]),
        payments: payments(&[
            ("Down payment", "$1,000"),
            ("Mobilization & Start Architectural Design", "$18,000"),
            ("Upon Plans Approval & Permit Submission", "$12,000"),
            ("Site Prep & Start Demo", "$35,000"),
            ("Upon Start Foundation Work (Slab on Grade)", "$38,000"),
            ("Upon Foundation Inspection Approval", "$25,000"),
            ("Upon Start Framing (Wood Framing)", "$48,000"),
            ("Pass Framing Inspection", "$35,000"),
            ("Upon Start Rough MEP", "$42,000"),
            ("Pass Rough MEP Inspection", "$28,000"),
            ("Upon Start Drywall & Insulation", "$22,000"),
            ("Upon Start Exterior Lath & Stucco", "$20,000"),
            ("Upon Start Kitchen Cabinet Installation (Custom Shaker)", "$35,000"),
            ("Upon Start Countertop Fabrication (Quartz)", "$18,000"),
            ("Upon Pass Lath & Insulation Inspection", "$15,000"),
            ("Upon Finish Stucco & Exterior Paint", "$22,000"),
            ("Upon Start Tile Roof Installation", "$28,000"),
            ("Upon Start Master Bath Tile Work (Porcelain)", "$16,000"),
            ("Upon Start ADU Interior Finishes", "$24,000"),
            ("Upon Start Hardwood Flooring (Engineered Wood)", "$18,000"),
            ("Upon Pass Final Inspection", "$28,000"),
            ("Upon Completion & Final Punch List", "$12,000"),
        ]),
        output_path: None,
    }
}
