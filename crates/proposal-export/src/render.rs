use serde_json::Value;
use tera::{Context, Tera};

use proposal_core::{ProposalConfig, Variant};

use crate::error::{ExportError, error_chain};
use crate::styles::BrandStyles;

const SLOTS: &str = include_str!("../templates/slots.html");
const STANDARD: &str = include_str!("../templates/standard.html");
const FULL_SCOPE: &str = include_str!("../templates/full_scope.html");

/// Context keys every layout reads.
pub const REQUIRED_SLOTS: [&str; 6] = [
    "client_name",
    "client_address",
    "proposal_date",
    "project_total",
    "scope_items",
    "payments",
];

/// Registered name of a layout. The `.html` suffix turns on Tera's
/// autoescaping for every `{{ }}` slot.
pub fn template_name(variant: Variant) -> &'static str {
    match variant {
        Variant::Standard => "standard.html",
        Variant::FullScope => "full_scope.html",
    }
}

/// Load every layout plus the shared `slots.html` macros into one Tera
/// instance, so all variants fill their lists the same way.
pub fn templates() -> Result<Tera, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("slots.html", SLOTS),
        (template_name(Variant::Standard), STANDARD),
        (template_name(Variant::FullScope), FULL_SCOPE),
    ])
    .map_err(|e| ExportError::TemplateParse(error_chain(&e)))?;
    Ok(tera)
}

/// Render the HTML document for `config` using the `variant` layout.
pub fn assemble(variant: Variant, config: &ProposalConfig) -> Result<String, ExportError> {
    let value = serde_json::to_value(config)?;
    assemble_value(variant, value)
}

/// Render from an already serialized config.
///
/// Checks that every slot in [`REQUIRED_SLOTS`] is present before any
/// template work happens.
pub fn assemble_value(variant: Variant, value: Value) -> Result<String, ExportError> {
    check_required_slots(&value)?;

    let tera = templates()?;
    let mut context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(error_chain(&e)))?;
    context.insert("brand", &BrandStyles::default());

    let rendered = tera.render(template_name(variant), &context)?;
    tracing::debug!(%variant, bytes = rendered.len(), "proposal document assembled");
    Ok(rendered)
}

fn check_required_slots(value: &Value) -> Result<(), ExportError> {
    let Some(object) = value.as_object() else {
        return Err(ExportError::RenderInput(REQUIRED_SLOTS[0].to_string()));
    };

    for slot in REQUIRED_SLOTS {
        match object.get(slot) {
            None | Some(Value::Null) => return Err(ExportError::RenderInput(slot.to_string())),
            Some(_) => {}
        }
    }
    Ok(())
}
