use std::io::Write;
use std::path::PathBuf;

use eyre::{Result, WrapErr};

use proposal_core::resolve;
use proposal_export::{DocumentRenderer, assemble};

use crate::cli::Cli;

/// Resolve, assemble and render one proposal. Progress lines go to `out`.
///
/// Each stage wraps its error so the report says which one failed; the
/// underlying `ConfigError` / `ExportError` stays reachable via downcast.
pub fn run(cli: &Cli, renderer: &dyn DocumentRenderer, out: &mut dyn Write) -> Result<PathBuf> {
    let config = resolve(cli.variant, cli.data_file.as_deref(), &cli.overrides())
        .wrap_err("failed to resolve proposal configuration")?;
    let output = config.resolve_output(cli.variant, &cli.out_dir);

    writeln!(out, "Client  : {}", config.client_name)?;
    writeln!(out, "Address : {}", config.client_address)?;
    writeln!(out, "Date    : {}", config.proposal_date)?;
    writeln!(out, "Total   : {}", config.project_total)?;
    writeln!(out, "Output  : {}", output.display())?;
    writeln!(out, "Generating PDF...")?;

    let markup = assemble(cli.variant, &config).wrap_err("failed to assemble proposal document")?;
    tracing::info!(
        variant = %cli.variant,
        output = %output.display(),
        "rendering proposal"
    );
    renderer
        .render_pdf(&markup, &cli.base_url, &output)
        .wrap_err("failed to render proposal PDF")?;

    writeln!(out, "Done! Saved to:\n  {}", output.display())?;
    Ok(output)
}
