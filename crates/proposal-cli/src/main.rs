use clap::Parser;
use eyre::Result;

use proposal_cli::{Cli, run};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let renderer = cli.renderer();
    tracing::debug!(program = %renderer.program().display(), "using weasyprint");
    run(&cli, &renderer, &mut std::io::stdout().lock())?;
    Ok(())
}
