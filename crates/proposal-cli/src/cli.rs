//! Command-line flags.

use std::path::PathBuf;

use clap::Parser;

use proposal_core::{ConfigOverrides, Variant};
use proposal_export::WeasyPrint;

#[derive(Debug, Parser)]
#[command(name = "proposal")]
#[command(version, about = "Generate a D&C Builders proposal PDF.", long_about = None)]
pub struct Cli {
    /// Layout to render: `standard` or `full-scope`
    #[arg(long, default_value_t = Variant::Standard)]
    pub variant: Variant,

    /// Load proposal data from a JSON file
    #[arg(long = "json", value_name = "FILE")]
    pub data_file: Option<PathBuf>,

    /// Client full name
    #[arg(long = "client", value_name = "NAME")]
    pub client_name: Option<String>,

    /// Client address
    #[arg(long, value_name = "ADDR")]
    pub address: Option<String>,

    /// Proposal date, e.g. "March 2026"
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,

    /// Project total, e.g. "$150,000"
    #[arg(long, value_name = "AMOUNT")]
    pub total: Option<String>,

    /// Output PDF path (default: derived from the client name)
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Directory for derived output paths
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Base directory for relative URLs in the document
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub base_url: PathBuf,

    /// weasyprint executable
    #[arg(
        long,
        value_name = "PROG",
        env = "PROPOSAL_WEASYPRINT",
        default_value = WeasyPrint::DEFAULT_PROGRAM
    )]
    pub weasyprint: PathBuf,

    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Flags that override resolved proposal fields. Only flags actually
    /// passed are set.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            client_name: self.client_name.clone(),
            client_address: self.address.clone(),
            proposal_date: self.date.clone(),
            project_total: self.total.clone(),
            output_path: self.output.clone(),
        }
    }

    pub fn renderer(&self) -> WeasyPrint {
        WeasyPrint::new(&self.weasyprint)
    }
}
