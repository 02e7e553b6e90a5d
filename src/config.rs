//! Command line configuration.

use crate::output::ExportFormat;
use clap::Parser;

/// Default file name, without extension, for exports.
pub const DEFAULT_OUTPUT: &str = "vlsm_output";

#[derive(Debug, Clone, Parser)]
#[command(name = "vlsm", version)]
#[command(
    about = "VLSM Calculator: Calculate subnet masks and IP ranges for a given list of hosts."
)]
pub struct CliConfig {
    /// List of hosts separated by commas (e.g., 120,2,23,8,2x10)
    #[arg(short = 'H', long, required_unless_present = "reverse_lookup")]
    pub hosts: Option<String>,

    /// Base network ID in CIDR notation
    #[arg(
        short = 'i',
        long,
        alias = "net-ID",
        env = "VLSM_NET_ID",
        default_value = "172.16.0.0/24"
    )]
    pub net_id: String,

    /// Export format
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Output file name without extension (e.g., 'custom_name')
    #[arg(short, long)]
    pub output: Option<String>,

    /// Hide the table in the standard output
    #[arg(short, long)]
    pub no_table: bool,

    /// Reverse lookup for a network in CIDR format (e.g., 192.168.10.0/24)
    #[arg(short, long)]
    pub reverse_lookup: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliConfig {
    /// Export format to use; `--output` alone implies plain text.
    pub fn export_format(&self) -> Option<ExportFormat> {
        match (self.format, &self.output) {
            (Some(format), _) => Some(format),
            (None, Some(_)) => Some(ExportFormat::Txt),
            (None, None) => None,
        }
    }

    /// Export file name without extension.
    pub fn output_name(&self) -> &str {
        self.output.as_deref().unwrap_or(DEFAULT_OUTPUT)
    }
}
