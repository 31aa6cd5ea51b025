//! Command line arguments.

use clap::Parser;
use subnet_calc::models::{PrefixArg, SubnetRequest};
use subnet_calc::output::OutputFormat;

/// Calculate IPv4 network, broadcast, host count, mask and prefix.
///
/// Give `--ip` plus exactly one of `--mask` or `--prefix`.
#[derive(Parser, Debug)]
#[command(name = "subnet-calc", version, about, long_about = None)]
pub struct CommandLine {
    /// IPv4 address, e.g. 192.168.0.1
    #[arg(long)]
    pub ip: String,

    /// Dotted-decimal subnet mask, e.g. 255.255.255.0
    #[arg(long)]
    pub mask: Option<String>,

    /// CIDR prefix length 0-32, e.g. 24
    #[arg(long, allow_hyphen_values = true)]
    pub prefix: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// More logging on stderr, repeat for more. Ignored when a log4rs yaml config
    /// ($SUBNET_CALC_LOG_CONFIG or ./log4rs.yml) is in use
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        CommandLine::parse()
    }

    /// The construction record for the subnet described by the flags.
    pub fn request(&self) -> SubnetRequest {
        SubnetRequest {
            ip: self.ip.clone(),
            mask: self.mask.clone(),
            prefix: self.prefix.clone().map(PrefixArg::Text),
        }
    }
}
