use clap::{Parser, Subcommand};
use gridlab::Locale;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "gridctl",
    version,
    about = "Watches and manages instances of the grid.lab provisioning service"
)]
pub struct Args {
    /// TOML configuration file
    #[arg(short, long, env = "GRIDCTL_CONFIG")]
    pub config: Option<PathBuf>,
    /// The address of the provisioning service
    #[arg(short, long, env = "GRIDCTL_ADDRESS")]
    pub address: Option<String>,
    /// The zone bare host names are placed under
    #[arg(short, long, env = "GRIDCTL_ZONE")]
    pub zone: Option<String>,
    /// Language of the messages (es, en)
    #[arg(short = 'L', long, env = "GRIDCTL_LOCALE")]
    pub locale: Option<Locale>,
    /// Default log filter, overridden by RUST_LOG
    #[arg(long, env = "GRIDCTL_LOG")]
    pub log: Option<String>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Keep every panel refreshed and read commands from stdin
    Watch,
    /// List the deployed instances
    Instances,
    /// Show the DNS operation log
    DnsLogs,
    /// Show the A records of the zone
    DnsDirect,
    /// Create the VM and DNS record for a host
    Prepare {
        hostname: String,
    },
    /// Provision a host without content
    Provision {
        hostname: String,
    },
    /// Upload a zip bundle to a prepared host
    Publish {
        hostname: String,
        file: PathBuf,
    },
    /// Destroy an instance
    Delete {
        id: String,
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}
