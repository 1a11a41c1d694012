use std::time::Duration;

use clap::Args;

use crate::fetch::FetchConfig;

/// Request flags shared by both binaries.
#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Total request timeout in seconds
    #[arg(long, default_value = "10")]
    pub timeout: u64,
    /// Connect timeout in seconds
    #[arg(long, default_value = "5")]
    pub connect_timeout: u64,
    /// Print a JSON report instead of plain lines
    #[arg(long)]
    pub json: bool,
}

impl FetchArgs {
    pub fn config(&self) -> FetchConfig {
        FetchConfig {
            connect_timeout: Duration::from_secs(self.connect_timeout),
            timeout: Duration::from_secs(self.timeout),
            ..FetchConfig::default()
        }
    }
}
