use std::path::PathBuf;

use clap::Parser;

/// Vista image generation proxy
#[derive(Debug, Parser)]
#[command(name = "vista", about = "Image generation proxy for the travel-guide splash page")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "vista.toml", env = "VISTA_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "VISTA_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,

    /// Log filter used when `RUST_LOG` is unset
    #[arg(long, default_value = "info", env = "VISTA_LOG")]
    pub log: String,
}
