use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use commands::{check_dist, serve};

use crate::config::{SiteConfig, DEFAULT_BIND_ADDRESS, DEFAULT_DIST_DIR, DEFAULT_REQUEST_TIMEOUT_SECS};

#[derive(Parser)]
#[command(name = "reiv-signals")]
#[command(about = "Site host for the REIV IP Signals landing page and demo dashboard")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the built frontend bundle
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:8080, 127.0.0.1:3000)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = DEFAULT_BIND_ADDRESS)]
        bind_address: String,

        /// Directory produced by `trunk build`
        #[arg(short, long, env = "SITE_DIST_DIR", default_value = DEFAULT_DIST_DIR)]
        dist_dir: String,

        /// Per-request timeout in seconds
        #[arg(short = 't', long, env = "REQUEST_TIMEOUT_SECS", default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
        request_timeout_secs: u64,

        /// Expose Prometheus request metrics at /metrics
        #[arg(short, long, env = "ENABLE_METRICS")]
        metrics: bool,
    },
    /// Check that a frontend bundle is complete and list the pages it serves
    CheckDist {
        /// Directory produced by `trunk build`
        #[arg(short, long, env = "SITE_DIST_DIR", default_value = DEFAULT_DIST_DIR)]
        dist_dir: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { bind_address, dist_dir, request_timeout_secs, metrics } => {
                let config = SiteConfig::new(bind_address, dist_dir, request_timeout_secs);
                serve(config, metrics).await?;
            }
            Commands::CheckDist { dist_dir } => {
                check_dist(&dist_dir)?;
            }
        }
        Ok(())
    }
}
