//! Command line configuration.

use anyhow::{Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::fetch::FetchOptions;
use crate::highlight::DEFAULT_THEME;
use crate::logging::Verbosity;

/// Document shown on the home page.
pub const DEFAULT_DOCUMENT_URL: &str =
    "https://raw.githubusercontent.com/microsoft/vscode/main/README.md";

/// Command line configuration for notetaker.
#[derive(Debug, Clone, Parser)]
#[command(name = "notetaker", version, about, long_about = None)]
pub struct Config {
    #[command(subcommand)]
    pub command: Command,

    /// Syntax highlighting theme (base16-eighties.dark, InspiredGitHub, etc.)
    #[arg(long, global = true, default_value = DEFAULT_THEME)]
    pub theme: String,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    pub timeout: u64,

    /// Ignore HTTP proxies configured in the environment
    #[arg(long, global = true)]
    pub no_proxy: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Serve the viewer over HTTP; any path is fetched as a document URL
    Serve {
        /// Listen address
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,

        /// Document shown on the home page
        #[arg(long, default_value = DEFAULT_DOCUMENT_URL)]
        default_url: String,
    },

    /// Fetch one document and write it as a standalone HTML page
    Render {
        /// Document URL, or its path segments (`https: example.com doc.md`)
        #[arg(required = true)]
        segments: Vec<String>,

        /// Output file
        #[arg(short, long, default_value = "document.html")]
        output: PathBuf,

        /// Do not open the page in a browser
        #[arg(long)]
        no_open: bool,
    },
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the timeout is zero or the output path is a
    /// directory.
    pub fn validate(&self) -> Result<()> {
        if self.timeout == 0 {
            bail!("Timeout must be at least one second");
        }

        if let Command::Render { output, .. } = &self.command
            && output.is_dir()
        {
            bail!("Output path is a directory: {}", output.display());
        }

        Ok(())
    }

    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.verbose)
    }

    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            timeout: Duration::from_secs(self.timeout),
            system_proxy: !self.no_proxy,
        }
    }
}
