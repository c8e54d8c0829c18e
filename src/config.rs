//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;
use tracing::warn;

/// Command line configuration for ghostshell.
#[derive(Debug, Clone, Parser)]
#[command(name = "ghostshell", version, about, long_about = None)]
pub struct Config {
    /// Directory of pre-rendered HTML page fragments
    #[arg(default_value = "content")]
    pub content: PathBuf,

    /// Site settings JSON file
    #[arg(short, long, default_value = "settings.json")]
    pub settings: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Public base URL of the site, used for feed links
    #[arg(long)]
    pub site_url: String,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Do not open the generated home page in a browser
    #[arg(long)]
    pub no_open: bool,
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
    /// Returns error if the content directory or settings file does not
    /// exist, or the site URL is not an absolute http(s) URL.
    pub fn validate(&self) -> Result<()> {
        if !self.content.is_dir() {
            bail!(
                "Content directory does not exist: {}",
                self.content.display()
            );
        }

        if !self.settings.is_file() {
            bail!("Settings file does not exist: {}", self.settings.display());
        }

        if !(self.site_url.starts_with("http://") || self.site_url.starts_with("https://")) {
            bail!("Site URL must start with http:// or https://: {}", self.site_url);
        }

        if self.site_url.ends_with('/') {
            warn!("--site-url should not have a trailing slash");
        }

        Ok(())
    }

    /// Site URL without trailing slashes.
    pub fn site_url(&self) -> &str {
        self.site_url.trim_end_matches('/')
    }
}
