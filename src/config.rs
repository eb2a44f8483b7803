//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Command line configuration for Postview.
#[derive(Debug, Clone, Parser)]
#[command(name = "postview", version, about, long_about = None)]
pub struct Config {
    /// Post JSON file, as returned by the posts API
    pub input: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Page title (defaults to the post title)
    #[arg(long)]
    pub title: Option<String>,

    /// Site name shown in the document title and footer
    #[arg(long, default_value = "Postview")]
    pub site_name: String,

    /// Print normalized markdown to stdout instead of generating a page
    #[arg(long)]
    pub normalize_only: bool,

    /// Open the generated page in the default browser
    #[arg(long)]
    pub open: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
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
    /// Returns error if the input file does not exist or is a directory,
    /// or if the site name is blank.
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            bail!("Post file does not exist: {}", self.input.display());
        }
        if self.input.is_dir() {
            bail!("Post path is a directory: {}", self.input.display());
        }
        if self.site_name.trim().is_empty() {
            bail!("Site name must not be empty");
        }

        Ok(())
    }

    /// Default log filter when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else {
            "info,postview=debug"
        }
    }
}
