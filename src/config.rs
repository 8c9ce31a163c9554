//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

use crate::pipeline::RenderOptions;
use crate::template::{DEFAULT_TITLE, TemplateSource};

/// Command line configuration for mdp.
#[derive(Debug, Clone, Parser)]
#[command(name = "mdp", version, about, long_about = None)]
pub struct Config {
    /// Markdown file to preview
    #[arg(short, long)]
    pub file: PathBuf,

    /// Skip auto-preview and keep the generated file
    #[arg(short, long)]
    pub skip_preview: bool,

    /// Template file with {{title}} and {{body}} placeholders
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Document title
    #[arg(long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Write to this path instead of a temporary file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
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
    /// Returns error if the input file or template file does not exist.
    pub fn validate(&self) -> Result<()> {
        if !self.file.is_file() {
            bail!("Markdown file does not exist: {}", self.file.display());
        }

        if let Some(template) = &self.template {
            if !template.is_file() {
                bail!("Template file does not exist: {}", template.display());
            }
        }

        Ok(())
    }

    /// Resolves template choice and title into render options.
    pub fn render_options(&self) -> RenderOptions {
        let template = match &self.template {
            Some(path) => TemplateSource::Custom(path.clone()),
            None => TemplateSource::Default,
        };

        RenderOptions {
            template,
            title: self.title.clone(),
        }
    }
}
