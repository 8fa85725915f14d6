//! Write a default `panel-forge.toml`

use anyhow::{bail, Context, Result};
use clap::Args;
use console::style;
use panel_forge::{ForgeConfig, CONFIG_FILE_NAME};
use std::fs;
use std::path::{Path, PathBuf};

const HEADER: &str = "# panel-forge configuration\n\
# Values can be overridden with PANEL_FORGE_<SECTION>__<KEY> environment variables.\n\n";

/// Arguments of `init-config`
#[derive(Debug, Args)]
pub struct InitConfigCommand {
    /// Overwrite an existing configuration file
    #[arg(short, long)]
    pub force: bool,
}

impl InitConfigCommand {
    /// Write the default configuration into `project_root`
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists and `force` is not set, or if it
    /// cannot be written.
    pub fn execute(&self, project_root: &Path) -> Result<PathBuf> {
        let path = project_root.join(CONFIG_FILE_NAME);
        if path.exists() && !self.force {
            bail!(
                "{} already exists (use --force to overwrite)",
                path.display()
            );
        }

        let contents = default_config()?;
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        println!(
            "{} {}",
            style("✓ Wrote").green().bold(),
            style(path.display()).dim()
        );
        Ok(path)
    }
}

fn default_config() -> Result<String> {
    let body = toml::to_string_pretty(&ForgeConfig::default())
        .context("Failed to serialize default configuration")?;
    Ok(format!("{HEADER}{body}"))
}
