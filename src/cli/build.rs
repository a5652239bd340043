//! Build command: one generation pass over the content directory.

use std::fs;

use anyhow::{Context, Result};

use crate::config::SiteConfig;
use crate::site::{BuildReport, Site};
use crate::{debug, log};

/// Run a generation pass, optionally wiping the output directory first.
pub fn build_site(config: &SiteConfig, clean: bool) -> Result<BuildReport> {
    let output = &config.build.output;

    if clean && output.exists() {
        debug!("build"; "removing {}", output.display());
        fs::remove_dir_all(output)
            .with_context(|| format!("failed to clean {}", output.display()))?;
    }

    if !config.styles.enable {
        log!("styles"; "disabled in config, documents are passed through untouched");
    }

    Site::from_config(config).build()
}
