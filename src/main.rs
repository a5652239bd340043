//! tola-styles - per-page stylesheet links for static sites.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use tola_styles::cli::{self, Cli, Commands};
use tola_styles::config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Build { clean } => cli::build::build_site(&config, *clean).map(|_| ()),
        Commands::Query { args } => cli::query::run_query(args, &config),
    }
}
