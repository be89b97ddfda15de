//! urlbuilder - resolve code-hosting entities to canonical URLs.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use urlbuilder::cli::{self, Cli, Commands};
use urlbuilder::config::{UrlBuilderConfig, init_config};
use urlbuilder::{debug, logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = init_config(UrlBuilderConfig::discover(
        &cli.config,
        cli.base_url.as_deref(),
    )?);
    if config.config_path.as_os_str().is_empty() {
        debug!("config"; "no {} found, using defaults", cli.config.display());
    } else {
        debug!("config"; "loaded {}", config.config_path.display());
    }
    debug!("config"; "base url: {}", config.base_url());

    match &cli.command {
        Commands::Resolve { args } => cli::resolve::run(args),
        Commands::Kinds => cli::kinds::run(),
    }
}
