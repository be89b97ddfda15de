//! Command-line interface definitions.

use crate::resolver::UrlOptions;
use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Canonical URLs for code-hosting entities
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: urlbuilder.toml, searched upward)
    #[arg(
        short = 'C',
        long,
        default_value = crate::config::CONFIG_FILE,
        value_hint = clap::ValueHint::FilePath
    )]
    pub config: PathBuf,

    /// Override the instance base URL from the config file
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Print debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Resolve JSON-encoded entities to URLs, one per line
    #[command(visible_alias = "r")]
    Resolve {
        #[command(flatten)]
        args: ResolveArgs,
    },

    /// List every entity kind with its path template
    #[command(visible_alias = "k")]
    Kinds,
}

/// Resolve command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ResolveArgs {
    /// JSON file holding an entity or an array of entities. Use `-` for stdin.
    #[arg(value_name = "FILE", default_value = "-")]
    pub input: PathBuf,

    /// Print paths without the base URL
    #[arg(short = 'p', long)]
    pub only_path: bool,

    /// Link snippets to their raw content
    #[arg(long)]
    pub raw: bool,

    /// Git ref for design images
    #[arg(long = "ref", value_name = "REF")]
    pub git_ref: Option<String>,

    /// Resized image variant for design images (needs --ref)
    #[arg(long, value_name = "SIZE")]
    pub size: Option<String>,

    /// Load entities through deferred placeholders instead of eagerly
    #[arg(long)]
    pub deferred: bool,
}

impl From<&ResolveArgs> for UrlOptions {
    fn from(args: &ResolveArgs) -> Self {
        Self {
            only_path: args.only_path,
            raw: args.raw,
            git_ref: args.git_ref.clone(),
            size: args.size.clone(),
        }
    }
}
