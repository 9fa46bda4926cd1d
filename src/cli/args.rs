//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::utils::date::DateTimeUtc;

/// Build release-note landing pages from exported document trees
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(
        short = 'C',
        long,
        global = true,
        default_value = "relnotes.toml",
        value_hint = clap::ValueHint::FilePath
    )]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render one landing page from a post export as JSON
    #[command(visible_alias = "r")]
    Render {
        #[command(flatten)]
        args: RenderArgs,
    },

    /// Print the excerpt of a single document tree
    #[command(visible_alias = "e")]
    Excerpt {
        #[command(flatten)]
        args: ExcerptArgs,
    },

    /// Print pagination state for a result count
    #[command(visible_alias = "p")]
    Paginate {
        #[command(flatten)]
        args: PaginateArgs,
    },
}

/// Render command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    /// Post export (JSON). Use `-` to read from stdin.
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Subject whose release notes are listed
    #[arg(short, long)]
    pub subject: Option<String>,

    /// 1-based page number
    #[arg(short = 'n', long, default_value_t = 1, allow_negative_numbers = true)]
    pub page: i64,

    /// Posts per page
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Character budget of each excerpt
    #[arg(short = 'l', long)]
    pub excerpt_length: Option<usize>,

    /// Date that decides which release dates count as this year (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub today: Option<DateTimeUtc>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

/// Excerpt command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ExcerptArgs {
    /// Document tree (JSON, rooted at a `root` node). Use `-` to read from stdin.
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub tree: PathBuf,

    /// Character budget of the excerpt
    #[arg(short = 'l', long)]
    pub excerpt_length: Option<usize>,
}

/// Paginate command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct PaginateArgs {
    /// Number of matching items across all pages
    #[arg(short, long)]
    pub total: usize,

    /// 1-based page number
    #[arg(short = 'n', long, default_value_t = 1, allow_negative_numbers = true)]
    pub page: i64,

    /// Items per page
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,
}

fn parse_date(s: &str) -> Result<DateTimeUtc, String> {
    DateTimeUtc::parse(s).ok_or_else(|| format!("`{s}` is not a valid YYYY-MM-DD date"))
}
