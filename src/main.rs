//! relnotes - release-note landing pages from exported document trees.

mod ast;
mod cli;
mod config;
mod excerpt;
mod landing;
mod logger;
mod pagination;
mod post;
mod timeline;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = Config::load(&cli)?;

    match &cli.command {
        Commands::Render { args } => cli::render::render_landing(args, &config),
        Commands::Excerpt { args } => cli::excerpt::print_excerpt(args, &config),
        Commands::Paginate { args } => cli::paginate::print_pagination(args, &config),
    }
}
