//! Command-line interface module.

mod args;
mod common;
pub mod excerpt;
pub mod output;
pub mod paginate;
pub mod render;

pub use args::{Cli, Commands};
