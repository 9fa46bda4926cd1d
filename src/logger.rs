//! Colored, prefixed diagnostics on stderr.
//!
//! stdout belongs to the JSON a command produces, so every message here
//! goes to stderr and output can be piped straight into other tools.
//!
//! - `log!` always prints
//! - `debug!` prints only under `--verbose`
//! - `debug_do!` runs a block only under `--verbose`
//!
//! ```ignore
//! log!("source"; "loaded {} posts", count);
//! debug!("excerpt"; "{} chars from {} blocks", chars, blocks);
//! ```

use owo_colors::{OwoColorize, Style};
use std::{
    io::{Write, stderr},
    sync::atomic::{AtomicBool, Ordering},
};

/// Set once from `--verbose` before any command runs.
static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

// ============================================================================
// Macros
// ============================================================================

/// Print `[module] message` to stderr.
///
/// ```ignore
/// log!("render"; "{} on page {}", posts, page);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Like `log!`, but silent unless `--verbose` is set.
///
/// The message is not even formatted when verbose output is off.
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

/// Run a block only when `--verbose` is set.
///
/// For debug output that needs work of its own, such as walking every group
/// of a landing page:
///
/// ```ignore
/// debug_do! {
///     for group in &page.groups {
///         debug!("render"; "{}: {}", group.label, group.entries.len());
///     }
/// }
/// ```
#[macro_export]
macro_rules! debug_do {
    ($($body:tt)*) => {{
        if $crate::logger::is_verbose() {
            $($body)*
        }
    }};
}

// ============================================================================
// Output
// ============================================================================

/// Write one prefixed line to stderr. Write failures are ignored.
pub fn log(module: &str, message: &str) {
    let prefix = format!("[{module}]");
    let prefix = prefix.style(prefix_style(module));

    let mut stderr = stderr().lock();
    writeln!(stderr, "{prefix} {message}").ok();
    stderr.flush().ok();
}

/// Prefix color: one per pipeline stage, loud ones for problems.
fn prefix_style(module: &str) -> Style {
    let style = Style::new().bold();
    match module.to_ascii_lowercase().as_str() {
        "render" => style.bright_blue(),
        "source" => style.bright_green(),
        "config" => style.bright_cyan(),
        "error" => style.bright_red(),
        "warning" => style.bright_magenta(),
        _ => style.bright_yellow(),
    }
}
