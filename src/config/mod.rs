//! Configuration for `relnotes.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── error      # ConfigError, ConfigDiagnostics
//! ├── field      # FieldPath
//! ├── util       # find_config_file
//! └── mod.rs     # Config (this file)
//! ```
//!
//! # Sections
//!
//! | Section     | Purpose                                           |
//! |-------------|---------------------------------------------------|
//! | `[landing]` | Default subject, page size and excerpt length     |
//!
//! A missing file is not an error: every field has a default, and the
//! command line can override all of them.

mod error;
mod field;
mod util;

pub use error::{ConfigDiagnostics, ConfigError};
pub use field::FieldPath;

use util::find_config_file;

use crate::cli::{Cli, Commands};
use crate::excerpt::EXCERPT_LENGTH;
use crate::pagination::PAGE_SIZE;
use crate::{debug, log};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::num::NonZeroUsize;
use std::{fs, path::Path};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing relnotes.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `[landing]` section
    pub landing: LandingSection,
}

/// `[landing]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LandingSection {
    /// Subject rendered when `render` is not given `--subject`
    pub subject: Option<String>,
    /// Posts per landing page
    pub page_size: usize,
    /// Character budget of each excerpt
    pub excerpt_length: usize,
}

impl Default for LandingSection {
    fn default() -> Self {
        Self {
            subject: None,
            page_size: PAGE_SIZE.get(),
            excerpt_length: EXCERPT_LENGTH,
        }
    }
}

/// Field paths of `[landing]`, for diagnostics.
pub struct LandingFields {
    pub subject: FieldPath,
    pub page_size: FieldPath,
    pub excerpt_length: FieldPath,
}

impl LandingSection {
    pub const FIELDS: LandingFields = LandingFields {
        subject: FieldPath::new("landing.subject"),
        page_size: FieldPath::new("landing.page-size"),
        excerpt_length: FieldPath::new("landing.excerpt-length"),
    };

    fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.subject.as_deref().is_some_and(|s| s.trim().is_empty()) {
            diag.error_with_hint(
                Self::FIELDS.subject,
                "must not be empty",
                "remove the field to take the subject from the post export",
            );
        }
        if self.page_size == 0 {
            diag.error(Self::FIELDS.page_size, "must be greater than 0");
        }
        if self.excerpt_length == 0 {
            diag.error_with_hint(
                Self::FIELDS.excerpt_length,
                "must be greater than 0",
                format!("remove the field to use the default of {EXCERPT_LENGTH}"),
            );
        }
    }
}

impl Config {
    /// Load config for `cli`, apply its overrides and validate the result.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to read current directory")?;

        let mut config = match find_config_file(&cli.config, &cwd) {
            Some(path) => Self::from_path(&path)?,
            None => {
                debug!("config"; "no {} found, using defaults", cli.config.display());
                Self::default()
            }
        };

        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a config file, warning about unknown fields.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) =
            Self::parse_with_ignored(&content).map_err(ConfigError::Toml)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        debug!("config"; "loaded {}", path.display());
        Ok(config)
    }

    /// Parse TOML, collecting the paths of fields no section knows.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), toml::de::Error> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // cli overrides
    // ========================================================================

    fn apply_cli(&mut self, cli: &Cli) {
        let landing = &mut self.landing;
        match &cli.command {
            Commands::Render { args } => {
                if let Some(subject) = &args.subject {
                    landing.subject = Some(subject.clone());
                }
                Self::update_option(&mut landing.page_size, args.page_size.as_ref());
                Self::update_option(&mut landing.excerpt_length, args.excerpt_length.as_ref());
            }
            Commands::Excerpt { args } => {
                Self::update_option(&mut landing.excerpt_length, args.excerpt_length.as_ref());
            }
            Commands::Paginate { args } => {
                Self::update_option(&mut landing.page_size, args.page_size.as_ref());
            }
        }
    }

    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate every section, reporting all problems at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();
        self.landing.validate(&mut diag);
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    // ========================================================================
    // accessors
    // ========================================================================

    /// Page size as a non-zero count. Falls back to the default when the
    /// config was never validated.
    pub fn page_size(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.landing.page_size).unwrap_or(PAGE_SIZE)
    }

    pub fn excerpt_length(&self) -> usize {
        self.landing.excerpt_length
    }

    pub fn subject(&self) -> Option<&str> {
        self.landing.subject.as_deref()
    }
}

// ============================================================================
// tests
// ============================================================================
