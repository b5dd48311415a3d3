//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest
//! to highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.securetrack.toml` in the current
//!    directory, home directory, or XDG config directory
//! 3. **Environment variables** – `SECURETRACK_SECTION`,
//!    `SECURETRACK_SEARCH`, and friends
//! 4. **Command-line arguments** – `--section`/`-s`, `--search`/`-q`, ...
//!
//! # Configuration File
//!
//! Place `.securetrack.toml` in the current directory, home directory, or
//! XDG config directory with:
//!
//! ```toml
//! section = "devices"
//! status = "Stolen"
//! page_size = 10
//! telemetry = true
//! ```

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::listview::SortKey;
use crate::registry::{RegistryError, Section};

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Interactive dashboard TUI.
    Dashboard,
    /// Non-interactive listing of one section to stdout.
    SectionListing,
}

/// Application configuration supporting CLI, environment, and file
/// sources.
///
/// # Environment Variables
///
/// - `SECURETRACK_SECTION` or `--section`: Section to list
/// - `SECURETRACK_SEARCH` or `--search`: Free-text search term
/// - `SECURETRACK_STATUS` or `--status`: Status value to filter by
/// - `SECURETRACK_SORT_BY` or `--sort-by`: Field to sort by
/// - `SECURETRACK_PAGE` or `--page`: Page number (1-based)
/// - `SECURETRACK_PAGE_SIZE` or `--page-size`: Records per page
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "SECURETRACK",
    discovery(
        dotfile_name = ".securetrack.toml",
        config_file_name = "securetrack.toml",
        app_name = "securetrack"
    )
)]
pub struct SecuretrackConfig {
    /// Section to list non-interactively.
    ///
    /// Can be provided via:
    /// - CLI: `--section <NAME>` or `-s <NAME>`
    /// - Environment: `SECURETRACK_SECTION`
    /// - Config file: `section = "devices"`
    #[ortho_config(cli_short = 's')]
    pub section: Option<String>,

    /// Free-text search applied to the section's searchable fields.
    ///
    /// Can be provided via:
    /// - CLI: `--search <TERM>` or `-q <TERM>`
    /// - Environment: `SECURETRACK_SEARCH`
    /// - Config file: `search = "..."`
    #[ortho_config(cli_short = 'q')]
    pub search: Option<String>,

    /// Status value to filter by, matching one of the section's tabs.
    ///
    /// Can be provided via:
    /// - CLI: `--status <VALUE>`
    /// - Environment: `SECURETRACK_STATUS`
    /// - Config file: `status = "Stolen"`
    #[ortho_config()]
    pub status: Option<String>,

    /// Field to sort the listing by.
    ///
    /// Must name a field the section exposes; see each section's column
    /// headers. Unset means the seeded order.
    #[ortho_config()]
    pub sort_by: Option<String>,

    /// Sorts descending instead of ascending.
    ///
    /// Only meaningful together with `sort_by`.
    #[ortho_config()]
    pub descending: bool,

    /// Page of the listing to show (1-based).
    ///
    /// Can be provided via:
    /// - CLI: `--page <N>` or `-p <N>`
    /// - Environment: `SECURETRACK_PAGE`
    #[ortho_config(cli_short = 'p')]
    pub page: Option<usize>,

    /// Overrides the section's default page size.
    #[ortho_config()]
    pub page_size: Option<usize>,

    /// Launches the interactive dashboard TUI.
    ///
    /// This is also the default when no section is given.
    ///
    /// Can be provided via:
    /// - CLI: `--tui` / `-T`
    /// - Config file: `tui = true`
    #[ortho_config(cli_short = 'T')]
    pub tui: bool,

    /// Emits simulated-action telemetry to stderr as JSON lines.
    ///
    /// Can be provided via:
    /// - CLI: `--telemetry`
    /// - Config file: `telemetry = true`
    #[ortho_config()]
    pub telemetry: bool,
}

impl Default for SecuretrackConfig {
    fn default() -> Self {
        Self {
            section: None,
            search: None,
            status: None,
            sort_by: None,
            descending: false,
            page: None,
            page_size: None,
            tui: false,
            telemetry: false,
        }
    }
}

impl SecuretrackConfig {
    /// Determines the operation mode based on provided configuration.
    ///
    /// Returns `SectionListing` when a section is named without `--tui`;
    /// the dashboard is the default otherwise.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.tui || self.section.is_none() {
            OperationMode::Dashboard
        } else {
            OperationMode::SectionListing
        }
    }

    /// Parses the configured section name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownSection`] for unrecognised names
    /// and a [`RegistryError::Configuration`] when no section was given.
    pub fn require_section(&self) -> Result<Section, RegistryError> {
        let Some(name) = self.section.as_deref() else {
            return Err(RegistryError::Configuration {
                message: "a section is required (use --section or -s)".to_owned(),
            });
        };
        Section::parse(name)
    }

    /// Builds the sort key for a section, validating the field name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownField`] when `sort_by` names a
    /// field the section does not expose.
    pub fn sort_key(&self, section: Section) -> Result<Option<SortKey>, RegistryError> {
        let Some(field) = self.sort_by.as_deref() else {
            return Ok(None);
        };
        if !section.has_field(field) {
            return Err(RegistryError::UnknownField {
                field: field.to_owned(),
            });
        }
        let key = if self.descending {
            SortKey::descending(field)
        } else {
            SortKey::ascending(field)
        };
        Ok(Some(key))
    }

    /// Returns the 1-based page to show, defaulting to the first.
    #[must_use]
    pub fn page_number(&self) -> usize {
        self.page.unwrap_or(1).max(1)
    }
}
