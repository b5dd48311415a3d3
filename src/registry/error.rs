//! Error types surfaced by the registry and its front ends.

use thiserror::Error;

/// Errors surfaced while loading configuration or driving a view.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The requested section does not exist.
    #[error("unknown section: {name} (expected devices, users, thefts, or communications)")]
    UnknownSection {
        /// The section name that was supplied.
        name: String,
    },

    /// A sort or filter referenced a field the section does not expose.
    #[error("unknown field for this section: {field}")]
    UnknownField {
        /// The field name that was supplied.
        field: String,
    },

    /// A required compose field was left empty.
    #[error("{field} is required")]
    MissingField {
        /// Label of the empty field.
        field: &'static str,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// The terminal UI failed to start or run.
    #[error("terminal error: {message}")]
    Terminal {
        /// Error detail from the TUI runtime.
        message: String,
    },
}

impl RegistryError {
    /// Wraps an I/O error, keeping only its message.
    #[must_use]
    pub fn io(error: &std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}
