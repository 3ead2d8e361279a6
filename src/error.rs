//! Error handling for the Stencil application.
//! Defines custom error types and results used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for Stencil operations.
///
/// Every fatal variant names the materialization stage it belongs to so a
/// failure report always carries both the stage and the underlying cause.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested identifier has no alphanumeric content to derive
    /// case variants from
    #[error("Invalid identifier: '{0}'.")]
    InvalidIdentifier(String),

    /// A local template name was not found in any configured search directory
    #[error("Template '{name}' not found (searched: {searched}).")]
    TemplateNotFound { name: String, searched: String },

    /// Validating or shallow-cloning a remote template failed
    #[error("Failed to fetch remote template '{url}': {reason}.")]
    RemoteTemplateFetch { url: String, reason: String },

    /// The materialization destination already exists
    #[error("Destination already exists: '{}'.", .0.display())]
    DestinationExists(PathBuf),

    /// Read/write error during the rename or content substitution pass
    #[error("Substitution failed at '{}': {source}.", .path.display())]
    Substitution {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Represents errors during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    Config(String),

    /// Represents errors in the template metadata file
    #[error("Metadata error: {0}.")]
    Metadata(String),

    /// A best-effort collaborator step failed; reported, never fatal
    #[error("Collaborator step '{step}' failed: {reason}.")]
    Collaborator { step: String, reason: String },

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(1);
}
