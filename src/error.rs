//! Error handling for the stencil application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for stencil operations.
///
/// Precondition failures (invalid name, missing or non-Flutter template,
/// existing destination) are detected before any filesystem mutation.
/// I/O failures abort the pipeline immediately and leave the partially
/// built project directory on disk.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The requested project name does not match the naming grammar
    #[error("'{name}' is not a valid project name. Names start with a lowercase letter followed by lowercase letters, digits or underscores.")]
    InvalidProjectName { name: String },

    /// The template path does not designate an existing directory
    #[error("template directory '{template_dir}' does not exist.")]
    TemplateDoesNotExist { template_dir: String },

    /// The template directory carries no pubspec.yaml manifest
    #[error("'{template_dir}' is not a Flutter project: no pubspec.yaml found.")]
    NotAFlutterProject { template_dir: String },

    /// The destination project directory already exists
    #[error("destination '{project_dir}' already exists.")]
    ProjectDirectoryExists { project_dir: String },

    /// Compiling the fixed exclusion rules failed
    #[error("exclusion rules error: {0}.")]
    ExclusionError(String),

    /// An external toolchain command failed or produced unusable output
    #[error("toolchain error: {0}.")]
    ToolchainError(String),

    /// A confirmation prompt could not be read
    #[error("prompt error: {0}.")]
    PromptError(String),
}

/// Convenience type alias for Results with stencil's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
