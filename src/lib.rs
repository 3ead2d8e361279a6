//! Stencil materializes new projects from identifier-renaming templates.
//! A template (a local directory or a remote git repository) is copied into
//! a destination while every case variant of the template's identifier is
//! substituted with the new project identifier, in path segments and in
//! matched file contents; optional YAML metadata then layers author info,
//! package bundles and documentation fragments onto the result.

/// Command-line interface module for the Stencil application
pub mod cli;

/// External-process collaborator steps (dependency sync, git init)
pub mod commands;

/// Layered configuration: template search directories and content
/// substitution file patterns
pub mod config;

/// Common constants used throughout the application
pub mod constants;

/// Directory tree copying with the fixed exclusion predicate
pub mod copier;

/// Metadata-driven README/pyproject/.env generation
pub mod docgen;

/// Error types and handling for the Stencil application
pub mod error;

/// Predefined package bundles and dependency resolution
pub mod features;

/// Identifier case-variant derivation
pub mod ident;

/// Template source resolution (local search and remote shallow clones)
pub mod loader;

/// Logger initialization
pub mod logger;

/// YAML template metadata parsing
pub mod metadata;

/// Materialization orchestration
/// Combines all components to produce the final project directory
pub mod processor;

/// The rename & substitution engine applying case-variant rules to paths
/// and file contents
pub mod rename;
