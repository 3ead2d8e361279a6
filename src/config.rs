//! Configuration handling for Stencil.
//! Builds the layered configuration (defaults, then environment additions)
//! exactly once at startup; core logic receives it explicitly and never
//! reads the environment itself.

use crate::constants::{
    DEFAULT_FILE_PATTERNS, DEFAULT_SEARCH_DIRS, FILE_PATTERNS_ENV, TEMPLATE_DIR_ENV,
    TEMPLATE_PATH_ENV,
};
use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::path::PathBuf;

/// Resolved application configuration.
///
/// `search_dirs` is the ordered list of base directories probed for local
/// templates; `file_patterns` is the ordered File Pattern Set scoping the
/// content substitution pass. Order is significant for both.
#[derive(Debug, Clone)]
pub struct Config {
    pub search_dirs: Vec<PathBuf>,
    pub file_patterns: Vec<String>,
}

impl Config {
    /// Creates a configuration from explicit values.
    pub fn new(search_dirs: Vec<PathBuf>, file_patterns: Vec<String>) -> Self {
        Self { search_dirs, file_patterns }
    }

    /// Builds the configuration from defaults plus environment additions.
    ///
    /// Search directory priority: conventional defaults, then the
    /// `STENCIL_TEMPLATE_DIR` primary directory, then each entry of the
    /// comma-separated `STENCIL_TEMPLATE_PATH` list. File patterns from
    /// `STENCIL_FILE_PATTERNS` are appended after the defaults.
    pub fn from_env() -> Self {
        let mut search_dirs: Vec<PathBuf> =
            DEFAULT_SEARCH_DIRS.iter().map(|dir| expand_tilde(dir)).collect();

        if let Ok(primary) = std::env::var(TEMPLATE_DIR_ENV) {
            if !primary.trim().is_empty() {
                search_dirs.push(expand_tilde(primary.trim()));
            }
        }

        if let Ok(extra) = std::env::var(TEMPLATE_PATH_ENV) {
            for dir in extra.split(',') {
                if !dir.trim().is_empty() {
                    search_dirs.push(expand_tilde(dir.trim()));
                }
            }
        }

        let mut file_patterns: Vec<String> =
            DEFAULT_FILE_PATTERNS.iter().map(|p| p.to_string()).collect();

        if let Ok(extra) = std::env::var(FILE_PATTERNS_ENV) {
            for pattern in extra.split(',') {
                if !pattern.trim().is_empty() {
                    file_patterns.push(pattern.trim().to_string());
                }
            }
        }

        debug!("Search directories: {:?}", search_dirs);
        Self { search_dirs, file_patterns }
    }

    /// Compiles the File Pattern Set into a matcher for relative paths.
    ///
    /// # Errors
    /// * `Error::Config` if a pattern is not a valid glob
    pub fn content_matcher(&self) -> Result<GlobSet> {
        self.content_matcher_with(&[])
    }

    /// Compiles the File Pattern Set plus `extra` patterns (contributed by
    /// template metadata) into a matcher for relative paths.
    ///
    /// # Errors
    /// * `Error::Config` if a pattern is not a valid glob
    pub fn content_matcher_with(&self, extra: &[String]) -> Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();
        for pattern in self.file_patterns.iter().chain(extra) {
            builder.add(Glob::new(pattern).map_err(|e| {
                Error::Config(format!("invalid file pattern '{}': {}", pattern, e))
            })?);
        }
        builder
            .build()
            .map_err(|e| Error::Config(format!("file pattern set failed to compile: {}", e)))
    }
}

/// Expands a leading `~/` against `HOME`; other paths pass through.
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(rest);
        }
    }
    PathBuf::from(path)
}
