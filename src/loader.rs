//! Template source resolution for Stencil.
//! Turns a template reference (local name or remote HTTPS git URL) into a
//! concrete directory on disk. Remote templates are shallow-cloned into a
//! temporary directory owned by the returned handle, so a partial clone
//! never survives a failure.

use crate::config::Config;
use crate::constants::TEMP_CLONE_PREFIX;
use crate::error::{Error, Result};
use log::debug;
use regex::RegexSet;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use tempfile::TempDir;
use url::Url;

/// Path of the temporary clone currently in use, if any. An interrupt
/// handler reads this to remove the clone before the process exits.
static ACTIVE_CLONE: Mutex<Option<PathBuf>> = Mutex::new(None);

fn register_active_clone(path: &Path) {
    if let Ok(mut active) = ACTIVE_CLONE.lock() {
        *active = Some(path.to_path_buf());
    }
}

fn clear_active_clone() {
    if let Ok(mut active) = ACTIVE_CLONE.lock() {
        *active = None;
    }
}

/// Takes the active temporary clone path, leaving the registry empty.
pub fn take_active_clone() -> Option<PathBuf> {
    ACTIVE_CLONE.lock().ok().and_then(|mut active| active.take())
}

/// Represents the source location of a template.
#[derive(Debug)]
pub enum TemplateSource {
    /// Name of a template directory inside the configured search directories
    LocalName(String),
    /// Git repository HTTPS URL
    Git(String),
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::LocalName(name) => write!(f, "local template: '{name}'"),
            TemplateSource::Git(repo) => write!(f, "git repository: '{repo}'"),
        }
    }
}

impl TemplateSource {
    /// Creates a TemplateSource from a reference string.
    ///
    /// Anything starting with `https://` is treated as a remote locator;
    /// everything else is a local template name.
    pub fn from_string(s: &str) -> Self {
        let s = s.trim();
        if s.starts_with("https://") {
            Self::Git(s.to_string())
        } else {
            Self::LocalName(s.to_string())
        }
    }
}

/// Accepted git URL shapes: known hosting providers plus a generic HTTPS
/// fallback.
fn git_url_patterns() -> &'static RegexSet {
    static PATTERNS: OnceLock<RegexSet> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        RegexSet::new([
            r"^https://github\.com/[\w.-]+/[\w.-]+(?:\.git)?/?$",
            r"^https://gitlab\.com/[\w.-]+/[\w.-]+(?:\.git)?/?$",
            r"^https://bitbucket\.org/[\w.-]+/[\w.-]+(?:\.git)?/?$",
            r"^https://[\w.-]+/[\w./-]+(?:\.git)?/?$",
        ])
        .expect("git URL patterns are valid")
    })
}

/// Checks whether a string looks like a supported git repository URL.
pub fn is_git_url(s: &str) -> bool {
    git_url_patterns().is_match(s)
}

/// Validates and normalizes a git URL.
///
/// Known hosting providers get a `.git` suffix appended; other URLs only
/// lose a trailing slash.
///
/// # Errors
/// * `Error::RemoteTemplateFetch` if the URL does not match any accepted
///   pattern or cannot be parsed
pub fn normalize_git_url(url: &str) -> Result<String> {
    let url = url.trim();
    if !is_git_url(url) {
        return Err(Error::RemoteTemplateFetch {
            url: url.to_string(),
            reason: "unrecognized git URL format".to_string(),
        });
    }

    let parsed = Url::parse(url).map_err(|e| Error::RemoteTemplateFetch {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.host_str() {
        Some("github.com") | Some("gitlab.com") | Some("bitbucket.org") => {
            let path = parsed.path().trim_end_matches('/');
            let path = if path.ends_with(".git") {
                path.to_string()
            } else {
                format!("{path}.git")
            };
            Ok(format!("https://{}{}", parsed.host_str().unwrap_or_default(), path))
        }
        _ => Ok(url.trim_end_matches('/').to_string()),
    }
}

/// Extracts the repository name from a git URL.
pub fn repo_name(url: &str) -> String {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or("template")
        .trim_end_matches(".git")
        .to_string()
}

/// A template resolved to a readable directory.
///
/// Remote templates own their temporary clone directory; dropping the
/// handle removes it, so every exit path releases the clone.
#[derive(Debug)]
pub struct ResolvedTemplate {
    name: String,
    path: PathBuf,
    temp: Option<TempDir>,
}

impl ResolvedTemplate {
    /// The template's identifier, used as the old name during substitution.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directory backing the template.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the directory is a temporary clone the orchestrator must
    /// remove after use.
    pub fn is_temporary(&self) -> bool {
        self.temp.is_some()
    }

    /// Removes the temporary clone, if any, reporting deletion failures.
    pub fn cleanup(self) -> Result<()> {
        if let Some(temp) = self.temp {
            debug!("Removing temporary template clone '{}'.", temp.path().display());
            clear_active_clone();
            temp.close().map_err(Error::IoError)?;
        }
        Ok(())
    }
}

/// Resolves a template reference to a concrete directory.
///
/// # Errors
/// * `Error::TemplateNotFound` for a local name absent from every search
///   directory
/// * `Error::RemoteTemplateFetch` for an invalid URL or failed clone
pub fn resolve(config: &Config, reference: &str) -> Result<ResolvedTemplate> {
    let source = TemplateSource::from_string(reference);
    debug!("Resolving template from the {}", source);

    match source {
        TemplateSource::Git(url) => clone_remote(&url),
        TemplateSource::LocalName(name) => find_local(config, &name),
    }
}

/// Probes the configured search directories in order; first match wins.
fn find_local(config: &Config, name: &str) -> Result<ResolvedTemplate> {
    for base in &config.search_dirs {
        let candidate = base.join(name);
        if candidate.is_dir() {
            debug!("Found template at '{}'.", candidate.display());
            return Ok(ResolvedTemplate {
                name: name.to_string(),
                path: candidate,
                temp: None,
            });
        }
    }

    Err(Error::TemplateNotFound {
        name: name.to_string(),
        searched: config
            .search_dirs
            .iter()
            .map(|dir| dir.display().to_string())
            .collect::<Vec<_>>()
            .join(", "),
    })
}

/// Shallow-clones a remote template into a fresh temporary directory.
fn clone_remote(raw_url: &str) -> Result<ResolvedTemplate> {
    let url = normalize_git_url(raw_url)?;

    let temp = tempfile::Builder::new()
        .prefix(TEMP_CLONE_PREFIX)
        .tempdir()
        .map_err(Error::IoError)?;

    debug!("Cloning '{}' into '{}'.", url, temp.path().display());
    register_active_clone(temp.path());

    let mut fetch_opts = git2::FetchOptions::new();
    fetch_opts.depth(1);

    let mut builder = git2::build::RepoBuilder::new();
    builder.fetch_options(fetch_opts);

    match builder.clone(&url, temp.path()) {
        Ok(_) => Ok(ResolvedTemplate {
            name: repo_name(&url),
            path: temp.path().to_path_buf(),
            temp: Some(temp),
        }),
        // Dropping `temp` removes whatever the failed clone left behind.
        Err(e) => {
            clear_active_clone();
            Err(Error::RemoteTemplateFetch {
                url,
                reason: e.message().to_string(),
            })
        }
    }
}
