//! Template metadata handling for Stencil.
//! Parses the optional YAML metadata file layered onto a materialized
//! project: author info, package list, README fragments, pyproject
//! classifiers and environment variables.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::warn;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Author or maintainer information.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AuthorInfo {
    pub name: String,
    pub email: String,
    pub github_username: String,
}

/// Project information for template metadata.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProjectInfo {
    pub description: String,
    pub keywords: Vec<String>,
    pub homepage: String,
    pub repository: String,
    pub documentation: String,
    pub issues: String,
    pub license: String,
}

impl Default for ProjectInfo {
    fn default() -> Self {
        Self {
            description: String::new(),
            keywords: Vec::new(),
            homepage: String::new(),
            repository: String::new(),
            documentation: String::new(),
            issues: String::new(),
            license: "MIT".to_string(),
        }
    }
}

/// A single README badge; `name` and `url` are required.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReadmeBadge {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub link: String,
}

/// README customization information.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReadmeInfo {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub badges: Vec<ReadmeBadge>,
}

/// The `pyproject` metadata section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PyprojectInfo {
    pub classifiers: Vec<String>,
}

/// Complete template metadata structure.
///
/// `environment` keeps insertion order so the generated `.env` lines come
/// out in the order the metadata file declares them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TemplateMetadata {
    pub project: ProjectInfo,
    pub author: AuthorInfo,
    pub maintainer: Option<AuthorInfo>,
    pub packages: Vec<String>,
    pub readme: ReadmeInfo,
    pub pyproject: PyprojectInfo,
    pub environment: IndexMap<String, String>,
    pub additional_files: Vec<String>,
}

impl TemplateMetadata {
    /// Loads metadata from a YAML file.
    ///
    /// # Errors
    /// * `Error::Metadata` if the file is missing, unreadable or not valid
    ///   YAML for this schema
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::Metadata(format!(
                "metadata file not found: {}",
                path.display()
            )));
        }
        let contents = fs::read_to_string(path).map_err(|e| {
            Error::Metadata(format!("cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_yaml(&contents)
    }

    /// Parses metadata from YAML content. An empty document yields the
    /// default metadata.
    pub fn from_yaml(contents: &str) -> Result<Self> {
        if contents.trim().is_empty() {
            warn!("Metadata file is empty, using defaults.");
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents)
            .map_err(|e| Error::Metadata(format!("invalid metadata YAML: {}", e)))
    }

    /// Maintainer info, falling back to the author.
    pub fn maintainer(&self) -> &AuthorInfo {
        self.maintainer.as_ref().unwrap_or(&self.author)
    }

    /// Extra literal replacement rules contributed by the metadata,
    /// applied alongside the identifier case variants.
    pub fn replacement_rules(&self) -> Vec<(String, String)> {
        let mut rules = Vec::new();
        if !self.project.description.is_empty() {
            rules.push(("TEMPLATE_DESCRIPTION".to_string(), self.project.description.clone()));
        }
        if !self.author.name.is_empty() {
            rules.push(("TEMPLATE_AUTHOR_NAME".to_string(), self.author.name.clone()));
        }
        if !self.author.email.is_empty() {
            rules.push(("TEMPLATE_AUTHOR_EMAIL".to_string(), self.author.email.clone()));
        }
        if !self.project.homepage.is_empty() {
            rules.push(("TEMPLATE_HOMEPAGE".to_string(), self.project.homepage.clone()));
        }
        if !self.project.repository.is_empty() {
            rules.push(("TEMPLATE_REPOSITORY".to_string(), self.project.repository.clone()));
        }
        rules
    }
}
