//! Materialization orchestration.
//! Sequences resolve → copy → substitute → collaborator handoff → cleanup
//! and enforces the cleanup guarantees: the temporary template clone is
//! always removed, a fatal error never leaves a partial project directory
//! behind, and collaborator failures are reported without rollback.

use crate::commands;
use crate::config::Config;
use crate::copier::copy_tree;
use crate::docgen;
use crate::error::{Error, Result};
use crate::features::{resolve_features, Feature};
use crate::ident::VariantSet;
use crate::loader::{self, ResolvedTemplate};
use crate::metadata::TemplateMetadata;
use crate::rename::{self, order_rules, substitution_rules};
use globset::GlobSet;
use log::warn;
use std::fs;
use std::path::PathBuf;

/// Everything a single materialization needs, assembled by the caller.
#[derive(Debug)]
pub struct MaterializeRequest {
    /// Template reference: local name or HTTPS git URL
    pub template: String,
    /// New project identifier
    pub project_name: String,
    /// Directory to create the project in; must not exist yet
    pub destination: PathBuf,
    /// Optional parsed metadata for collaborator steps
    pub metadata: Option<TemplateMetadata>,
    /// Package bundles requested on the command line
    pub features: Vec<Feature>,
    /// Skip the dependency-sync and git-init collaborator steps
    pub skip_sync: bool,
}

/// Result of a successful materialization.
#[derive(Debug)]
pub struct Report {
    pub project_dir: PathBuf,
    /// Identifier of the template that was materialized
    pub template_name: String,
    /// Path segments renamed
    pub renamed: usize,
    /// Files whose content was substituted
    pub updated: usize,
    /// Pattern-matched files skipped as binary
    pub skipped_binary: Vec<PathBuf>,
    /// Collaborator steps that failed; the project is still usable
    pub warnings: Vec<String>,
}

/// Materializes a project from a template reference.
///
/// # Errors
/// Any error from the resolving, copying or substituting stages aborts
/// the materialization; collaborator failures only surface in
/// `Report::warnings`.
pub fn materialize(config: &Config, request: &MaterializeRequest) -> Result<Report> {
    let new_set = VariantSet::new(&request.project_name)?;
    // Metadata may widen the content pass to template-specific files.
    let matcher = match &request.metadata {
        Some(metadata) => config.content_matcher_with(&metadata.additional_files)?,
        None => config.content_matcher()?,
    };

    let resolved = loader::resolve(config, &request.template)?;
    let outcome = materialize_from(&resolved, &new_set, &matcher, request);

    // Cleanup runs on success and failure alike.
    if let Err(e) = resolved.cleanup() {
        warn!("Could not remove temporary template directory: {}", e);
    }

    outcome
}

fn materialize_from(
    resolved: &ResolvedTemplate,
    new_set: &VariantSet,
    matcher: &GlobSet,
    request: &MaterializeRequest,
) -> Result<Report> {
    let old_set = VariantSet::new(resolved.name())?;

    let mut rules = substitution_rules(&old_set, new_set);
    if let Some(metadata) = &request.metadata {
        rules.extend(metadata.replacement_rules());
        rules = order_rules(rules);
    }

    copy_tree(resolved.path(), &request.destination)?;

    let substitution =
        match rename::apply_substitutions(&request.destination, &rules, matcher) {
            Ok(report) => report,
            Err(e) => {
                remove_partial_destination(&request.destination);
                return Err(e);
            }
        };

    let mut warnings = Vec::new();
    if let Some(metadata) = &request.metadata {
        run_step(&mut warnings, "readme generation", || {
            docgen::update_readme(&request.destination, metadata, new_set.snake())
        });
        run_step(&mut warnings, "pyproject metadata", || {
            docgen::update_pyproject(&request.destination, metadata)
        });
        run_step(&mut warnings, "environment file", || {
            docgen::update_env(&request.destination, metadata)
        });
    }

    if !request.skip_sync {
        let (features, direct) = collect_packages(request);
        let features = resolve_features(&features);
        run_step(&mut warnings, "dependency sync", || {
            commands::sync_dependencies(&request.destination, &features, &direct)
        });
        run_step(&mut warnings, "git init", || {
            commands::init_git_repository(&request.destination)
        });
    }

    Ok(Report {
        project_dir: request.destination.clone(),
        template_name: resolved.name().to_string(),
        renamed: substitution.renamed,
        updated: substitution.updated,
        skipped_binary: substitution.skipped_binary,
        warnings,
    })
}

/// Splits requested bundles and metadata packages into known bundles and
/// direct package names.
fn collect_packages(request: &MaterializeRequest) -> (Vec<Feature>, Vec<String>) {
    let mut features = request.features.clone();
    let mut direct = Vec::new();

    if let Some(metadata) = &request.metadata {
        for package in &metadata.packages {
            match Feature::from_name(package) {
                Some(feature) => features.push(feature),
                None => direct.push(package.clone()),
            }
        }
    }
    (features, direct)
}

fn remove_partial_destination(destination: &PathBuf) {
    if destination.exists() {
        if let Err(cleanup) = fs::remove_dir_all(destination) {
            warn!(
                "Could not remove partial project directory '{}': {}",
                destination.display(),
                cleanup
            );
        }
    }
}

fn run_step<F>(warnings: &mut Vec<String>, step: &str, f: F)
where
    F: FnOnce() -> Result<()>,
{
    if let Err(e) = f() {
        let failure = match e {
            failure @ Error::Collaborator { .. } => failure,
            other => Error::Collaborator {
                step: step.to_string(),
                reason: other.to_string(),
            },
        };
        warn!("{}", failure);
        warnings.push(failure.to_string());
    }
}
