//! External-process collaborator steps: dependency synchronization with
//! `uv` and git repository initialization. All steps here are best-effort;
//! the orchestrator reports failures without undoing the materialization.

use crate::error::{Error, Result};
use crate::features::Feature;
use log::{debug, info};
use std::path::Path;
use std::process::{Command, Stdio};

/// Runs `uv sync -U` followed by one `uv add` per resolved bundle and a
/// final `uv add` for direct packages from the metadata.
///
/// # Errors
/// * `Error::Collaborator` if any command cannot be spawned or exits
///   non-zero
pub fn sync_dependencies(
    project_dir: &Path,
    features: &[Feature],
    direct_packages: &[String],
) -> Result<()> {
    run_command(project_dir, "uv", &["sync", "-U"])?;
    info!("Dependencies synchronized.");

    for feature in features {
        debug!("Installing bundle '{}': {:?}", feature.name(), feature.packages());
        let mut args = vec!["add"];
        args.extend(feature.packages());
        run_command(project_dir, "uv", &args)?;
    }

    if !direct_packages.is_empty() {
        debug!("Installing direct packages: {:?}", direct_packages);
        let mut args = vec!["add".to_string()];
        args.extend(direct_packages.iter().cloned());
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        run_command(project_dir, "uv", &args)?;
    }

    Ok(())
}

/// Initializes a git repository in the project directory.
pub fn init_git_repository(project_dir: &Path) -> Result<()> {
    git2::Repository::init(project_dir).map_err(|e| Error::Collaborator {
        step: "git init".to_string(),
        reason: e.message().to_string(),
    })?;
    info!("Git repository initialized.");
    Ok(())
}

fn run_command(project_dir: &Path, program: &str, args: &[&str]) -> Result<()> {
    let step = format!("{} {}", program, args.join(" "));
    debug!("Running '{}' in '{}'.", step, project_dir.display());

    let status = Command::new(program)
        .args(args)
        .current_dir(project_dir)
        .stdin(Stdio::null())
        .status()
        .map_err(|e| Error::Collaborator { step: step.clone(), reason: e.to_string() })?;

    if !status.success() {
        return Err(Error::Collaborator {
            step,
            reason: format!("exited with status: {status}"),
        });
    }
    Ok(())
}
