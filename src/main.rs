//! Stencil's main application entry point and orchestration glue.
//! Handles command-line argument parsing, configuration, metadata loading
//! and hands the assembled request to the materialization orchestrator.

use std::path::PathBuf;

use stencil::{
    cli::{get_args, Args},
    config::Config,
    error::{default_error_handler, Error, Result},
    features::{resolve_features, Feature},
    ident::VariantSet,
    loader,
    logger::init_logger,
    metadata::TemplateMetadata,
    processor::{materialize, MaterializeRequest},
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);
    install_interrupt_handler();

    if args.list_features {
        list_features();
        return;
    }

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Removes the active temporary template clone, if any, when the user
/// interrupts the run, then exits with the conventional interrupt status.
fn install_interrupt_handler() {
    let installed = ctrlc::set_handler(|| {
        if let Some(path) = loader::take_active_clone() {
            let _ = std::fs::remove_dir_all(&path);
        }
        std::process::exit(130);
    });
    if let Err(e) = installed {
        log::warn!("Could not install interrupt handler: {}", e);
    }
}

/// Prints the available package bundles with their dependencies.
fn list_features() {
    println!("Available features:");
    for feature in Feature::ALL {
        let deps: Vec<&str> =
            feature.dependencies().iter().map(|d| d.name()).collect();
        let dep_info = if deps.is_empty() {
            String::new()
        } else {
            format!(" (depends on: {})", deps.join(", "))
        };
        println!("  {}: {}{}", feature.name(), feature.packages().join(", "), dep_info);
    }
}

/// Validates the user-supplied project name.
///
/// # Errors
/// * `Error::InvalidIdentifier` for empty names, names longer than 50
///   characters, or names with characters outside `[A-Za-z0-9_-]`
fn validate_project_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && name.len() <= 50
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if !valid {
        return Err(Error::InvalidIdentifier(name.to_string()));
    }
    Ok(())
}

/// Main application logic execution.
///
/// # Flow
/// 1. Builds the layered configuration from defaults and environment
/// 2. Validates the project name and loads optional metadata
/// 3. Materializes the project through the orchestrator
/// 4. Reports the outcome, including non-fatal collaborator failures
fn run(args: Args) -> Result<()> {
    let config = Config::from_env();

    let project_name = args.project_name.unwrap_or_default();
    validate_project_name(&project_name)?;
    let new_set = VariantSet::new(&project_name)?;

    let metadata = match &args.metadata {
        Some(path) => Some(TemplateMetadata::load(path)?),
        None => None,
    };

    let destination: PathBuf = match args.output_dir {
        Some(dir) => dir.join(new_set.snake()),
        None => std::env::current_dir().map_err(Error::IoError)?.join(new_set.snake()),
    };

    if !args.skip_sync {
        let resolved = resolve_features(&args.features);
        let names: Vec<&str> = resolved.iter().map(|f| f.name()).collect();
        println!("Features to install: {}", names.join(", "));
    }

    let request = MaterializeRequest {
        template: args.template,
        project_name,
        destination,
        metadata,
        features: args.features,
        skip_sync: args.skip_sync,
    };

    let report = materialize(&config, &request)?;

    println!(
        "Materialized template '{}' into '{}' ({} paths renamed, {} files updated).",
        report.template_name,
        report.project_dir.display(),
        report.renamed,
        report.updated
    );
    for warning in &report.warnings {
        eprintln!("warning: {}", warning);
    }
    println!("Project '{}' created successfully.", request.project_name);
    Ok(())
}
