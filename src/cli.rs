//! Command-line interface implementation for Stencil.
//! Provides argument parsing and help text formatting using clap.

use crate::constants::DEFAULT_TEMPLATE;
use crate::features::Feature;
use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for Stencil.
#[derive(Parser, Debug)]
#[command(author, version, about = "Stencil: materialize new projects from identifier-renaming templates", long_about = None)]
pub struct Args {
    /// Name of the project to create, in snake_case
    #[arg(value_name = "PROJECT_NAME", required_unless_present = "list_features")]
    pub project_name: Option<String>,

    /// Template name or HTTPS git repository URL
    #[arg(short, long, value_name = "TEMPLATE", default_value = DEFAULT_TEMPLATE)]
    pub template: String,

    /// Directory to create the project in (defaults to the current
    /// directory)
    #[arg(short, long, value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Package bundles to install into the generated project
    #[arg(short, long = "feature", value_enum, value_name = "FEATURE")]
    pub features: Vec<Feature>,

    /// Path to a YAML metadata file for template customization
    #[arg(short, long, value_name = "FILE")]
    pub metadata: Option<PathBuf>,

    /// List the available package bundles and exit
    #[arg(short = 'L', long)]
    pub list_features: bool,

    /// Skip the dependency-sync and git-init steps after materialization
    #[arg(long)]
    pub skip_sync: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
