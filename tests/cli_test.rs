use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use stencil::cli::Args;
use stencil::features::Feature;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("stencil")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_basic_args() {
    let args = make_args(&["my_app"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.project_name.as_deref(), Some("my_app"));
    assert_eq!(parsed.template, "new_cli_project_template");
    assert!(parsed.output_dir.is_none());
    assert!(parsed.features.is_empty());
    assert!(!parsed.skip_sync);
    assert!(!parsed.verbose);
}

#[test]
fn test_template_and_output_options() {
    let args = make_args(&["-t", "other_template", "-o", "./projects", "my_app"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.template, "other_template");
    assert_eq!(parsed.output_dir, Some(PathBuf::from("./projects")));
}

#[test]
fn test_git_url_template() {
    let args = make_args(&["-t", "https://github.com/user/template.git", "my_app"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.template, "https://github.com/user/template.git");
}

#[test]
fn test_feature_values() {
    let args = make_args(&["-f", "cli", "-f", "par-ai-core", "my_app"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.features, vec![Feature::Cli, Feature::ParAi]);
}

#[test]
fn test_unknown_feature_is_rejected() {
    let args = make_args(&["-f", "nope", "my_app"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_list_features_without_project_name() {
    let args = make_args(&["--list-features"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.list_features);
    assert!(parsed.project_name.is_none());
}

#[test]
fn test_missing_project_name() {
    let args = make_args(&["--skip-sync"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_flags() {
    let args = make_args(&["--skip-sync", "-v", "my_app"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.skip_sync);
    assert!(parsed.verbose);
}
