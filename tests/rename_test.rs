use std::fs;

use stencil::config::Config;
use stencil::error::Error;
use stencil::ident::VariantSet;
use stencil::rename::{apply_rules, apply_substitutions, rename_paths, substitution_rules};
use tempfile::TempDir;

fn write(path: &std::path::Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn default_rules() -> Vec<(String, String)> {
    let old = VariantSet::new("template_name").unwrap();
    let new = VariantSet::new("my_app").unwrap();
    substitution_rules(&old, &new)
}

fn matcher(patterns: &[&str]) -> globset::GlobSet {
    Config::new(vec![], patterns.iter().map(|p| p.to_string()).collect())
        .content_matcher()
        .unwrap()
}

#[test]
fn test_all_variants_are_substituted() {
    let rules = default_rules();
    let input = "TemplateName CLI: template_name, template-name, Template Name";
    assert_eq!(apply_rules(input, &rules), "MyApp CLI: my_app, my-app, My App");
}

#[test]
fn test_longer_variant_wins_over_embedded_shorter() {
    // "Template Name" contains the word "Template"; a shorter-first order
    // would corrupt the Title Case match
    let rules = default_rules();
    assert_eq!(apply_rules("Template Name and TemplateName", &rules), "My App and MyApp");
}

#[test]
fn test_spec_worked_example_tree() {
    let root = TempDir::new().unwrap();
    write(
        &root.path().join("src/template_name/__main__.py"),
        "\"\"\"TemplateName CLI\"\"\"\n",
    );

    let rules = default_rules();
    let report = apply_substitutions(
        root.path(),
        &rules,
        &matcher(&["src/**/*.py"]),
    )
    .unwrap();

    let target = root.path().join("src/my_app/__main__.py");
    assert!(target.is_file());
    assert_eq!(fs::read_to_string(&target).unwrap(), "\"\"\"MyApp CLI\"\"\"\n");
    assert!(!root.path().join("src/template_name").exists());
    assert_eq!(report.renamed, 1);
    assert_eq!(report.updated, 1);
}

#[test]
fn test_content_outside_pattern_set_is_untouched() {
    let root = TempDir::new().unwrap();
    write(&root.path().join("notes.txt"), "template_name stays here\n");

    let rules = default_rules();
    apply_substitutions(root.path(), &rules, &matcher(&["*.md"])).unwrap();

    assert_eq!(
        fs::read_to_string(root.path().join("notes.txt")).unwrap(),
        "template_name stays here\n"
    );
}

#[test]
fn test_binary_file_survives_unmodified() {
    let root = TempDir::new().unwrap();
    let dir = root.path().join("template_name");
    fs::create_dir_all(&dir).unwrap();
    // Invalid UTF-8 payload, placed inside a renamed directory and matched
    // by the pattern set
    let payload: Vec<u8> = vec![0xff, 0xfe, 0x00, 0x01, b't', b'e', 0x80];
    fs::write(dir.join("logo.bin"), &payload).unwrap();

    let rules = default_rules();
    let report =
        apply_substitutions(root.path(), &rules, &matcher(&["**/*.bin"])).unwrap();

    let moved = root.path().join("my_app/logo.bin");
    assert!(moved.is_file());
    assert_eq!(fs::read(&moved).unwrap(), payload);
    assert_eq!(report.skipped_binary, vec![moved]);
}

#[test]
fn test_rename_collision_is_an_error() {
    let root = TempDir::new().unwrap();
    write(&root.path().join("template_name.py"), "from the template\n");
    write(&root.path().join("my_app.py"), "pre-existing file\n");

    let rules = default_rules();
    let err = rename_paths(root.path(), &rules).unwrap_err();
    assert!(matches!(err, Error::Substitution { .. }));
    let message = err.to_string();
    assert!(message.contains("template_name.py"), "{message}");
    assert!(message.contains("my_app.py"), "{message}");

    // Neither file is touched
    assert_eq!(
        fs::read_to_string(root.path().join("my_app.py")).unwrap(),
        "pre-existing file\n"
    );
    assert_eq!(
        fs::read_to_string(root.path().join("template_name.py")).unwrap(),
        "from the template\n"
    );
}

#[test]
fn test_rename_applies_once_per_entry() {
    // The new name contains the old as a substring; an entry yielded twice
    // by the walk would be substituted twice
    let root = TempDir::new().unwrap();
    for i in 0..200 {
        write(&root.path().join(format!("app_{i:03}.txt")), "x");
    }

    let old = VariantSet::new("app").unwrap();
    let new = VariantSet::new("my_app").unwrap();
    let rules = substitution_rules(&old, &new);

    assert_eq!(rename_paths(root.path(), &rules).unwrap(), 200);
    for entry in fs::read_dir(root.path()).unwrap() {
        let name = entry.unwrap().file_name().into_string().unwrap();
        assert!(name.starts_with("my_app_"), "unexpected entry '{name}'");
        assert!(!name.contains("my_my_app"), "double substitution in '{name}'");
    }
}

#[test]
fn test_identical_identifiers_degrade_to_pure_copy() {
    let root = TempDir::new().unwrap();
    write(&root.path().join("template_name/README.md"), "# Template Name\n");

    let same = VariantSet::new("template_name").unwrap();
    let rules = substitution_rules(&same, &same);
    let report =
        apply_substitutions(root.path(), &rules, &matcher(&["**/*.md"])).unwrap();

    assert_eq!(report.renamed, 0);
    assert_eq!(report.updated, 0);
    assert_eq!(
        fs::read_to_string(root.path().join("template_name/README.md")).unwrap(),
        "# Template Name\n"
    );
}

#[test]
fn test_no_old_variant_survives_substitution() {
    let root = TempDir::new().unwrap();
    write(
        &root.path().join("template_name/template-name.md"),
        "template_name Template Name TemplateName template-name\n",
    );

    let rules = default_rules();
    apply_substitutions(root.path(), &rules, &matcher(&["**/*.md"])).unwrap();

    let content =
        fs::read_to_string(root.path().join("my_app/my-app.md")).unwrap();
    let old = VariantSet::new("template_name").unwrap();
    for (_, variant) in old.variants() {
        assert!(!content.contains(variant), "'{variant}' survived in content");
    }
}
