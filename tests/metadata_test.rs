use stencil::error::Error;
use stencil::metadata::TemplateMetadata;

const FULL_DOC: &str = r#"
project:
  description: A demo application
  keywords:
    - demo
    - cli
  homepage: https://example.com
  repository: https://github.com/user/demo
author:
  name: Jane Doe
  email: jane@example.com
  github_username: janedoe
packages:
  - cli
  - httpx
readme:
  title: Demo
  subtitle: A subtitle
  badges:
    - name: CI
      url: https://example.com/badge.svg
      link: https://example.com/ci
pyproject:
  classifiers:
    - "Programming Language :: Python :: 3"
environment:
  FIRST: "1"
  SECOND: "2"
additional_files:
  - docs/index.md
"#;

#[test]
fn test_full_document_parses() {
    let metadata = TemplateMetadata::from_yaml(FULL_DOC).unwrap();

    assert_eq!(metadata.project.description, "A demo application");
    assert_eq!(metadata.project.keywords, vec!["demo", "cli"]);
    assert_eq!(metadata.project.license, "MIT"); // default
    assert_eq!(metadata.author.name, "Jane Doe");
    assert_eq!(metadata.packages, vec!["cli", "httpx"]);
    assert_eq!(metadata.readme.badges.len(), 1);
    assert_eq!(metadata.readme.badges[0].link, "https://example.com/ci");
    assert_eq!(metadata.pyproject.classifiers.len(), 1);
    assert_eq!(metadata.additional_files, vec!["docs/index.md"]);

    // environment preserves declaration order
    let keys: Vec<&String> = metadata.environment.keys().collect();
    assert_eq!(keys, vec!["FIRST", "SECOND"]);
}

#[test]
fn test_empty_document_yields_defaults() {
    let metadata = TemplateMetadata::from_yaml("").unwrap();
    assert_eq!(metadata, TemplateMetadata::default());
    assert_eq!(metadata.project.license, "MIT");
}

#[test]
fn test_malformed_yaml_is_metadata_error() {
    match TemplateMetadata::from_yaml("project: [unclosed") {
        Err(Error::Metadata(_)) => (),
        other => panic!("expected Metadata error, got {other:?}"),
    }
}

#[test]
fn test_missing_file_is_metadata_error() {
    let missing = std::path::Path::new("/nonexistent/stencil-metadata.yml");
    match TemplateMetadata::load(missing) {
        Err(Error::Metadata(_)) => (),
        other => panic!("expected Metadata error, got {other:?}"),
    }
}

#[test]
fn test_maintainer_falls_back_to_author() {
    let metadata = TemplateMetadata::from_yaml(FULL_DOC).unwrap();
    assert_eq!(metadata.maintainer().name, "Jane Doe");

    let with_maintainer = TemplateMetadata::from_yaml(
        "author:\n  name: Jane\nmaintainer:\n  name: John\n",
    )
    .unwrap();
    assert_eq!(with_maintainer.maintainer().name, "John");
}

#[test]
fn test_replacement_rules_cover_present_fields_only() {
    let metadata = TemplateMetadata::from_yaml(FULL_DOC).unwrap();
    let rules = metadata.replacement_rules();

    assert!(rules.contains(&(
        "TEMPLATE_DESCRIPTION".to_string(),
        "A demo application".to_string()
    )));
    assert!(rules.contains(&("TEMPLATE_AUTHOR_NAME".to_string(), "Jane Doe".to_string())));
    assert!(rules
        .contains(&("TEMPLATE_HOMEPAGE".to_string(), "https://example.com".to_string())));

    let empty = TemplateMetadata::default();
    assert!(empty.replacement_rules().is_empty());
}
