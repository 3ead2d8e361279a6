//! Metadata-driven documentation generation.
//! Writes README, pyproject and .env customizations into an already
//! materialized project directory. Every function here is a best-effort
//! collaborator step: the orchestrator reports failures without rolling
//! back the project.

use crate::constants::METADATA_MARKER;
use crate::error::{Error, Result};
use crate::metadata::TemplateMetadata;
use cruet::Inflector;
use log::{debug, warn};
use std::fs;
use std::path::Path;

/// Renders the README fragment described by the metadata.
///
/// Returns an empty string when neither title nor description is set,
/// which callers treat as "leave the README alone".
pub fn generate_readme_content(metadata: &TemplateMetadata, project_name: &str) -> String {
    let readme = &metadata.readme;
    if readme.title.is_empty() && readme.description.is_empty() {
        return String::new();
    }

    let mut content = Vec::new();

    let title = if readme.title.is_empty() {
        project_name.to_title_case()
    } else {
        readme.title.clone()
    };
    content.push(format!("# {title}"));

    if !readme.subtitle.is_empty() {
        content.push(format!("\n{}", readme.subtitle));
    }

    if !readme.badges.is_empty() {
        content.push("\n".to_string());
        for badge in &readme.badges {
            if badge.link.is_empty() {
                content.push(format!("![{}]({})", badge.name, badge.url));
            } else {
                content.push(format!("[![{}]({})]({})", badge.name, badge.url, badge.link));
            }
        }
        content.push(String::new());
    }

    if !readme.description.is_empty() {
        content.push(format!("\n{}", readme.description));
    }

    content.join("\n")
}

/// Merges generated README content into the project's README.md.
///
/// Replaces everything before the metadata marker when present, otherwise
/// prepends the generated fragment.
pub fn update_readme(
    project_dir: &Path,
    metadata: &TemplateMetadata,
    project_name: &str,
) -> Result<()> {
    let readme_path = project_dir.join("README.md");
    if !readme_path.is_file() {
        warn!("README.md not found, skipping metadata update.");
        return Ok(());
    }

    let generated = generate_readme_content(metadata, project_name);
    if generated.is_empty() {
        return Ok(());
    }

    let current = fs::read_to_string(&readme_path).map_err(Error::IoError)?;
    let updated = match current.split_once(METADATA_MARKER) {
        Some((_, rest)) => format!("{generated}\n\n{rest}"),
        None => format!("{generated}\n\n{current}"),
    };
    fs::write(&readme_path, updated).map_err(Error::IoError)?;

    debug!("README.md updated with metadata.");
    Ok(())
}

/// Substitutes the pyproject placeholders the metadata provides values for.
pub fn update_pyproject(project_dir: &Path, metadata: &TemplateMetadata) -> Result<()> {
    let pyproject_path = project_dir.join("pyproject.toml");
    if !pyproject_path.is_file() {
        warn!("pyproject.toml not found, skipping metadata update.");
        return Ok(());
    }

    let original = fs::read_to_string(&pyproject_path).map_err(Error::IoError)?;
    let mut content = original.clone();

    if !metadata.project.description.is_empty() {
        content = content.replace(
            "description = \"TEMPLATE_DESCRIPTION\"",
            &format!("description = \"{}\"", metadata.project.description),
        );
    }

    if !metadata.project.keywords.is_empty() {
        let keywords = metadata.project.keywords.join("\",\n    \"");
        content = content.replace(
            "keywords = [\n    \"TEMPLATE_KEYWORDS\",\n]",
            &format!("keywords = [\n    \"{keywords}\",\n]"),
        );
    }

    if !metadata.pyproject.classifiers.is_empty() {
        let classifiers = metadata.pyproject.classifiers.join("\",\n    \"");
        content =
            content.replace("\"TEMPLATE_CLASSIFIERS\",", &format!("\"{classifiers}\","));
    }

    if !metadata.project.homepage.is_empty() {
        content = content.replace("TEMPLATE_HOMEPAGE", &metadata.project.homepage);
    }
    if !metadata.project.repository.is_empty() {
        content = content.replace("TEMPLATE_REPOSITORY", &metadata.project.repository);
    }
    if !metadata.project.documentation.is_empty() {
        content = content.replace("TEMPLATE_DOCUMENTATION", &metadata.project.documentation);
    }
    if !metadata.project.issues.is_empty() {
        content = content.replace("TEMPLATE_ISSUES", &metadata.project.issues);
    }

    if content != original {
        fs::write(&pyproject_path, content).map_err(Error::IoError)?;
        debug!("pyproject.toml updated with metadata.");
    }
    Ok(())
}

/// Appends metadata environment variables to the project's .env file,
/// preserving declaration order and never overwriting existing keys.
pub fn update_env(project_dir: &Path, metadata: &TemplateMetadata) -> Result<()> {
    if metadata.environment.is_empty() {
        return Ok(());
    }

    let env_path = project_dir.join(".env");
    if !env_path.is_file() {
        warn!(".env file not found, skipping metadata update.");
        return Ok(());
    }

    let original = fs::read_to_string(&env_path).map_err(Error::IoError)?;
    let mut content = original.clone();

    for (key, value) in &metadata.environment {
        if !content.contains(&format!("{key}=")) {
            content.push_str(&format!("\n{key}={value}"));
        }
    }

    if content != original {
        fs::write(&env_path, content).map_err(Error::IoError)?;
        debug!(".env updated with metadata.");
    }
    Ok(())
}
