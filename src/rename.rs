//! Rename & substitution engine.
//! Applies the old identifier's case variants to a copied tree: matching
//! path segments are renamed (a collision with an existing entry is an
//! error), then files matching the File Pattern Set receive content
//! substitution. Rules are ordered longest-old-first
//! and applied in one left-to-right pass per string, so text produced by
//! one rule is never re-scanned by another.

use crate::error::{Error, Result};
use crate::ident::VariantSet;
use globset::GlobSet;
use log::{debug, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Orders replacement rules so longer old strings match first, drops
/// duplicate olds (the degenerate single-word case where snake and kebab
/// coincide) and no-op pairs.
pub fn order_rules(mut rules: Vec<(String, String)>) -> Vec<(String, String)> {
    rules.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    rules.dedup_by(|a, b| a.0 == b.0);
    rules.retain(|(old, new)| old != new);
    rules
}

/// Builds the ordered `(old, new)` replacement rules for two variant sets.
///
/// Longest-first ordering is a correctness requirement: a PascalCase
/// variant may contain a Title Case word fragment, and replacing the
/// shorter variant first would corrupt the longer match.
pub fn substitution_rules(old: &VariantSet, new: &VariantSet) -> Vec<(String, String)> {
    let rules = old
        .variants()
        .zip(new.variants())
        .map(|((_, o), (_, n))| (o.to_string(), n.to_string()))
        .collect();
    order_rules(rules)
}

/// Applies the ordered rules to `input` in a single controlled pass.
///
/// At each position the first (longest) matching rule wins; the
/// replacement is emitted and scanning resumes after the consumed match,
/// never inside already-produced output.
pub fn apply_rules(input: &str, rules: &[(String, String)]) -> String {
    if rules.is_empty() {
        return input.to_string();
    }

    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while !rest.is_empty() {
        if let Some((old, new)) =
            rules.iter().find(|(old, _)| rest.starts_with(old.as_str()))
        {
            out.push_str(new);
            rest = &rest[old.len()..];
        } else if let Some(ch) = rest.chars().next() {
            out.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
    }
    out
}

/// Outcome of the substitution passes over one tree.
#[derive(Debug, Default)]
pub struct SubstitutionReport {
    /// Filesystem entries whose name changed
    pub renamed: usize,
    /// Files whose content changed
    pub updated: usize,
    /// Pattern-matched files skipped because they are not valid UTF-8
    pub skipped_binary: Vec<PathBuf>,
}

/// Renames every path segment under `root` that matches a rule.
///
/// The walk is contents-first so children are renamed before their
/// parents and no computed path is invalidated by an earlier rename. All
/// renames are planned before any is applied: renaming entries while the
/// walker still holds open directory streams could yield a renamed entry
/// a second time.
///
/// # Errors
/// * `Error::Substitution` if a rename target already exists; the entry
///   is never overwritten
pub fn rename_paths(root: &Path, rules: &[(String, String)]) -> Result<usize> {
    let mut planned: Vec<(PathBuf, PathBuf)> = Vec::new();
    for entry in WalkDir::new(root).min_depth(1).contents_first(true) {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        let Some(name) = entry.file_name().to_str() else {
            warn!("Skipping non-UTF-8 entry name '{}'.", entry.path().display());
            continue;
        };

        let replaced = apply_rules(name, rules);
        if replaced != name {
            planned.push((entry.path().to_path_buf(), entry.path().with_file_name(&replaced)));
        }
    }

    for (current, target) in &planned {
        if target.exists() {
            return Err(Error::Substitution {
                path: current.clone(),
                source: io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("rename target '{}' already exists", target.display()),
                ),
            });
        }
        debug!("Renaming '{}' to '{}'.", current.display(), target.display());
        fs::rename(current, target).map_err(|e| Error::Substitution {
            path: current.clone(),
            source: e,
        })?;
    }
    Ok(planned.len())
}

/// Substitutes content of files matching the pattern set, relative to
/// `root`. Non-UTF-8 files are recorded and skipped, never modified.
pub fn substitute_contents(
    root: &Path,
    rules: &[(String, String)],
    matcher: &GlobSet,
) -> Result<SubstitutionReport> {
    let mut report = SubstitutionReport::default();

    for entry in WalkDir::new(root).min_depth(1) {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(root)
            .map_err(|e| Error::Config(e.to_string()))?;
        if !matcher.is_match(relative) {
            continue;
        }

        let bytes = fs::read(entry.path()).map_err(|e| Error::Substitution {
            path: entry.path().to_path_buf(),
            source: e,
        })?;
        let Ok(text) = String::from_utf8(bytes) else {
            warn!("Skipping binary file '{}'.", entry.path().display());
            report.skipped_binary.push(entry.path().to_path_buf());
            continue;
        };

        let updated = apply_rules(&text, rules);
        if updated != text {
            debug!("Updating '{}'.", entry.path().display());
            fs::write(entry.path(), updated).map_err(|e| Error::Substitution {
                path: entry.path().to_path_buf(),
                source: e,
            })?;
            report.updated += 1;
        }
    }
    Ok(report)
}

/// Runs both substitution passes over `root`: paths first, then content,
/// so the content pass always sees final file locations.
pub fn apply_substitutions(
    root: &Path,
    rules: &[(String, String)],
    matcher: &GlobSet,
) -> Result<SubstitutionReport> {
    let renamed = rename_paths(root, rules)?;
    let mut report = substitute_contents(root, rules, matcher)?;
    report.renamed = renamed;
    Ok(report)
}
