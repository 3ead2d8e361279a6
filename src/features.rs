//! Predefined package bundles and their dependency resolution.

use clap::ValueEnum;
use std::collections::{BTreeSet, VecDeque};

/// A named bundle of packages installable into a generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum Feature {
    /// Core packages every generated project receives
    Base,
    /// Command-line interface packages
    Cli,
    /// Textual TUI packages
    Textual,
    /// par-ai-core integration
    #[value(name = "par-ai-core")]
    ParAi,
}

impl Feature {
    pub const ALL: [Feature; 4] =
        [Feature::Base, Feature::Cli, Feature::Textual, Feature::ParAi];

    /// User-facing bundle name.
    pub fn name(self) -> &'static str {
        match self {
            Feature::Base => "base",
            Feature::Cli => "cli",
            Feature::Textual => "textual",
            Feature::ParAi => "par-ai-core",
        }
    }

    /// Packages installed for this bundle.
    pub fn packages(self) -> &'static [&'static str] {
        match self {
            Feature::Base => &[
                "python-dotenv",
                "asyncio",
                "pydantic-core",
                "pydantic",
                "orjson",
                "rich",
                "requests",
            ],
            Feature::Cli => &["prompt-toolkit", "typer", "clipman"],
            Feature::Textual => &["textual", "textual-dev", "clipman"],
            Feature::ParAi => &["par-ai-core"],
        }
    }

    /// Bundles this bundle depends on.
    pub fn dependencies(self) -> &'static [Feature] {
        match self {
            Feature::Base => &[],
            Feature::Cli => &[Feature::Base],
            Feature::Textual => &[Feature::Base, Feature::Cli],
            Feature::ParAi => &[Feature::Base],
        }
    }

    /// Looks a bundle up by its user-facing name.
    pub fn from_name(name: &str) -> Option<Feature> {
        Feature::ALL.into_iter().find(|f| f.name() == name)
    }
}

/// Resolves the transitive closure of the requested bundles.
///
/// `base` is always included. The result is in declaration order, so
/// `base` installs first.
pub fn resolve_features(requested: &[Feature]) -> Vec<Feature> {
    let mut resolved = BTreeSet::new();
    resolved.insert(Feature::Base);

    let mut queue: VecDeque<Feature> = requested.iter().copied().collect();
    while let Some(feature) = queue.pop_front() {
        if resolved.insert(feature) {
            queue.extend(feature.dependencies().iter().copied());
        }
    }

    resolved.into_iter().collect()
}
