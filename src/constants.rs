//! Common constants used throughout the Stencil application.

/// Template used when no template reference is given
pub const DEFAULT_TEMPLATE: &str = "new_cli_project_template";

/// Directories searched for local templates, in priority order
pub const DEFAULT_SEARCH_DIRS: [&str; 2] = ["~/Repos", "Repos"];

/// Environment variable naming the primary template directory
pub const TEMPLATE_DIR_ENV: &str = "STENCIL_TEMPLATE_DIR";

/// Environment variable holding additional template directories
/// (comma-separated)
pub const TEMPLATE_PATH_ENV: &str = "STENCIL_TEMPLATE_PATH";

/// Environment variable holding additional content substitution patterns
/// (comma-separated)
pub const FILE_PATTERNS_ENV: &str = "STENCIL_FILE_PATTERNS";

/// Files receiving content substitution on top of the unconditional
/// path-renaming pass. Everything else is copied verbatim so binary
/// assets survive.
pub const DEFAULT_FILE_PATTERNS: [&str; 9] = [
    ".env",
    "README.md",
    "Makefile",
    "pyproject.toml",
    "demo.tape",
    "CLAUDE.md",
    "src/**/*.py",
    ".github/workflows/*.yml",
    ".github-disabled/workflows/*.yml",
];

/// Entries never copied out of a template: version-control metadata and
/// environment/tooling caches
pub const EXCLUDED_ENTRIES: [&str; 6] =
    [".git", ".venv", ".idea", ".ruff_cache", "__pycache__", "uv.lock"];

/// Marker replaced by generated README content
pub const METADATA_MARKER: &str = "<!-- METADATA_CONTENT -->";

/// Prefix for temporary clone directories of remote templates
pub const TEMP_CLONE_PREFIX: &str = "stencil_template_";
