//! Release configuration.
//!
//! [`ReleaseManifest`] describes one release: identity (product, version,
//! date), what is staged (allow-lists and exclude globs), which artifacts
//! are generated, and which auxiliary commands run first. It is built once
//! through [`ReleaseManifestBuilder`] and passed by reference to every
//! pipeline stage.

mod artifact;
mod builder;
mod entry;
mod hook;
mod manifest;

pub use artifact::{ArtifactTemplate, TemplateSource};
pub use builder::ReleaseManifestBuilder;
pub use entry::{AllowListEntry, ExcludePatterns};
pub use hook::HookCommand;
pub use manifest::ReleaseManifest;

/// Product name used when none is configured.
pub const DEFAULT_PRODUCT_NAME: &str = "TinaKit";

/// Version used when none is configured.
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Release date used when none is configured.
pub const DEFAULT_RELEASE_DATE: &str = "2025-06-21";

/// Build type written to the version descriptor.
pub const DEFAULT_BUILD_TYPE: &str = "Production Release";

/// Directories staged when present at the project root.
pub const DEFAULT_DIRECTORIES: &[&str] =
    &["include", "src", "examples", "tests", "docs", "third_party"];

/// Standalone files staged when present at the project root.
pub const DEFAULT_FILES: &[&str] = &[
    "README.md",
    "CHANGELOG.md",
    "CMakeLists.txt",
    "LICENSE",
    ".gitignore",
];

/// Path components never staged from allow-listed directories.
pub const DEFAULT_EXCLUDES: &[&str] = &[
    "*.obj",
    "*.exe",
    "*.dll",
    "*.lib",
    "*.pdb",
    "__pycache__",
    "*.pyc",
    ".git*",
    "build*",
    "cmake-build-*",
];

/// Feature summary written to the version descriptor.
pub const DEFAULT_FEATURES: &[&str] = &[
    "Complete Excel (.xlsx) support",
    "Modern C++20 architecture",
    "High performance optimizations",
    "100% test coverage",
    "Cross-platform compatibility",
];

/// Minimal usage illustration for the installation guide.
pub const DEFAULT_USAGE_SNIPPET: &str = r#"#include "tinakit/tinakit.hpp"

int main() {
    auto workbook = tinakit::excel::Workbook::create();
    auto sheet = workbook.active_sheet();

    sheet["A1"].value("Hello, TinaKit!");
    workbook.save("hello.xlsx");

    return 0;
}"#;
