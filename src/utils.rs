//! Common utility functions shared across the codebase.

use std::path::Path;

/// Replace Windows path separators with `/`.
///
/// # Examples
///
/// ```
/// use lingua_guard::utils::normalize_separators;
///
/// assert_eq!(normalize_separators("public\\locales\\en\\common.json"), "public/locales/en/common.json");
/// assert_eq!(normalize_separators("src/app.tsx"), "src/app.tsx");
/// ```
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Display a path relative to `root` when it lives under it.
pub fn display_relative(path: &str, root: &Path) -> String {
    Path::new(path)
        .strip_prefix(root)
        .map(|p| normalize_separators(&p.to_string_lossy()))
        .unwrap_or_else(|_| path.to_string())
}
