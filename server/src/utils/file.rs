//! File utility functions

use std::path::PathBuf;

/// Expand a user-supplied path (config file, database file, data dir) to an absolute path.
///
/// `~` and `~/...` resolve against the home directory; anything relative
/// resolves against the current directory. Nothing is canonicalized.
///
/// ```text
/// expand_path("~/.catalog/catalog.db") // -> /home/user/.catalog/catalog.db
/// expand_path("catalog.json")          // -> /current/dir/catalog.json
/// expand_path("/srv/catalog.db")       // -> /srv/catalog.db
/// ```
pub fn expand_path(path: &str) -> PathBuf {
    let path = path.trim();

    if path.is_empty() {
        return std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    }

    let expanded = if path == "~" {
        dirs::home_dir().unwrap_or_else(|| PathBuf::from(path))
    } else if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            home.join(rest)
        } else {
            PathBuf::from(path)
        }
    } else {
        PathBuf::from(path)
    };

    if expanded.is_relative() {
        std::env::current_dir()
            .map(|cwd| cwd.join(&expanded))
            .unwrap_or(expanded)
    } else {
        expanded
    }
}
