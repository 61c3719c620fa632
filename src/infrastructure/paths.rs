//! Path helpers for the Zellij sandbox environment.

use std::path::PathBuf;

/// Directory holding Dexplorer's trace files.
///
/// Resolves to `/host/.local/share/zellij/dexplorer`, which maps to
/// `~/.local/share/zellij/dexplorer` when Zellij was started from the home
/// directory.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("dexplorer")
}

/// Maps `~` and `~/...` onto the sandbox's `/host` mount.
///
/// # Examples
///
/// ```
/// use dexplorer::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/data/dex.json"), "/host/data/dex.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/srv/dex.json"), "/srv/dex.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => "/host".to_string(),
        Some(rest) if rest.starts_with('/') => format!("/host{rest}"),
        _ => path.to_string(),
    }
}
