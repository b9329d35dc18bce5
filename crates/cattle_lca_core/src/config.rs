//! Resource-store location.
//!
//! # Responsibility
//! - Resolve the database path used by `Loader::new` and `LcaDataManager::new`.
//!
//! # Invariants
//! - Resolution order: configured path, then `CATTLE_LCA_DATABASE_PATH`,
//!   then `DEFAULT_DATABASE_PATH` relative to the working directory.
//! - A configured path is set at most once per process.

use log::info;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

pub const DATABASE_PATH_ENV: &str = "CATTLE_LCA_DATABASE_PATH";
pub const DEFAULT_DATABASE_PATH: &str = "data/cattle_database.db";

static DATABASE_PATH: OnceCell<PathBuf> = OnceCell::new();

/// Pins the resource store path for this process.
///
/// Repeating the call with the same path is a no-op.
///
/// # Errors
/// - Returns an error when `path` is empty.
/// - Returns an error when a different path is already configured.
pub fn configure_database_path(path: impl AsRef<Path>) -> Result<(), String> {
    let path = normalize_path(path.as_ref())?;
    let active = DATABASE_PATH.get_or_init(|| {
        info!(
            "event=config_set module=config status=ok database_path={}",
            path.display()
        );
        path.clone()
    });

    if *active != path {
        return Err(format!(
            "database path already configured as `{}`; refusing to switch to `{}`",
            active.display(),
            path.display()
        ));
    }
    Ok(())
}

/// Returns the path the next store open will use.
pub fn database_path() -> PathBuf {
    if let Some(path) = DATABASE_PATH.get() {
        return path.clone();
    }
    resolve_unconfigured(std::env::var_os(DATABASE_PATH_ENV).map(PathBuf::from))
}

fn resolve_unconfigured(from_env: Option<PathBuf>) -> PathBuf {
    from_env
        .and_then(|path| normalize_path(&path).ok())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH))
}

fn normalize_path(path: &Path) -> Result<PathBuf, String> {
    let raw = path.to_string_lossy();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("database path cannot be empty".to_string());
    }
    Ok(PathBuf::from(trimmed))
}

#[cfg(test)]
mod tests {
    use super::{normalize_path, resolve_unconfigured, DEFAULT_DATABASE_PATH};
    use std::path::{Path, PathBuf};

    #[test]
    fn blank_paths_are_rejected() {
        assert!(normalize_path(Path::new("  ")).is_err());
    }

    #[test]
    fn env_path_wins_over_default() {
        assert_eq!(
            resolve_unconfigured(Some(PathBuf::from("/srv/lca.db"))),
            PathBuf::from("/srv/lca.db")
        );
    }

    #[test]
    fn blank_env_falls_back_to_default() {
        assert_eq!(
            resolve_unconfigured(Some(PathBuf::from(""))),
            PathBuf::from(DEFAULT_DATABASE_PATH)
        );
        assert_eq!(resolve_unconfigured(None), PathBuf::from(DEFAULT_DATABASE_PATH));
    }
}
