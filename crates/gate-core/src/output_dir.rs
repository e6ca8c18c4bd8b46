// crates/gate-core/src/output_dir.rs
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::{GateError, Result};

/// Convert a potentially relative path into an absolute one without resolving symlinks.
///
/// `.` and `..` are folded lexically, the way a shell's `cd dir && pwd` reports it.
pub fn logical_absolute(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };
    normalize(&joined)
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() && !out.has_root() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Resolve `path` and create it with all missing parents.
///
/// Succeeds without touching anything when the directory already exists.
///
/// # Errors
/// Returns [`GateError::OutputDir`] if the directory cannot be created.
pub fn ensure_output_dir(path: &Path) -> Result<PathBuf> {
    let absolute = logical_absolute(path);
    fs::create_dir_all(&absolute).map_err(|source| GateError::OutputDir {
        path: absolute.clone(),
        source,
    })?;
    tracing::debug!(path = %absolute.display(), "output directory ready");
    Ok(absolute)
}
