use std::fs::{self, Permissions};
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::TablesError;

/// Writes `contents` to a temporary file next to `path` and renames it into
/// place. On failure the temporary file is removed and `path` is untouched.
/// The result keeps the mode of the file it replaces, or 0644 when new.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), TablesError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(|err| unwritable(path, err))?;
    file.write_all(contents).map_err(|err| unwritable(path, err))?;
    if let Some(permissions) = target_permissions(path) {
        file.as_file()
            .set_permissions(permissions)
            .map_err(|err| unwritable(path, err))?;
    }
    file.as_file().sync_all().map_err(|err| unwritable(path, err))?;
    file.persist(path).map_err(|err| unwritable(path, err.error))?;
    log::debug!("wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

fn target_permissions(path: &Path) -> Option<Permissions> {
    match fs::metadata(path) {
        Ok(meta) => Some(meta.permissions()),
        Err(_) => default_permissions(),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<Permissions> {
    None
}

fn unwritable(path: &Path, source: io::Error) -> TablesError {
    TablesError::OutputUnwritable {
        path: path.to_path_buf(),
        source,
    }
}
