//! Filesystem helpers for atomic record rewrites.

use std::fs;
use std::io;
use std::path::Path;

/// Write `contents` to `destination` through a temp file in the same
/// directory, then rename it into place.
///
/// A crash mid-write leaves the previous record intact; readers never
/// observe a half-written file. The record is created with owner-only
/// permissions on Unix since it carries the password hash.
///
/// # Errors
///
/// Returns an error if the temp file cannot be written or the rename
/// fails even after the replace fallback.
pub fn write_atomic(destination: &Path, contents: &str) -> io::Result<()> {
    let dir = destination.parent().unwrap_or_else(|| Path::new("."));
    let stem = destination
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "record".to_string());
    let temp_path = dir.join(format!(".{}.{}.tmp", stem, std::process::id()));

    fs::write(&temp_path, contents)?;
    restrict_permissions(&temp_path)?;

    if let Err(initial_err) = fs::rename(&temp_path, destination) {
        // Some platforms refuse to rename over an existing file.
        let _ = fs::remove_file(destination);
        fs::rename(&temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(&temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}

fn restrict_permissions(path: &Path) -> io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(path, perms)?;
    }
    #[cfg(not(unix))]
    {
        let _ = path;
    }
    Ok(())
}
