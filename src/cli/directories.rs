//! Directory Provisioner.

use attendance_core::SetupError;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Creates each path and any missing parents.
///
/// Existing directories are left alone. Any other failure (permissions, a
/// file already sitting at the path, a full disk) is returned with the
/// offending path.
pub async fn ensure_directories<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<PathBuf>, SetupError> {
    let mut ready = Vec::with_capacity(paths.len());

    for path in paths {
        let path = path.as_ref();
        fs::create_dir_all(path)
            .await
            .map_err(|source| SetupError::Directory {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(path = %path.display(), "Directory ready");
        ready.push(path.to_path_buf());
    }

    Ok(ready)
}
