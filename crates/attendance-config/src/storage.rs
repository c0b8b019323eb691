//! Filesystem locations the records application writes to.

use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageConfig {
    /// General file uploads.
    pub upload_dir: PathBuf,
    /// Registered face images used for biometric attendance.
    pub face_storage_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from("uploads"),
            face_storage_dir: PathBuf::from("student_faces"),
        }
    }
}

impl StorageConfig {
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            upload_dir: lookup("UPLOAD_FOLDER")
                .map(PathBuf::from)
                .unwrap_or(defaults.upload_dir),
            face_storage_dir: lookup("FACE_STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.face_storage_dir),
        }
    }

    /// Directories the provisioner must create, in order.
    pub fn directories(&self) -> Vec<PathBuf> {
        vec![self.upload_dir.clone(), self.face_storage_dir.clone()]
    }
}
