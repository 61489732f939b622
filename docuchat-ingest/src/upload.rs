//! Storage for uploaded files.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;

/// Persists uploaded file bytes under a directory, one file per upload.
///
/// Only the file-name component of the provided name is used, so an upload
/// can never escape the directory.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    /// Open an upload store rooted at `dir`, creating it if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The directory uploads are written to.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write the uploaded bytes and return the path they landed at.
    pub async fn save(&self, name: &str, bytes: &[u8]) -> Result<PathBuf> {
        let file_name = Path::new(name).file_name().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, format!("invalid upload name '{name}'"))
        })?;

        let path = self.dir.join(file_name);
        tokio::fs::write(&path, bytes).await?;
        debug!(path = %path.display(), size = bytes.len(), "stored upload");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn saves_bytes_under_the_directory() {
        let dir = TempDir::new().unwrap();
        let store = UploadStore::new(dir.path()).unwrap();
        let path = store.save("report.pdf", b"%PDF-1.4").await.unwrap();
        assert_eq!(path, dir.path().join("report.pdf"));
        assert_eq!(std::fs::read(path).unwrap(), b"%PDF-1.4");
    }

    #[tokio::test]
    async fn upload_name_is_reduced_to_its_file_name() {
        let dir = TempDir::new().unwrap();
        let store = UploadStore::new(dir.path()).unwrap();
        let path = store.save("nested/dir/report.pdf", b"x").await.unwrap();
        assert_eq!(path, dir.path().join("report.pdf"));
    }

    #[tokio::test]
    async fn name_without_file_component_is_rejected() {
        let dir = TempDir::new().unwrap();
        let store = UploadStore::new(dir.path()).unwrap();
        assert!(store.save("..", b"x").await.is_err());
    }
}
