use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;

use super::{AdapterError, StorageAdapter};

/// File-backed adapter: one file per key under a base directory.
///
/// Writes go to a `.tmp` sibling first, get flushed, then are renamed over
/// the final path so a crash mid-write never leaves a torn record behind.
#[derive(Debug)]
pub struct FileStorageAdapter {
    base_path: PathBuf,
}

impl FileStorageAdapter {
    pub fn new(base_path: impl AsRef<Path>) -> io::Result<Self> {
        let base_path = base_path.as_ref().to_path_buf();
        std::fs::create_dir_all(&base_path)?;
        Ok(FileStorageAdapter { base_path })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        // Keys contain '@' and '.' but never path separators.
        self.base_path.join(format!("{key}.json"))
    }
}

impl StorageAdapter for FileStorageAdapter {
    async fn read(&self, key: &str) -> Result<Option<String>, AdapterError> {
        match fs::read_to_string(self.key_path(key)).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AdapterError::Io(e)),
        }
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), AdapterError> {
        let final_path = self.key_path(key);
        let temp_path = final_path.with_extension("tmp");

        let mut file = fs::File::create(&temp_path).await?;
        file.write_all(value.as_bytes()).await?;
        file.sync_all().await?;

        fs::rename(&temp_path, &final_path).await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), AdapterError> {
        match fs::remove_file(self.key_path(key)).await {
            Ok(()) => Ok(()),
            // Deleting an absent key is not an error.
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AdapterError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("telecare-file-adapter-{}-{}", tag, std::process::id()));
        // Leftovers from an aborted earlier run would skew assertions.
        std::fs::remove_dir_all(&dir).ok();
        dir
    }

    #[tokio::test]
    async fn write_read_delete_round_trip() {
        let dir = scratch_dir("roundtrip");
        let adapter = FileStorageAdapter::new(&dir).unwrap();

        assert_eq!(adapter.read("@telehealth_user").await.unwrap(), None);

        adapter.write("@telehealth_user", r#"{"id":"patient1"}"#).await.unwrap();
        assert_eq!(
            adapter.read("@telehealth_user").await.unwrap(),
            Some(r#"{"id":"patient1"}"#.to_string())
        );

        adapter.delete("@telehealth_user").await.unwrap();
        assert_eq!(adapter.read("@telehealth_user").await.unwrap(), None);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn delete_missing_key_is_ok() {
        let dir = scratch_dir("delete-missing");
        let adapter = FileStorageAdapter::new(&dir).unwrap();
        assert!(adapter.delete("@telehealth_user").await.is_ok());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn overwrite_replaces_previous_value() {
        let dir = scratch_dir("overwrite");
        let adapter = FileStorageAdapter::new(&dir).unwrap();

        adapter.write("@telehealth_appointments", "[]").await.unwrap();
        adapter.write("@telehealth_appointments", r#"[{"id":"apt_1"}]"#).await.unwrap();

        assert_eq!(
            adapter.read("@telehealth_appointments").await.unwrap(),
            Some(r#"[{"id":"apt_1"}]"#.to_string())
        );
        std::fs::remove_dir_all(&dir).ok();
    }
}
