use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::storage::PhotoStorage,
};
use crate::domain::user::PhotoFilename;
use async_trait::async_trait;
use bytes::Bytes;
use std::{io::ErrorKind, path::PathBuf};

/// Keeps profile photos as plain files in one directory.
#[derive(Clone)]
pub struct LocalPhotoStorage {
    root: PathBuf,
}

impl LocalPhotoStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub async fn ensure_root(&self) -> ApplicationResult<()> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }

    fn path_of(&self, name: &PhotoFilename) -> PathBuf {
        self.root.join(name.as_str())
    }
}

#[async_trait]
impl PhotoStorage for LocalPhotoStorage {
    async fn exists(&self, name: &PhotoFilename) -> ApplicationResult<bool> {
        tokio::fs::try_exists(self.path_of(name))
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }

    async fn store(&self, name: &PhotoFilename, data: Bytes) -> ApplicationResult<()> {
        self.ensure_root().await?;
        tokio::fs::write(self.path_of(name), &data)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }

    async fn remove(&self, name: &PhotoFilename) -> ApplicationResult<()> {
        match tokio::fs::remove_file(self.path_of(name)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(ApplicationError::infrastructure(err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stores_and_removes_files() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalPhotoStorage::new(dir.path().join("photos"));
        let name = PhotoFilename::new("abc.png").unwrap();

        assert!(!storage.exists(&name).await.unwrap());
        storage
            .store(&name, Bytes::from_static(b"png"))
            .await
            .unwrap();
        assert!(storage.exists(&name).await.unwrap());

        storage.remove(&name).await.unwrap();
        assert!(!storage.exists(&name).await.unwrap());
        // already gone
        storage.remove(&name).await.unwrap();
    }
}
