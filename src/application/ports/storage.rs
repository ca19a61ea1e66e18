// src/application/ports/storage.rs
use crate::application::ApplicationResult;
use crate::domain::user::PhotoFilename;
use async_trait::async_trait;
use bytes::Bytes;

#[async_trait]
pub trait PhotoStorage: Send + Sync {
    async fn exists(&self, name: &PhotoFilename) -> ApplicationResult<bool>;
    async fn store(&self, name: &PhotoFilename, data: Bytes) -> ApplicationResult<()>;
    /// Removing a file that is already gone is not an error.
    async fn remove(&self, name: &PhotoFilename) -> ApplicationResult<()>;
}
