use async_trait::async_trait;
use bytes::Bytes;
use quill_blog::application::{ApplicationResult, ports::storage::PhotoStorage};
use quill_blog::domain::user::PhotoFilename;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct InMemoryPhotoStorage {
    files: Mutex<HashMap<String, Bytes>>,
}

impl InMemoryPhotoStorage {
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.files.lock().unwrap().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.files.lock().unwrap().contains_key(name)
    }
}

#[async_trait]
impl PhotoStorage for InMemoryPhotoStorage {
    async fn exists(&self, name: &PhotoFilename) -> ApplicationResult<bool> {
        Ok(self.contains(name.as_str()))
    }

    async fn store(&self, name: &PhotoFilename, data: Bytes) -> ApplicationResult<()> {
        self.files
            .lock()
            .unwrap()
            .insert(name.as_str().to_string(), data);
        Ok(())
    }

    async fn remove(&self, name: &PhotoFilename) -> ApplicationResult<()> {
        self.files.lock().unwrap().remove(name.as_str());
        Ok(())
    }
}
