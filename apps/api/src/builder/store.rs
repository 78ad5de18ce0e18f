//! File-backed resume store: one pretty-printed JSON file per record.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::builder::models::{ResumeRecord, StoredResume};
use crate::errors::AppError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("resume {0} not found")]
    NotFound(Uuid),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("storage task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => AppError::NotFound(format!("Resume {id} not found")),
            other => AppError::Storage(other.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResumeStore {
    dir: PathBuf,
}

impl ResumeStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: Uuid) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }

    /// Assigns a fresh id and writes the record. The file appears atomically:
    /// it is written beside its final path and then renamed into place.
    pub async fn save(&self, resume: ResumeRecord) -> Result<StoredResume, StoreError> {
        let stored = StoredResume {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            resume,
        };
        let body = serde_json::to_vec_pretty(&stored)?;
        let dir = self.dir.clone();
        let path = self.path_for(stored.id);

        tokio::task::spawn_blocking(move || -> Result<(), StoreError> {
            std::fs::create_dir_all(&dir)?;
            let mut staged = NamedTempFile::new_in(&dir)?;
            staged.write_all(&body)?;
            staged.as_file().sync_all()?;
            staged.persist(&path).map_err(|e| StoreError::Io(e.error))?;
            Ok(())
        })
        .await??;

        info!("Saved resume {} to {}", stored.id, self.dir.display());
        Ok(stored)
    }

    pub async fn load(&self, id: Uuid) -> Result<StoredResume, StoreError> {
        let bytes = match tokio::fs::read(self.path_for(id)).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(id))
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::models::PersonalInfo;

    fn record(name: &str) -> ResumeRecord {
        ResumeRecord {
            personal_info: PersonalInfo {
                full_name: name.to_string(),
                email: "jane@example.com".to_string(),
                ..Default::default()
            },
            professional_summary: "Backend engineer".to_string(),
            skills: vec!["Rust".to_string()],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = ResumeStore::new(dir.path().join("resumes"));

        let saved = store.save(record("Jane Doe")).await.unwrap();
        let loaded = store.load(saved.id).await.unwrap();

        assert_eq!(loaded, saved);
        assert!(store.dir().join(format!("{}.json", saved.id)).exists());
    }

    #[tokio::test]
    async fn test_same_name_never_collides() {
        let dir = tempfile::tempdir().unwrap();
        let store = ResumeStore::new(dir.path());

        let first = store.save(record("Jane Doe")).await.unwrap();
        let second = store.save(record("Jane Doe")).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.load(first.id).await.unwrap(), first);
        assert_eq!(store.load(second.id).await.unwrap(), second);
    }

    #[tokio::test]
    async fn test_missing_id_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = ResumeStore::new(dir.path());
        let id = Uuid::new_v4();
        assert!(matches!(store.load(id).await, Err(StoreError::NotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn test_no_staging_files_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = ResumeStore::new(dir.path());
        store.save(record("Jane Doe")).await.unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
