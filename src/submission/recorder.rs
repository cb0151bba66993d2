use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::models::SubmissionRecord;

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("failed to open record file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write record: {0}")]
    Write(#[from] std::io::Error),
}

/// Durable, append-only destination for submission records.
#[async_trait]
pub trait RecordSink: Send + Sync {
    /// Append exactly one record. Failures are returned, never retried.
    async fn append(&self, record: &SubmissionRecord) -> Result<(), RecordError>;

    /// Check that the sink can still accept writes, without writing.
    async fn check_writable(&self) -> Result<(), RecordError>;
}

/// Appends records as JSON lines to a single file.
///
/// Writers take the mutex for the whole line, so records from concurrent
/// requests never interleave. The write runs on its own task and finishes
/// even when the request that started it is dropped.
pub struct FileRecorder {
    path: PathBuf,
    file: Arc<Mutex<File>>,
}

impl FileRecorder {
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, RecordError> {
        let path = path.as_ref().to_path_buf();
        let open_err = |source| RecordError::Open {
            path: path.clone(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(open_err)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .map_err(open_err)?;

        Ok(Self {
            path,
            file: Arc::new(Mutex::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RecordSink for FileRecorder {
    async fn append(&self, record: &SubmissionRecord) -> Result<(), RecordError> {
        let mut line = serde_json::to_vec(record)?;
        line.push(b'\n');

        let file = Arc::clone(&self.file);
        let write = tokio::spawn(async move {
            let mut file = file.lock().await;
            file.write_all(&line).await?;
            file.flush().await
        });

        write.await.map_err(std::io::Error::other)??;
        Ok(())
    }

    async fn check_writable(&self) -> Result<(), RecordError> {
        OpenOptions::new()
            .append(true)
            .open(&self.path)
            .await
            .map(|_| ())
            .map_err(|source| RecordError::Open {
                path: self.path.clone(),
                source,
            })
    }
}
