//! Local Disk Store

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs::{self, File, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::domain::image::StoredName;
use crate::domain::store::UploadStore;
use crate::error::UploadResult;

/// Writes uploads as flat files into one directory
#[derive(Debug, Clone)]
pub struct DiskStore {
    dir: PathBuf,
}

/// A file being written
pub struct DiskSink {
    path: PathBuf,
    file: File,
}

impl DiskStore {
    /// Use `dir`, creating it (and parents) when missing
    pub async fn open(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).await?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl UploadStore for DiskStore {
    type Sink = DiskSink;

    async fn create(&self, name: &StoredName) -> UploadResult<DiskSink> {
        let path = self.dir.join(name.as_str());
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await?;
        Ok(DiskSink { path, file })
    }

    async fn append(&self, sink: &mut DiskSink, bytes: &[u8]) -> UploadResult<()> {
        sink.file.write_all(bytes).await?;
        Ok(())
    }

    async fn commit(&self, mut sink: DiskSink) -> UploadResult<()> {
        sink.file.flush().await?;
        Ok(())
    }

    async fn discard(&self, sink: DiskSink) {
        let DiskSink { path, file } = sink;
        drop(file);
        if let Err(e) = fs::remove_file(&path).await {
            tracing::warn!(path = %path.display(), error = %e, "Failed to remove partial upload");
        }
    }
}
