use std::io::ErrorKind;
use std::path::PathBuf;

use tokio::fs::{self, File, OpenOptions};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use crate::model::core_config::Config;
use crate::model::errors::{DrawlyErrKind, DrawlyResult};

pub const BLOB_FILE: &str = "tutorials.json";

/// The persistence boundary: one opaque string blob under a single well-known
/// key. Platform stores reject oversized values, which we model here as a
/// configurable byte capacity checked before the write.
#[derive(Clone)]
pub struct TutorialDisk {
    location: PathBuf,
    capacity: Option<u64>,
}

impl TutorialDisk {
    pub async fn get(&self) -> DrawlyResult<Option<String>> {
        let path = self.blob_path();
        trace!("read\t{}", path.display());
        match File::open(&path).await {
            Ok(mut f) => {
                let mut blob = String::new();
                f.read_to_string(&mut blob).await?;
                Ok(Some(blob))
            }
            Err(err) => match err.kind() {
                ErrorKind::NotFound => Ok(None),
                _ => Err(err.into()),
            },
        }
    }

    pub async fn set(&self, blob: &str) -> DrawlyResult<()> {
        if let Some(capacity) = self.capacity {
            if blob.len() as u64 > capacity {
                return Err(DrawlyErrKind::StorageQuotaExceeded.into());
            }
        }

        let path = self.blob_path();
        let pending = self.location.join(format!("{BLOB_FILE}.pending"));
        trace!("write\t{} {} bytes", path.display(), blob.len());
        fs::create_dir_all(&self.location).await?;
        let mut f = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&pending)
            .await?;
        f.write_all(blob.as_bytes()).await?;
        Ok(fs::rename(&pending, &path).await?)
    }

    pub async fn delete(&self) -> DrawlyResult<()> {
        let path = self.blob_path();
        trace!("delete\t{}", path.display());
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) => match err.kind() {
                ErrorKind::NotFound => Ok(()),
                _ => Err(err.into()),
            },
        }
    }

    /// Size of the persisted blob as it sits on disk, 0 when absent.
    pub async fn size(&self) -> DrawlyResult<u64> {
        match fs::metadata(self.blob_path()).await {
            Ok(meta) => Ok(meta.len()),
            Err(err) => match err.kind() {
                ErrorKind::NotFound => Ok(0),
                _ => Err(err.into()),
            },
        }
    }

    fn blob_path(&self) -> PathBuf {
        self.location.join(BLOB_FILE)
    }
}

impl From<&Config> for TutorialDisk {
    fn from(cfg: &Config) -> Self {
        Self { location: PathBuf::from(&cfg.writeable_path), capacity: cfg.storage_capacity }
    }
}
