use serde::Serialize;

use crate::Drawly;
use crate::model::errors::{DrawlyErrKind, DrawlyResult, Unexpected};
use crate::model::tutorial::{
    MAX_BLOB_SIZE, MAX_IMAGE_SIZE, MAX_TUTORIALS, PLACEHOLDER_IMAGE, REDUCED_RETRY_HEADROOM,
    Tutorial, TutorialUpdate,
};
use crate::service::events::StorageNotice;

/// How a commit landed. `SavedReduced` means the degraded write path ran and
/// `dropped` older tutorials were let go to make the blob fit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    SavedReduced { dropped: usize },
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct StorageInfo {
    pub tutorial_count: usize,
    pub storage_size_mb: String,
    pub max_tutorials: usize,
}

impl Drawly {
    /// Reads the persisted library into memory. Read and decode failures are
    /// logged and leave the library empty; a fresh install and a corrupt blob
    /// look the same to callers.
    pub(crate) async fn hydrate(&self) {
        let stored = match self.disk.get().await {
            Ok(stored) => stored,
            Err(err) => {
                warn!(?err, "could not read the tutorial library, starting empty");
                None
            }
        };

        if let Some(blob) = stored {
            match serde_json::from_str::<Vec<Tutorial>>(&blob) {
                Ok(tutorials) => {
                    info!("hydrated {} tutorials", tutorials.len());
                    *self.tutorials.write().await = tutorials;
                }
                Err(err) => warn!(?err, "tutorial library corrupt, starting empty"),
            }
        }
    }

    /// Newest first.
    pub async fn list_tutorials(&self) -> Vec<Tutorial> {
        self.tutorials.read().await.clone()
    }

    pub async fn get_tutorial(&self, id: &str) -> DrawlyResult<Tutorial> {
        self.tutorials
            .read()
            .await
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| DrawlyErrKind::TutorialNonexistent.into())
    }

    /// True only while `init` is hydrating the library.
    pub fn is_loading(&self) -> bool {
        self.loading.load(std::sync::atomic::Ordering::Acquire)
    }

    #[instrument(level = "debug", skip_all, err(Debug))]
    pub async fn add_tutorial(&self, mut tutorial: Tutorial) -> DrawlyResult<SaveOutcome> {
        bound_image(&mut tutorial);
        let mut candidate = self.tutorials.read().await.clone();
        candidate.insert(0, tutorial);
        self.commit(candidate).await
    }

    /// Unmatched ids are a no-op content-wise but the commit still runs.
    #[instrument(level = "debug", skip(self), err(Debug))]
    pub async fn remove_tutorial(&self, id: &str) -> DrawlyResult<SaveOutcome> {
        let mut candidate = self.tutorials.read().await.clone();
        candidate.retain(|t| t.id != id);
        self.commit(candidate).await
    }

    /// Shallow merge of `patch` into the matching tutorial. Unmatched ids are
    /// a no-op content-wise but the commit still runs.
    #[instrument(level = "debug", skip(self, patch), err(Debug))]
    pub async fn update_tutorial(&self, id: &str, patch: TutorialUpdate) -> DrawlyResult<SaveOutcome> {
        let mut candidate = self.tutorials.read().await.clone();
        if let Some(tutorial) = candidate.iter_mut().find(|t| t.id == id) {
            tutorial.merge(patch);
        }
        self.commit(candidate).await
    }

    /// Deletes the persisted blob and empties the in-memory library. Failure
    /// is logged only; the next commit will overwrite whatever is there.
    pub async fn clear_all(&self) {
        if self.disk.delete().await.log_and_ignore().is_some() {
            self.tutorials.write().await.clear();
            self.events.tutorials_changed();
        }
    }

    /// Reports the blob size as it sits on disk, not the in-memory mirror.
    pub async fn storage_info(&self) -> DrawlyResult<StorageInfo> {
        let bytes = self.disk.size().await?;
        Ok(StorageInfo {
            tutorial_count: self.tutorials.read().await.len(),
            storage_size_mb: format!("{:.2}", bytes as f64 / (1024.0 * 1024.0)),
            max_tutorials: MAX_TUTORIALS,
        })
    }

    /// Two-phase commit. The in-memory library is only replaced once a write
    /// lands; until then readers keep seeing the previous state. A quota
    /// refusal (from the serialized ceiling or the platform store) gets one
    /// retry with a harder truncation, after which the operation is abandoned
    /// with the library untouched.
    async fn commit(&self, candidate: Vec<Tutorial>) -> DrawlyResult<SaveOutcome> {
        match self.try_write(&candidate, MAX_TUTORIALS).await {
            Ok(committed) => {
                *self.tutorials.write().await = committed;
                self.events.tutorials_changed();
                Ok(SaveOutcome::Saved)
            }
            Err(err) if err.kind == DrawlyErrKind::StorageQuotaExceeded => {
                let keep = MAX_TUTORIALS.saturating_sub(REDUCED_RETRY_HEADROOM).max(1);
                warn!("tutorial blob over quota, retrying with at most {keep} entries");

                match self.try_write(&candidate, keep).await {
                    Ok(committed) => {
                        let dropped = candidate.len().min(MAX_TUTORIALS) - committed.len();
                        *self.tutorials.write().await = committed;
                        self.events.tutorials_changed();
                        self.events
                            .storage_notice(StorageNotice::OlderTutorialsDropped { dropped });
                        Ok(SaveOutcome::SavedReduced { dropped })
                    }
                    Err(retry_err) => {
                        error!(?retry_err, "tutorial save failed even after dropping older entries");
                        self.events.storage_notice(StorageNotice::SaveFailed);
                        Err(DrawlyErrKind::StorageFull.into())
                    }
                }
            }
            Err(err) => Err(err),
        }
    }

    /// Truncates to `keep` entries (the list is newest-first, so truncation
    /// drops the oldest), applies the image policy, serializes, checks the
    /// ceiling, persists. Returns exactly what was written.
    async fn try_write(&self, candidate: &[Tutorial], keep: usize) -> DrawlyResult<Vec<Tutorial>> {
        let mut limited: Vec<Tutorial> = candidate.iter().take(keep).cloned().collect();
        for tutorial in &mut limited {
            bound_image(tutorial);
        }

        let blob = serde_json::to_string(&limited)?;
        if blob.len() > MAX_BLOB_SIZE {
            return Err(DrawlyErrKind::StorageQuotaExceeded.into());
        }

        self.disk.set(&blob).await?;
        Ok(limited)
    }
}

/// Oversized images are replaced with the placeholder, permanently for that
/// commit. Idempotent: the placeholder itself is well under the limit.
fn bound_image(tutorial: &mut Tutorial) {
    if tutorial.original_image.len() > MAX_IMAGE_SIZE {
        warn!("image on tutorial {} too large, storing placeholder", tutorial.id);
        tutorial.original_image = PLACEHOLDER_IMAGE.to_string();
    }
}
