use super::{Attachment, UploadFile, UploadReceipt};
use crate::backend::AnyAttachmentStore;
use crate::error::ClientError;
use parking_lot::Mutex;
use std::sync::Arc;

/// Result of [`AttachmentDirectory::upload`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// No file was given
    Skipped,
    Uploaded(UploadReceipt),
    Failed(ClientError),
}

#[derive(Debug, Default)]
struct DirectoryState {
    listing: Vec<Attachment>,
    /// Network calls currently running
    in_flight: usize,
}

/// Counts one network call as loading until it finishes or is dropped
struct LoadingGuard<'a> {
    state: &'a Mutex<DirectoryState>,
}

impl<'a> LoadingGuard<'a> {
    fn enter(state: &'a Mutex<DirectoryState>) -> Self {
        state.lock().in_flight += 1;
        Self { state }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.state.lock();
        state.in_flight = state.in_flight.saturating_sub(1);
    }
}

/// Cached view of the remote attachment listing.
///
/// Failures never reach the caller as errors: a failed refresh keeps the
/// previous listing and is logged. Handles are cheap to clone and share the
/// same listing, so the loading state can be watched while a call runs.
#[derive(Clone)]
pub struct AttachmentDirectory {
    store: AnyAttachmentStore,
    state: Arc<Mutex<DirectoryState>>,
}

impl AttachmentDirectory {
    pub fn new(store: AnyAttachmentStore) -> Self {
        Self {
            store,
            state: Arc::new(Mutex::new(DirectoryState::default())),
        }
    }

    /// Fetch the full listing and replace the cached one wholesale
    pub async fn refresh(&self) -> Vec<Attachment> {
        let _loading = LoadingGuard::enter(&self.state);
        match self.store.list().await {
            Ok(listing) => {
                tracing::debug!(entries = listing.len(), "attachment listing refreshed");
                self.state.lock().listing = listing.clone();
                listing
            }
            Err(err) => {
                tracing::warn!(kind = err.kind(), "failed to load files: {err}");
                self.listing()
            }
        }
    }

    /// Upload one file, then resynchronize with the store whatever happened
    pub async fn upload(&self, file: Option<UploadFile>) -> UploadOutcome {
        let Some(file) = file else {
            return UploadOutcome::Skipped;
        };

        let outcome = {
            let _loading = LoadingGuard::enter(&self.state);
            match self.store.upload(&file).await {
                Ok(receipt) => {
                    tracing::info!(
                        name = %file.name,
                        stored_as = receipt.blob_name.as_deref().unwrap_or(&file.name),
                        "uploaded attachment"
                    );
                    UploadOutcome::Uploaded(receipt)
                }
                Err(err) => {
                    tracing::error!(name = %file.name, "upload error: {err}");
                    UploadOutcome::Failed(err)
                }
            }
        };

        self.refresh().await;
        outcome
    }

    /// Snapshot of the last fetched listing
    pub fn listing(&self) -> Vec<Attachment> {
        self.state.lock().listing.clone()
    }

    /// Whether a list or upload call is running
    pub fn is_loading(&self) -> bool {
        self.state.lock().in_flight > 0
    }
}
