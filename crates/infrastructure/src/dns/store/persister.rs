use super::record_store::RecordStore;
use bramble_dns_domain::DomainError;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, error, warn};

/// Runs store saves off the request path.
///
/// Saves are serialized so two snapshots never interleave on disk. A save
/// that fails past the backup step is reported on the fatal channel; the
/// process owner is expected to shut down when it receives one.
#[derive(Clone)]
pub struct SnapshotPersister {
    store: Arc<RecordStore>,
    gate: Arc<Mutex<()>>,
    fatal_tx: mpsc::UnboundedSender<DomainError>,
}

impl SnapshotPersister {
    pub fn new(store: Arc<RecordStore>) -> (Self, mpsc::UnboundedReceiver<DomainError>) {
        let (fatal_tx, fatal_rx) = mpsc::unbounded_channel();
        let persister = Self {
            store,
            gate: Arc::new(Mutex::new(())),
            fatal_tx,
        };
        (persister, fatal_rx)
    }

    /// Schedules a save and returns immediately.
    pub fn request_save(&self) {
        let persister = self.clone();
        tokio::spawn(async move {
            if let Err(e) = persister.save_now().await {
                persister.report(e);
            }
        });
    }

    /// Saves and waits for the result.
    pub async fn save_now(&self) -> Result<(), DomainError> {
        let _guard = self.gate.lock().await;
        let store = Arc::clone(&self.store);

        tokio::task::spawn_blocking(move || store.save())
            .await
            .map_err(|e| DomainError::IoError(format!("Save task failed: {}", e)))?
    }

    fn report(&self, error: DomainError) {
        if error.is_fatal() {
            error!(error = %error, "Store snapshot could not be written");
            if self.fatal_tx.send(error).is_err() {
                debug!("Fatal persistence channel closed");
            }
        } else {
            warn!(error = %error, "Store save skipped");
        }
    }
}
