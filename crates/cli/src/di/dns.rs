use bramble_dns_domain::DomainError;
use bramble_dns_infrastructure::dns::{PendingQueryTracker, RecordStore, SnapshotPersister};
use std::sync::Arc;
use tokio::sync::mpsc;

pub struct DnsServices {
    pub store: Arc<RecordStore>,
    pub tracker: Arc<PendingQueryTracker>,
    pub persister: SnapshotPersister,
    pub fatal_rx: mpsc::UnboundedReceiver<DomainError>,
}

impl DnsServices {
    pub fn new(store: Arc<RecordStore>) -> Self {
        let (persister, fatal_rx) = SnapshotPersister::new(store.clone());
        Self {
            store,
            tracker: Arc::new(PendingQueryTracker::new()),
            persister,
            fatal_rx,
        }
    }
}
