//! The record store: cached and locally managed records with lazy TTL expiry
//! and snapshot persistence.
pub mod clock;
pub mod entry;
pub mod key;
pub mod persister;
pub mod record_store;
pub mod snapshot;

pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::StoreEntry;
pub use key::LookupKey;
pub use persister::SnapshotPersister;
pub use record_store::{RecordStore, BACKUP_FILE, PRIMARY_FILE};
