pub mod codec;
pub mod engine;
pub mod store;
pub mod tracker;

pub use codec::{canonical_bytes, render_record, same_record, to_resource, RecordTypeMapper};
pub use engine::{QueryEngine, MAX_PACKET_LEN};
pub use store::{LookupKey, RecordStore, SnapshotPersister, StoreEntry};
pub use tracker::{CorrelationKey, PendingQueryTracker};
