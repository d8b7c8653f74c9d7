use super::clock::{Clock, SystemClock};
use super::entry::StoreEntry;
use super::key::LookupKey;
use super::snapshot::{self, StoreMap};
use crate::dns::codec::same_record;
use bramble_dns_domain::DomainError;
use hickory_proto::rr::Record;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tracing::{debug, info, warn};

pub const PRIMARY_FILE: &str = "store";
pub const BACKUP_FILE: &str = "store_bk";

/// Concurrent map of lookup key to record set.
///
/// One reader/writer lock covers the whole map. Expired entries are dropped
/// lazily when a read finds them; there is no background sweep.
pub struct RecordStore {
    entries: RwLock<StoreMap>,
    clock: Arc<dyn Clock>,
    rw_dir: PathBuf,
}

impl RecordStore {
    pub fn new(rw_dir: impl Into<PathBuf>) -> Self {
        Self::with_clock(rw_dir, Arc::new(SystemClock))
    }

    pub fn with_clock(rw_dir: impl Into<PathBuf>, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: RwLock::new(StoreMap::default()),
            clock,
            rw_dir: rw_dir.into(),
        }
    }

    pub fn primary_path(&self) -> PathBuf {
        self.rw_dir.join(PRIMARY_FILE)
    }

    pub fn backup_path(&self) -> PathBuf {
        self.rw_dir.join(BACKUP_FILE)
    }

    /// Live records for `key`. An expired entry is evicted and reported missing.
    pub fn get(&self, key: &LookupKey) -> Option<Vec<Record>> {
        let now = self.clock.now_secs();
        {
            let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
            match entries.get(key) {
                None => return None,
                Some(entry) if !entry.is_expired(now) => return Some(entry.records.clone()),
                Some(_) => {}
            }
        }

        self.evict_if_expired(key, now);
        None
    }

    /// Re-checks under the write lock so an entry refreshed in between survives.
    fn evict_if_expired(&self, key: &LookupKey, now: u64) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        if entries.get(key).is_some_and(|entry| entry.is_expired(now)) {
            entries.remove(key);
            debug!(key = %key, "Evicted expired entry");
        }
    }

    /// Appends `record`, or with `old` replaces the first record matching it.
    /// Appending to an expired entry replaces it with a fresh one.
    ///
    /// Replacing never inserts: without a match the entry is left untouched
    /// and `false` is returned.
    pub fn set(&self, key: LookupKey, record: Record, old: Option<&Record>) -> bool {
        let now = self.clock.now_secs();
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());

        match old {
            Some(old) => {
                let Some(entry) = entries.get_mut(&key) else {
                    return false;
                };
                match entry.records.iter().position(|r| same_record(r, old)) {
                    Some(idx) => {
                        entry.records[idx] = record;
                        true
                    }
                    None => false,
                }
            }
            None => {
                // An expired entry nobody has read yet starts over.
                let live = entries.get(&key).is_some_and(|entry| !entry.is_expired(now));
                if live {
                    if let Some(entry) = entries.get_mut(&key) {
                        entry.records.push(record);
                    }
                } else {
                    let ttl = record.ttl();
                    entries.insert(key, StoreEntry::new(vec![record], ttl, now));
                }
                true
            }
        }
    }

    /// Replaces the whole entry with `records` and a fresh creation time.
    pub fn override_entry(&self, key: LookupKey, records: Vec<Record>) {
        let entry = StoreEntry::from_records(records, self.clock.now_secs());
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(key, entry);
    }

    /// Deletes the whole entry, or only the first record matching `record`.
    pub fn remove(&self, key: &LookupKey, record: Option<&Record>) -> bool {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());

        match record {
            None => entries.remove(key).is_some(),
            Some(target) => {
                let Some(entry) = entries.get_mut(key) else {
                    return false;
                };
                match entry.records.iter().position(|r| same_record(r, target)) {
                    Some(idx) => {
                        entry.records.remove(idx);
                        true
                    }
                    None => false,
                }
            }
        }
    }

    /// Point-in-time copy of the whole map, expired entries included.
    pub fn snapshot(&self) -> StoreMap {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copies the current primary snapshot to the backup file, then writes
    /// the in-memory map over the primary.
    ///
    /// Backup failures abort the save with [`DomainError::BackupFailed`] and
    /// leave the primary untouched. Failures after that point return
    /// [`DomainError::PersistenceFailed`]: the primary may be damaged.
    pub fn save(&self) -> Result<(), DomainError> {
        let primary = self.primary_path();
        let backup = self.backup_path();

        backup_primary(&primary, &backup)?;

        let map = self.snapshot();
        let bytes = snapshot::encode(&map)?;
        std::fs::write(&primary, &bytes).map_err(|e| {
            DomainError::PersistenceFailed(format!(
                "Failed to write {}: {}",
                primary.display(),
                e
            ))
        })?;

        debug!(
            path = %primary.display(),
            entries = map.len(),
            bytes = bytes.len(),
            "Store snapshot saved"
        );
        Ok(())
    }

    /// Replaces the in-memory map with the primary snapshot.
    ///
    /// A missing primary file means first start and yields an empty store.
    /// Anything unreadable or undecodable is an error.
    pub fn load(&self) -> Result<(), DomainError> {
        let primary = self.primary_path();

        let bytes = match std::fs::read(&primary) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %primary.display(), "No store snapshot found, starting empty");
                return Ok(());
            }
            Err(e) => {
                return Err(DomainError::IoError(format!(
                    "Failed to read {}: {}",
                    primary.display(),
                    e
                )))
            }
        };

        let map = snapshot::decode(&bytes)?;
        let count = map.len();
        *self.entries.write().unwrap_or_else(|e| e.into_inner()) = map;

        info!(path = %primary.display(), entries = count, "Store snapshot loaded");
        Ok(())
    }
}

fn backup_primary(primary: &Path, backup: &Path) -> Result<(), DomainError> {
    match std::fs::copy(primary, backup) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound && !primary.exists() => {
            debug!(path = %primary.display(), "No primary snapshot to back up yet");
            Ok(())
        }
        Err(e) => {
            warn!(
                primary = %primary.display(),
                backup = %backup.display(),
                error = %e,
                "Store backup failed"
            );
            Err(DomainError::BackupFailed(format!(
                "Failed to copy {} to {}: {}",
                primary.display(),
                backup.display(),
                e
            )))
        }
    }
}
