use rustc_hash::FxHashMap;
use std::net::SocketAddr;
use std::sync::RwLock;

/// Transaction id of a forwarded query.
pub type CorrelationKey = u16;

/// Clients waiting on forwarded queries, keyed by transaction id.
///
/// Entries have no expiry: if no forwarder ever answers, the entry stays
/// until restart.
#[derive(Default)]
pub struct PendingQueryTracker {
    pending: RwLock<FxHashMap<CorrelationKey, Vec<SocketAddr>>>,
}

impl PendingQueryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: CorrelationKey) -> Option<Vec<SocketAddr>> {
        self.pending
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&key)
            .cloned()
    }

    pub fn set(&self, key: CorrelationKey, addr: SocketAddr) {
        self.pending
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .entry(key)
            .or_default()
            .push(addr);
    }

    pub fn remove(&self, key: CorrelationKey) -> bool {
        self.take(key).is_some()
    }

    /// Removes and returns the waiters in one step, so only one caller can
    /// ever claim a given entry.
    pub fn take(&self, key: CorrelationKey) -> Option<Vec<SocketAddr>> {
        self.pending
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&key)
    }

    pub fn len(&self) -> usize {
        self.pending.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
