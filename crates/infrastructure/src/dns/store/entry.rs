use hickory_proto::rr::Record;

/// One cache slot: the records sharing a lookup key, the entry TTL and the
/// Unix second it was created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreEntry {
    pub records: Vec<Record>,
    pub ttl: u32,
    pub created: u64,
}

impl StoreEntry {
    pub fn new(records: Vec<Record>, ttl: u32, created: u64) -> Self {
        Self {
            records,
            ttl,
            created,
        }
    }

    /// Entry TTL comes from the first record; an empty set never expires.
    pub fn from_records(records: Vec<Record>, created: u64) -> Self {
        let ttl = records.first().map(|r| r.ttl()).unwrap_or(0);
        Self::new(records, ttl, created)
    }

    /// A TTL of 0 or 1 marks the entry as permanent.
    #[inline]
    pub fn is_expired(&self, now: u64) -> bool {
        self.ttl > 1 && self.created.saturating_add(u64::from(self.ttl)) < now
    }
}
