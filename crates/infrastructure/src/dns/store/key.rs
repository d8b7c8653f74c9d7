use compact_str::CompactString;
use hickory_proto::op::Query;
use hickory_proto::rr::{Name, Record, RecordType};
use std::fmt;

/// Index of a store entry: lower-cased fully qualified owner name plus type.
///
/// Every record with the same owner and type lands in the same entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LookupKey {
    pub name: CompactString,
    pub record_type: RecordType,
}

impl LookupKey {
    pub fn new(name: &Name, record_type: RecordType) -> Self {
        Self::from_parts(&name.to_ascii(), record_type)
    }

    /// Builds a key from an already rendered name, as read back from a snapshot.
    pub fn from_parts(name: &str, record_type: RecordType) -> Self {
        let mut normalized = CompactString::from(name.to_ascii_lowercase());
        if !normalized.ends_with('.') {
            normalized.push('.');
        }
        Self {
            name: normalized,
            record_type,
        }
    }

    #[inline]
    pub fn from_record(record: &Record) -> Self {
        Self::new(record.name(), record.record_type())
    }

    #[inline]
    pub fn from_query(query: &Query) -> Self {
        Self::new(query.name(), query.query_type())
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.record_type)
    }
}
