use super::RecordPayload;
use serde::{Deserialize, Serialize};

/// A record as submitted by a management caller, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRequest {
    pub host: String,
    pub ttl: u32,
    pub record_type: String,
    pub data: RecordPayload,
}

impl RecordRequest {
    pub fn new(
        host: impl Into<String>,
        ttl: u32,
        record_type: impl Into<String>,
        data: impl Into<RecordPayload>,
    ) -> Self {
        Self {
            host: host.into(),
            ttl,
            record_type: record_type.into(),
            data: data.into(),
        }
    }

    /// Same owner, TTL and type with a different body.
    pub fn with_data(&self, data: RecordPayload) -> Self {
        Self {
            data,
            ..self.clone()
        }
    }
}

/// Display form of a stored record, as listed by the management API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordView {
    pub host: String,
    pub ttl: u32,
    #[serde(rename = "type")]
    pub record_type: String,
    pub data: String,
}
