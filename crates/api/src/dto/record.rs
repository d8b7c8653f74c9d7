use bramble_dns_domain::{RecordPayload, RecordRequest};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateRecordRequest {
    pub host: String,
    pub ttl: u32,
    #[serde(rename = "type")]
    pub record_type: String,
    pub data: RecordPayload,
}

impl From<CreateRecordRequest> for RecordRequest {
    fn from(req: CreateRecordRequest) -> Self {
        RecordRequest::new(req.host, req.ttl, req.record_type, req.data)
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateRecordRequest {
    pub host: String,
    pub ttl: u32,
    #[serde(rename = "type")]
    pub record_type: String,
    pub old_data: RecordPayload,
    pub data: RecordPayload,
}

impl UpdateRecordRequest {
    pub fn into_parts(self) -> (RecordRequest, RecordPayload) {
        let request = RecordRequest::new(self.host, self.ttl, self.record_type, self.data);
        (request, self.old_data)
    }
}

/// Without `data` the whole name/type entry is deleted.
#[derive(Debug, Deserialize)]
pub struct DeleteRecordRequest {
    pub host: String,
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(default)]
    pub data: Option<RecordPayload>,
}

/// Echo of an accepted create or update.
#[derive(Debug, Serialize)]
pub struct RecordResponse {
    pub host: String,
    pub ttl: u32,
    #[serde(rename = "type")]
    pub record_type: String,
    pub data: RecordPayload,
}

impl From<RecordRequest> for RecordResponse {
    fn from(req: RecordRequest) -> Self {
        Self {
            host: req.host,
            ttl: req.ttl,
            record_type: req.record_type.to_ascii_uppercase(),
            data: req.data,
        }
    }
}
