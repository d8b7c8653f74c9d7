use serde::{Deserialize, Serialize};

/// Type-specific body of a record request.
///
/// A/AAAA/NS/CNAME/PTR carry a single string; SOA, MX and SRV carry
/// structured fields. JSON decoding picks the variant from the shape of the
/// value, so `"10.0.0.1"` is `Text` and `{"preference": 10, "exchange": ..}`
/// is `Mx`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordPayload {
    Text(String),
    Soa(SoaPayload),
    Mx(MxPayload),
    Srv(SrvPayload),
}

impl RecordPayload {
    pub fn text(value: impl Into<String>) -> Self {
        RecordPayload::Text(value.into())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            RecordPayload::Text(_) => "text",
            RecordPayload::Soa(_) => "SOA",
            RecordPayload::Mx(_) => "MX",
            RecordPayload::Srv(_) => "SRV",
        }
    }
}

impl From<&str> for RecordPayload {
    fn from(value: &str) -> Self {
        RecordPayload::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoaPayload {
    pub ns: String,
    pub mbox: String,
    pub serial: u32,
    pub refresh: u32,
    pub retry: u32,
    pub expire: u32,
    #[serde(default)]
    pub min_ttl: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MxPayload {
    pub preference: u16,
    pub exchange: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SrvPayload {
    pub priority: u16,
    pub weight: u16,
    pub port: u16,
    pub target: String,
}
