//! Mapping between `bramble_dns_domain::RecordType` and `hickory_proto::rr::RecordType`

use bramble_dns_domain::RecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

/// Maps domain record types onto their hickory equivalents
pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        HickoryRecordType::from(record_type.to_u16())
    }
}
