use bramble_dns_domain::DomainError;
use hickory_proto::rr::rdata::{CNAME, MX, NS, PTR, SOA, SRV};
use hickory_proto::rr::{RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};

/// Wire encoding of a record with its TTL zeroed and every name lower-cased
/// and uncompressed.
///
/// Two records with the same owner, type, class and body always produce the
/// same bytes, whatever their TTL or letter case.
pub fn canonical_bytes(record: &Record) -> Result<Vec<u8>, DomainError> {
    let mut normalized = Record::from_rdata(
        record.name().to_lowercase(),
        0,
        lowercase_rdata(record.data()),
    );
    normalized.set_dns_class(record.dns_class());

    let mut buf = Vec::with_capacity(64);
    let mut encoder = BinEncoder::new(&mut buf);
    encoder.set_canonical_form(true);

    normalized.emit(&mut encoder).map_err(|e| {
        DomainError::InvalidPayload(format!("Failed to encode record: {}", e))
    })?;

    Ok(buf)
}

/// Record identity used when matching an "old" record for replacement or removal.
pub fn same_record(a: &Record, b: &Record) -> bool {
    match (canonical_bytes(a), canonical_bytes(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn lowercase_rdata(rdata: &RData) -> RData {
    match rdata {
        RData::NS(ns) => RData::NS(NS(ns.0.to_lowercase())),
        RData::CNAME(cname) => RData::CNAME(CNAME(cname.0.to_lowercase())),
        RData::PTR(ptr) => RData::PTR(PTR(ptr.0.to_lowercase())),
        RData::MX(mx) => RData::MX(MX::new(mx.preference(), mx.exchange().to_lowercase())),
        RData::SRV(srv) => RData::SRV(SRV::new(
            srv.priority(),
            srv.weight(),
            srv.port(),
            srv.target().to_lowercase(),
        )),
        RData::SOA(soa) => RData::SOA(SOA::new(
            soa.mname().to_lowercase(),
            soa.rname().to_lowercase(),
            soa.serial(),
            soa.refresh(),
            soa.retry(),
            soa.expire(),
            soa.minimum(),
        )),
        other => other.clone(),
    }
}
