use bramble_dns_domain::{
    dns_record::{MxPayload, SrvPayload},
    validate_domain_name, DomainError, RecordPayload, RecordType, SoaPayload,
};
use hickory_proto::rr::rdata::{A, AAAA, CNAME, MX, NS, PTR, SOA, SRV};
use hickory_proto::rr::{Name, RData, Record};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Builds a class-IN resource record from a management request.
///
/// The owner name is checked before anything else, so a bad owner is
/// reported even when the type or body are also wrong.
pub fn to_resource(
    owner: &str,
    ttl: u32,
    type_tag: &str,
    payload: &RecordPayload,
) -> Result<Record, DomainError> {
    let name = parse_owner(owner)?;
    let record_type = RecordType::from_str(type_tag)?;

    let rdata = match record_type {
        RecordType::A => {
            let raw = expect_text(payload, record_type)?;
            let ip = raw.trim().parse::<Ipv4Addr>().map_err(|_| {
                DomainError::InvalidIpAddress(format!("'{}' is not an IPv4 address", raw))
            })?;
            RData::A(A(ip))
        }
        RecordType::AAAA => {
            let raw = expect_text(payload, record_type)?;
            let ip = raw.trim().parse::<Ipv6Addr>().map_err(|_| {
                DomainError::InvalidIpAddress(format!("'{}' is not an IPv6 address", raw))
            })?;
            RData::AAAA(AAAA(ip))
        }
        RecordType::NS => RData::NS(NS(parse_target(expect_text(payload, record_type)?)?)),
        RecordType::CNAME => {
            RData::CNAME(CNAME(parse_target(expect_text(payload, record_type)?)?))
        }
        RecordType::PTR => RData::PTR(PTR(parse_target(expect_text(payload, record_type)?)?)),
        RecordType::SOA => RData::SOA(build_soa(expect_soa(payload)?)?),
        RecordType::MX => {
            let mx = expect_mx(payload)?;
            RData::MX(MX::new(mx.preference, parse_target(&mx.exchange)?))
        }
        RecordType::SRV => {
            let srv = expect_srv(payload)?;
            RData::SRV(SRV::new(
                srv.priority,
                srv.weight,
                srv.port,
                parse_target(&srv.target)?,
            ))
        }
    };

    Ok(Record::from_rdata(name, ttl, rdata))
}

/// Parses an owner name into its fully qualified form.
pub fn parse_owner(raw: &str) -> Result<Name, DomainError> {
    validate_domain_name(raw)?;
    to_fqdn(raw)
}

/// Like [`parse_owner`] but also accepts the root (`.`), which is a valid
/// MX exchange or SRV target.
fn parse_target(raw: &str) -> Result<Name, DomainError> {
    let raw = raw.trim();
    if raw == "." {
        return Ok(Name::root());
    }
    parse_owner(raw)
}

fn to_fqdn(raw: &str) -> Result<Name, DomainError> {
    let fqdn = if raw.ends_with('.') {
        raw.to_string()
    } else {
        format!("{}.", raw)
    };
    Name::from_str(&fqdn)
        .map_err(|e| DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", raw, e)))
}

fn build_soa(soa: &SoaPayload) -> Result<SOA, DomainError> {
    let mname = parse_target(&soa.ns)?;
    let rname = parse_target(&soa.mbox)?;

    Ok(SOA::new(
        mname,
        rname,
        soa.serial,
        signed_interval("refresh", soa.refresh)?,
        signed_interval("retry", soa.retry)?,
        signed_interval("expire", soa.expire)?,
        soa.min_ttl,
    ))
}

/// SOA timers are signed 32-bit on the wire.
fn signed_interval(field: &str, value: u32) -> Result<i32, DomainError> {
    i32::try_from(value).map_err(|_| {
        DomainError::InvalidPayload(format!("SOA {} {} is out of range", field, value))
    })
}

fn expect_text(payload: &RecordPayload, record_type: RecordType) -> Result<&str, DomainError> {
    match payload {
        RecordPayload::Text(text) => Ok(text),
        other => Err(mismatch(record_type, other)),
    }
}

fn expect_soa(payload: &RecordPayload) -> Result<&SoaPayload, DomainError> {
    match payload {
        RecordPayload::Soa(soa) => Ok(soa),
        other => Err(mismatch(RecordType::SOA, other)),
    }
}

fn expect_mx(payload: &RecordPayload) -> Result<&MxPayload, DomainError> {
    match payload {
        RecordPayload::Mx(mx) => Ok(mx),
        other => Err(mismatch(RecordType::MX, other)),
    }
}

fn expect_srv(payload: &RecordPayload) -> Result<&SrvPayload, DomainError> {
    match payload {
        RecordPayload::Srv(srv) => Ok(srv),
        other => Err(mismatch(RecordType::SRV, other)),
    }
}

fn mismatch(record_type: RecordType, payload: &RecordPayload) -> DomainError {
    DomainError::InvalidPayload(format!(
        "{} record cannot take {} data",
        record_type,
        payload.kind()
    ))
}
