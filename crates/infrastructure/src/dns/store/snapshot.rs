//! Binary snapshot format for the record store.
//!
//! Layout (all integers big-endian):
//!
//! ```text
//! magic "BRDS" | version u16 | entry count u32
//! per entry:  name len u16 | name | type u16 | ttl u32 | created u64 | record count u32
//! per record: len u16 | record in DNS wire format
//! ```
//!
//! Records are stored in their wire form so the file carries full headers and
//! bodies for every type, including forwarded answers the API cannot create.

use super::entry::StoreEntry;
use super::key::LookupKey;
use bramble_dns_domain::DomainError;
use bytes::{Buf, BufMut, BytesMut};
use hickory_proto::rr::{Record, RecordType};
use hickory_proto::serialize::binary::{BinDecodable, BinEncodable};
use rustc_hash::FxHashMap;

const MAGIC: &[u8; 4] = b"BRDS";
const VERSION: u16 = 1;

pub type StoreMap = FxHashMap<LookupKey, StoreEntry>;

pub fn encode(entries: &StoreMap) -> Result<Vec<u8>, DomainError> {
    let mut buf = BytesMut::with_capacity(64 + entries.len() * 64);
    buf.put_slice(MAGIC);
    buf.put_u16(VERSION);
    buf.put_u32(len_u32(entries.len(), "entry count")?);

    for (key, entry) in entries {
        let name = key.name.as_bytes();
        buf.put_u16(len_u16(name.len(), "name")?);
        buf.put_slice(name);
        buf.put_u16(u16::from(key.record_type));
        buf.put_u32(entry.ttl);
        buf.put_u64(entry.created);
        buf.put_u32(len_u32(entry.records.len(), "record count")?);

        for record in &entry.records {
            let wire = record.to_bytes().map_err(|e| {
                DomainError::PersistenceFailed(format!("Failed to encode record for {}: {}", key, e))
            })?;
            buf.put_u16(len_u16(wire.len(), "record")?);
            buf.put_slice(&wire);
        }
    }

    Ok(buf.to_vec())
}

pub fn decode(bytes: &[u8]) -> Result<StoreMap, DomainError> {
    let mut buf = bytes;

    need(&buf, MAGIC.len() + 2 + 4, "header")?;
    let mut magic = [0u8; 4];
    buf.copy_to_slice(&mut magic);
    if &magic != MAGIC {
        return Err(DomainError::SnapshotCorrupt("bad magic".to_string()));
    }
    let version = buf.get_u16();
    if version != VERSION {
        return Err(DomainError::SnapshotCorrupt(format!(
            "unsupported version {}",
            version
        )));
    }

    let entry_count = buf.get_u32() as usize;
    let mut entries = StoreMap::default();

    for _ in 0..entry_count {
        need(&buf, 2, "name length")?;
        let name_len = buf.get_u16() as usize;
        need(&buf, name_len, "name")?;
        let name = std::str::from_utf8(&buf[..name_len])
            .map_err(|_| DomainError::SnapshotCorrupt("name is not UTF-8".to_string()))?
            .to_string();
        buf.advance(name_len);

        need(&buf, 2 + 4 + 8 + 4, "entry header")?;
        let record_type = RecordType::from(buf.get_u16());
        let ttl = buf.get_u32();
        let created = buf.get_u64();
        let record_count = buf.get_u32() as usize;

        let mut records = Vec::with_capacity(record_count.min(64));
        for _ in 0..record_count {
            need(&buf, 2, "record length")?;
            let len = buf.get_u16() as usize;
            need(&buf, len, "record")?;
            let record = Record::from_bytes(&buf[..len]).map_err(|e| {
                DomainError::SnapshotCorrupt(format!("bad record under {}: {}", name, e))
            })?;
            buf.advance(len);
            records.push(record);
        }

        entries.insert(
            LookupKey::from_parts(&name, record_type),
            StoreEntry::new(records, ttl, created),
        );
    }

    if buf.has_remaining() {
        return Err(DomainError::SnapshotCorrupt(format!(
            "{} trailing bytes",
            buf.remaining()
        )));
    }

    Ok(entries)
}

fn need(buf: &&[u8], n: usize, what: &str) -> Result<(), DomainError> {
    if buf.remaining() < n {
        return Err(DomainError::SnapshotCorrupt(format!(
            "truncated while reading {}",
            what
        )));
    }
    Ok(())
}

fn len_u16(len: usize, what: &str) -> Result<u16, DomainError> {
    u16::try_from(len)
        .map_err(|_| DomainError::PersistenceFailed(format!("{} too long: {}", what, len)))
}

fn len_u32(len: usize, what: &str) -> Result<u32, DomainError> {
    u32::try_from(len)
        .map_err(|_| DomainError::PersistenceFailed(format!("{} too large: {}", what, len)))
}
