use bramble_dns_domain::RecordView;
use hickory_proto::rr::{Name, RData, Record};

/// Presentation form of a name without the trailing dot. The root stays `.`.
pub fn render_name(name: &Name) -> String {
    let ascii = name.to_ascii();
    match ascii.trim_end_matches('.') {
        "" => ".".to_string(),
        trimmed => trimmed.to_string(),
    }
}

/// Type-specific body rendered the way the management API accepts it back.
pub fn render_data(rdata: &RData) -> String {
    match rdata {
        RData::A(a) => a.0.to_string(),
        RData::AAAA(aaaa) => aaaa.0.to_string(),
        RData::NS(ns) => render_name(&ns.0),
        RData::CNAME(cname) => render_name(&cname.0),
        RData::PTR(ptr) => render_name(&ptr.0),
        RData::SOA(soa) => format!(
            "{} {} {} {} {} {} {}",
            render_name(soa.mname()),
            render_name(soa.rname()),
            soa.serial(),
            soa.refresh(),
            soa.retry(),
            soa.expire(),
            soa.minimum()
        ),
        RData::MX(mx) => format!("{} {}", mx.preference(), render_name(mx.exchange())),
        RData::SRV(srv) => format!(
            "{} {} {} {}",
            srv.priority(),
            srv.weight(),
            srv.port(),
            render_name(srv.target())
        ),
        other => other.to_string(),
    }
}

pub fn render_record(record: &Record) -> RecordView {
    RecordView {
        host: render_name(record.name()),
        ttl: record.ttl(),
        record_type: record.record_type().to_string(),
        data: render_data(record.data()),
    }
}
