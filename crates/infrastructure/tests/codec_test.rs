use bramble_dns_domain::{
    dns_record::{MxPayload, SrvPayload},
    DomainError, RecordPayload, SoaPayload,
};
use bramble_dns_infrastructure::dns::codec::{
    canonical_bytes, render_data, render_record, same_record, to_resource,
};
use hickory_proto::rr::{DNSClass, RData, RecordType};
use std::net::{Ipv4Addr, Ipv6Addr};

fn soa_payload() -> SoaPayload {
    SoaPayload {
        ns: "ns1.a.test".to_string(),
        mbox: "hostmaster.a.test".to_string(),
        serial: 2024010101,
        refresh: 3600,
        retry: 900,
        expire: 604800,
        min_ttl: 60,
    }
}

// ── construction ─────────────────────────────────────────────────────────────

#[test]
fn test_a_record() {
    let record = to_resource("a.test", 300, "A", &"10.0.0.1".into()).unwrap();

    assert_eq!(record.name().to_ascii(), "a.test.");
    assert_eq!(record.ttl(), 300);
    assert_eq!(record.record_type(), RecordType::A);
    assert_eq!(record.dns_class(), DNSClass::IN);
    match record.data() {
        RData::A(a) => assert_eq!(a.0, Ipv4Addr::new(10, 0, 0, 1)),
        other => panic!("unexpected rdata {:?}", other),
    }
}

#[test]
fn test_aaaa_record() {
    let record = to_resource("v6.a.test.", 60, "AAAA", &"2001:db8::1".into()).unwrap();

    match record.data() {
        RData::AAAA(aaaa) => assert_eq!(aaaa.0, "2001:db8::1".parse::<Ipv6Addr>().unwrap()),
        other => panic!("unexpected rdata {:?}", other),
    }
}

#[test]
fn test_type_tag_is_case_insensitive() {
    let record = to_resource("a.test", 300, "cname", &"b.test".into()).unwrap();
    assert_eq!(record.record_type(), RecordType::CNAME);
}

#[test]
fn test_name_target_records() {
    for (tag, expected) in [
        ("NS", RecordType::NS),
        ("CNAME", RecordType::CNAME),
        ("PTR", RecordType::PTR),
    ] {
        let record = to_resource("a.test", 300, tag, &"target.a.test".into()).unwrap();
        assert_eq!(record.record_type(), expected);
        assert_eq!(render_data(record.data()), "target.a.test");
    }
}

#[test]
fn test_soa_record() {
    let record = to_resource("a.test", 3600, "SOA", &RecordPayload::Soa(soa_payload())).unwrap();

    match record.data() {
        RData::SOA(soa) => {
            assert_eq!(soa.mname().to_ascii(), "ns1.a.test.");
            assert_eq!(soa.rname().to_ascii(), "hostmaster.a.test.");
            assert_eq!(soa.serial(), 2024010101);
            assert_eq!(soa.refresh(), 3600);
            assert_eq!(soa.retry(), 900);
            assert_eq!(soa.expire(), 604800);
            assert_eq!(soa.minimum(), 60);
        }
        other => panic!("unexpected rdata {:?}", other),
    }
}

#[test]
fn test_mx_and_srv_records() {
    let mx = to_resource(
        "a.test",
        300,
        "MX",
        &RecordPayload::Mx(MxPayload {
            preference: 10,
            exchange: "mail.a.test".to_string(),
        }),
    )
    .unwrap();
    assert_eq!(render_data(mx.data()), "10 mail.a.test");

    let srv = to_resource(
        "_sip._udp.a.test",
        300,
        "SRV",
        &RecordPayload::Srv(SrvPayload {
            priority: 1,
            weight: 5,
            port: 5060,
            target: "sip.a.test".to_string(),
        }),
    )
    .unwrap();
    assert_eq!(render_data(srv.data()), "1 5 5060 sip.a.test");
}

#[test]
fn test_srv_root_target() {
    let srv = to_resource(
        "_ldap._tcp.a.test",
        300,
        "SRV",
        &RecordPayload::Srv(SrvPayload {
            priority: 0,
            weight: 0,
            port: 0,
            target: ".".to_string(),
        }),
    )
    .unwrap();
    assert_eq!(render_data(srv.data()), "0 0 0 .");
}

// ── rejections ───────────────────────────────────────────────────────────────

#[test]
fn test_txt_is_unsupported() {
    for data in ["hello", "v=spf1 -all", ""] {
        let err = to_resource("a.test", 300, "TXT", &data.into()).unwrap_err();
        assert!(matches!(err, DomainError::UnsupportedRecordType(_)));
    }
}

#[test]
fn test_opt_and_unknown_are_unsupported() {
    for tag in ["OPT", "CAA", "bogus"] {
        let err = to_resource("a.test", 300, tag, &"x".into()).unwrap_err();
        assert!(matches!(err, DomainError::UnsupportedRecordType(_)), "{}", tag);
    }
}

#[test]
fn test_invalid_ipv4() {
    let err = to_resource("a.test", 300, "A", &"not-an-ip".into()).unwrap_err();
    assert!(matches!(err, DomainError::InvalidIpAddress(_)));

    let err = to_resource("a.test", 300, "A", &"::1".into()).unwrap_err();
    assert!(matches!(err, DomainError::InvalidIpAddress(_)));
}

#[test]
fn test_invalid_ipv6() {
    let err = to_resource("a.test", 300, "AAAA", &"10.0.0.1".into()).unwrap_err();
    assert!(matches!(err, DomainError::InvalidIpAddress(_)));
}

#[test]
fn test_bad_owner_name() {
    let err = to_resource("not a name?%", 300, "A", &"1.2.3.4".into()).unwrap_err();
    assert!(matches!(err, DomainError::InvalidDomainName(_)));
}

#[test]
fn test_owner_checked_before_type() {
    let err = to_resource("not a name?%", 300, "TXT", &"x".into()).unwrap_err();
    assert!(matches!(err, DomainError::InvalidDomainName(_)));
}

#[test]
fn test_bad_target_name() {
    let err = to_resource("a.test", 300, "CNAME", &"bad name!".into()).unwrap_err();
    assert!(matches!(err, DomainError::InvalidDomainName(_)));

    let mut soa = soa_payload();
    soa.mbox = "bad mbox".to_string();
    let err = to_resource("a.test", 300, "SOA", &RecordPayload::Soa(soa)).unwrap_err();
    assert!(matches!(err, DomainError::InvalidDomainName(_)));
}

#[test]
fn test_payload_shape_mismatch() {
    let err = to_resource("a.test", 300, "MX", &"mail.a.test".into()).unwrap_err();
    assert!(matches!(err, DomainError::InvalidPayload(_)));

    let err = to_resource("a.test", 300, "A", &RecordPayload::Soa(soa_payload())).unwrap_err();
    assert!(matches!(err, DomainError::InvalidPayload(_)));
}

#[test]
fn test_soa_interval_out_of_range() {
    let mut soa = soa_payload();
    soa.expire = u32::MAX;
    let err = to_resource("a.test", 300, "SOA", &RecordPayload::Soa(soa)).unwrap_err();
    assert!(matches!(err, DomainError::InvalidPayload(_)));
}

// ── identity ─────────────────────────────────────────────────────────────────

#[test]
fn test_canonical_bytes_ignore_ttl_and_case() {
    let a = to_resource("A.Test", 300, "A", &"10.0.0.1".into()).unwrap();
    let b = to_resource("a.test.", 0, "A", &"10.0.0.1".into()).unwrap();

    assert_eq!(canonical_bytes(&a).unwrap(), canonical_bytes(&b).unwrap());
    assert!(same_record(&a, &b));
}

#[test]
fn test_canonical_bytes_differ_by_body() {
    let a = to_resource("a.test", 300, "A", &"10.0.0.1".into()).unwrap();
    let b = to_resource("a.test", 300, "A", &"10.0.0.2".into()).unwrap();

    assert!(!same_record(&a, &b));
}

#[test]
fn test_canonical_bytes_cover_target_names() {
    let a = to_resource("a.test", 300, "CNAME", &"B.test".into()).unwrap();
    let b = to_resource("a.test", 60, "CNAME", &"b.TEST".into()).unwrap();
    let c = to_resource("a.test", 60, "CNAME", &"c.test".into()).unwrap();

    assert!(same_record(&a, &b));
    assert!(!same_record(&a, &c));
}

// ── rendering ────────────────────────────────────────────────────────────────

#[test]
fn test_render_record_view() {
    let record = to_resource("a.test", 300, "A", &"10.0.0.1".into()).unwrap();
    let view = render_record(&record);

    assert_eq!(view.host, "a.test");
    assert_eq!(view.ttl, 300);
    assert_eq!(view.record_type, "A");
    assert_eq!(view.data, "10.0.0.1");
}

#[test]
fn test_render_soa() {
    let record = to_resource("a.test", 3600, "SOA", &RecordPayload::Soa(soa_payload())).unwrap();
    assert_eq!(
        render_record(&record).data,
        "ns1.a.test hostmaster.a.test 2024010101 3600 900 604800 60"
    );
}
