use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{Name, RData, Record, RecordType};
use hickory_proto::serialize::binary::BinEncodable;
use std::net::Ipv4Addr;
use std::str::FromStr;

pub fn name(raw: &str) -> Name {
    Name::from_str(raw).unwrap()
}

pub fn a_record(owner: &str, ttl: u32, ip: [u8; 4]) -> Record {
    Record::from_rdata(
        name(owner),
        ttl,
        RData::A(A(Ipv4Addr::new(ip[0], ip[1], ip[2], ip[3]))),
    )
}

pub fn query_message(id: u16, owner: &str, record_type: RecordType) -> Message {
    let mut message = Message::new(id, MessageType::Query, OpCode::Query);
    message.set_recursion_desired(true);
    message.add_query(Query::query(name(owner), record_type));
    message
}

/// Forwarder-style reply to `query_message(id, owner, record_type)`.
pub fn response_message(
    id: u16,
    owner: &str,
    record_type: RecordType,
    answers: Vec<Record>,
) -> Message {
    let mut message = Message::new(id, MessageType::Response, OpCode::Query);
    message.set_recursion_desired(true);
    message.set_recursion_available(true);
    message.add_query(Query::query(name(owner), record_type));
    message.add_answers(answers);
    message
}

pub fn wire(message: &Message) -> Vec<u8> {
    message.to_bytes().unwrap()
}
