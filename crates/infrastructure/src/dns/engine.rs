//! UDP query/response engine.
//!
//! Every datagram is handled in its own task. Questions are answered from the
//! record store or relayed to every forwarder; forwarder responses are matched
//! back to the waiting clients by transaction id and merged into the store.

use super::store::{LookupKey, RecordStore, SnapshotPersister};
use super::tracker::PendingQueryTracker;
use bramble_dns_domain::DomainError;
use hickory_proto::op::{Message, MessageType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tracing::{debug, info, warn};

/// Largest datagram sent to a client (no EDNS0).
pub const MAX_PACKET_LEN: usize = 512;

/// Receive buffer, large enough that an oversized upstream reply is not cut off.
const RECV_BUFFER_LEN: usize = 4096;

pub struct QueryEngine {
    socket: Arc<UdpSocket>,
    store: Arc<RecordStore>,
    tracker: Arc<PendingQueryTracker>,
    persister: SnapshotPersister,
    forwarders: Arc<[SocketAddr]>,
}

impl QueryEngine {
    pub fn new(
        socket: UdpSocket,
        store: Arc<RecordStore>,
        tracker: Arc<PendingQueryTracker>,
        persister: SnapshotPersister,
        forwarders: Vec<SocketAddr>,
    ) -> Self {
        Self {
            socket: Arc::new(socket),
            store,
            tracker,
            persister,
            forwarders: forwarders.into(),
        }
    }

    pub async fn bind(
        addr: SocketAddr,
        store: Arc<RecordStore>,
        tracker: Arc<PendingQueryTracker>,
        persister: SnapshotPersister,
        forwarders: Vec<SocketAddr>,
    ) -> std::io::Result<Self> {
        let socket = UdpSocket::bind(addr).await?;
        Ok(Self::new(socket, store, tracker, persister, forwarders))
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    /// Receive loop. Runs until the task is dropped or aborted.
    pub async fn run(self: Arc<Self>) {
        if let Ok(addr) = self.local_addr() {
            info!(bind_address = %addr, forwarders = self.forwarders.len(), "DNS engine listening");
        }

        let mut buf = vec![0u8; RECV_BUFFER_LEN];
        loop {
            let (len, from) = match self.socket.recv_from(&mut buf).await {
                Ok(received) => received,
                Err(e) => {
                    warn!(error = %e, "UDP receive failed");
                    continue;
                }
            };

            let packet = buf[..len].to_vec();
            let engine = Arc::clone(&self);
            tokio::spawn(async move {
                engine.handle_datagram(&packet, from).await;
            });
        }
    }

    /// Processes one datagram to completion.
    pub async fn handle_datagram(&self, packet: &[u8], from: SocketAddr) {
        let message = match Message::from_vec(packet) {
            Ok(message) => message,
            Err(e) => {
                debug!(client = %from, error = %e, "Dropping undecodable datagram");
                return;
            }
        };

        if message.message_type() == MessageType::Response {
            self.deliver_response(message, from).await;
        } else if !message.queries().is_empty() {
            self.answer_query(message, from).await;
        } else {
            debug!(client = %from, id = message.id(), "Dropping message without a question");
        }
    }

    async fn answer_query(&self, mut message: Message, from: SocketAddr) {
        let key = LookupKey::from_query(&message.queries()[0]);

        if let Some(records) = self.store.get(&key) {
            debug!(client = %from, key = %key, answers = records.len(), "Cache hit");
            message.add_answers(records);
            let mut header = *message.header();
            header.set_message_type(MessageType::Response);
            header.set_recursion_available(true);
            message.set_header(header);

            match encode_for_client(&message) {
                Ok(bytes) => self.send(&bytes, from).await,
                Err(e) => warn!(key = %key, error = %e, "Failed to encode cached answer"),
            }
            return;
        }

        if self.forwarders.is_empty() {
            debug!(client = %from, key = %key, "Cache miss with no forwarders configured");
            return;
        }

        let bytes = match encode_message(&upstream_query(&message)) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to encode forwarded query");
                return;
            }
        };

        debug!(client = %from, key = %key, id = message.id(), "Cache miss, forwarding");
        self.tracker.set(message.id(), from);
        for forwarder in self.forwarders.iter() {
            self.send(&bytes, *forwarder).await;
        }
    }

    async fn deliver_response(&self, message: Message, from: SocketAddr) {
        let id = message.id();
        let Some(clients) = self.tracker.take(id) else {
            debug!(forwarder = %from, id, "Dropping unsolicited or already answered response");
            return;
        };

        match encode_for_client(&message) {
            Ok(bytes) => {
                for client in &clients {
                    self.send(&bytes, *client).await;
                }
            }
            Err(e) => warn!(id, error = %e, "Failed to encode forwarded response"),
        }

        self.merge_answers(message);
    }

    /// Caches a forwarded answer set under the original question's key.
    /// Empty answer sets are not cached.
    fn merge_answers(&self, message: Message) {
        let Some(query) = message.queries().first() else {
            return;
        };
        let answers = message.answers().to_vec();
        if answers.is_empty() {
            return;
        }

        let key = LookupKey::from_query(query);
        let store = Arc::clone(&self.store);
        let persister = self.persister.clone();
        tokio::spawn(async move {
            debug!(key = %key, answers = answers.len(), "Caching forwarded answer");
            store.override_entry(key, answers);
            persister.request_save();
        });
    }

    async fn send(&self, bytes: &[u8], to: SocketAddr) {
        if let Err(e) = self.socket.send_to(bytes, to).await {
            warn!(peer = %to, error = %e, "UDP send failed");
        }
    }
}

fn encode_message(message: &Message) -> Result<Vec<u8>, DomainError> {
    let mut buf = Vec::with_capacity(MAX_PACKET_LEN);
    let mut encoder = BinEncoder::new(&mut buf);

    message.emit(&mut encoder).map_err(|e| {
        DomainError::InvalidPayload(format!("Failed to serialize DNS message: {}", e))
    })?;

    Ok(buf)
}

/// The client's question re-encoded without an OPT record.
fn upstream_query(message: &Message) -> Message {
    let mut query = Message::new(message.id(), MessageType::Query, message.op_code());
    query.set_recursion_desired(message.recursion_desired());
    for question in message.queries() {
        query.add_query(question.clone());
    }
    query
}

/// Encodes `message` within [`MAX_PACKET_LEN`]. An oversized message keeps
/// its questions and as many whole answers as fit, and gets the TC flag.
fn encode_for_client(message: &Message) -> Result<Vec<u8>, DomainError> {
    let bytes = encode_message(message)?;
    if bytes.len() <= MAX_PACKET_LEN {
        return Ok(bytes);
    }

    let mut header = *message.header();
    header.set_truncated(true);
    let mut truncated = Message::new(message.id(), message.message_type(), message.op_code());
    truncated.set_header(header);
    for question in message.queries() {
        truncated.add_query(question.clone());
    }

    let mut fitted = encode_message(&truncated)?;
    for answer in message.answers() {
        truncated.add_answer(answer.clone());
        let candidate = encode_message(&truncated)?;
        if candidate.len() > MAX_PACKET_LEN {
            break;
        }
        fitted = candidate;
    }

    debug!(
        id = message.id(),
        full = bytes.len(),
        sent = fitted.len(),
        "Truncated response to fit a UDP datagram"
    );
    Ok(fitted)
}
