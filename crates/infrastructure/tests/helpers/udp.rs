use bramble_dns_infrastructure::dns::{
    PendingQueryTracker, QueryEngine, RecordStore, SnapshotPersister,
};
use bramble_dns_domain::DomainError;
use hickory_proto::op::Message;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::net::UdpSocket;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

const RECV_TIMEOUT: Duration = Duration::from_secs(2);
const SILENCE_WINDOW: Duration = Duration::from_millis(300);

pub async fn loopback_socket() -> UdpSocket {
    UdpSocket::bind("127.0.0.1:0").await.unwrap()
}

/// Waits for one datagram and returns its raw bytes.
pub async fn recv_raw(socket: &UdpSocket) -> (Vec<u8>, SocketAddr) {
    let mut buf = vec![0u8; 4096];
    let (len, from) = tokio::time::timeout(RECV_TIMEOUT, socket.recv_from(&mut buf))
        .await
        .expect("timed out waiting for datagram")
        .unwrap();
    buf.truncate(len);
    (buf, from)
}

/// Waits for one datagram and decodes it.
pub async fn recv_message(socket: &UdpSocket) -> (Message, SocketAddr) {
    let (bytes, from) = recv_raw(socket).await;
    (Message::from_vec(&bytes).unwrap(), from)
}

/// True when nothing arrives within a short window.
pub async fn stays_silent(socket: &UdpSocket) -> bool {
    let mut buf = vec![0u8; 4096];
    tokio::time::timeout(SILENCE_WINDOW, socket.recv_from(&mut buf))
        .await
        .is_err()
}

/// Polls `check` until it holds or two seconds pass.
pub async fn eventually(mut check: impl FnMut() -> bool) -> bool {
    for _ in 0..100 {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    check()
}

/// A running engine on loopback with mock forwarders.
pub struct EngineHarness {
    pub addr: SocketAddr,
    pub store: Arc<RecordStore>,
    pub tracker: Arc<PendingQueryTracker>,
    pub persister: SnapshotPersister,
    pub forwarders: Vec<UdpSocket>,
    pub fatal_rx: mpsc::UnboundedReceiver<DomainError>,
    pub dir: TempDir,
    handle: JoinHandle<()>,
}

impl EngineHarness {
    pub async fn start(forwarder_count: usize) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(RecordStore::new(dir.path()));
        Self::start_with_store(forwarder_count, store, dir).await
    }

    pub async fn start_with_store(
        forwarder_count: usize,
        store: Arc<RecordStore>,
        dir: TempDir,
    ) -> Self {
        let tracker = Arc::new(PendingQueryTracker::new());
        let (persister, fatal_rx) = SnapshotPersister::new(store.clone());

        let mut forwarders = Vec::with_capacity(forwarder_count);
        for _ in 0..forwarder_count {
            forwarders.push(loopback_socket().await);
        }
        let forwarder_addrs = forwarders
            .iter()
            .map(|s| s.local_addr().unwrap())
            .collect();

        let engine = QueryEngine::bind(
            "127.0.0.1:0".parse().unwrap(),
            store.clone(),
            tracker.clone(),
            persister.clone(),
            forwarder_addrs,
        )
        .await
        .unwrap();
        let addr = engine.local_addr().unwrap();
        let handle = tokio::spawn(Arc::new(engine).run());

        Self {
            addr,
            store,
            tracker,
            persister,
            forwarders,
            fatal_rx,
            dir,
            handle,
        }
    }
}

impl Drop for EngineHarness {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
