use crate::di::DnsServices;
use bramble_dns_infrastructure::dns::QueryEngine;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

/// Binds the UDP socket and spawns the engine's receive loop.
pub async fn start_dns_server(
    bind_addr: SocketAddr,
    dns: &DnsServices,
    forwarders: Vec<SocketAddr>,
) -> anyhow::Result<JoinHandle<()>> {
    let engine = QueryEngine::bind(
        bind_addr,
        dns.store.clone(),
        dns.tracker.clone(),
        dns.persister.clone(),
        forwarders,
    )
    .await
    .map_err(|e| anyhow::anyhow!("cannot bind DNS socket {}: {}", bind_addr, e))?;

    info!(bind_address = %bind_addr, "DNS server ready");

    Ok(tokio::spawn(Arc::new(engine).run()))
}
