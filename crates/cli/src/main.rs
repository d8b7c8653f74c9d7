use bramble_dns_api::AppState;
use bramble_dns_domain::CliOverrides;
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "bramble-dns")]
#[command(version)]
#[command(about = "Bramble DNS - caching and forwarding DNS server with a record management API")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Directory holding the store snapshot and its backup
    #[arg(long, value_name = "DIR")]
    rw_dir: Option<PathBuf>,

    /// Upstream forwarder, repeatable (host:port or bare IP)
    #[arg(short = 'f', long = "forwarder", value_name = "ADDR")]
    forwarders: Vec<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        web_port: cli.web_port,
        bind_address: cli.bind.clone(),
        rw_dir: cli.rw_dir.clone(),
        forwarders: (!cli.forwarders.is_empty()).then(|| cli.forwarders.clone()),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Bramble DNS Server v{}", env!("CARGO_PKG_VERSION"));

    let store = bootstrap::init_store(&config.store)?;
    let forwarders = config.dns.forwarder_addrs()?;

    let mut dns_services = di::DnsServices::new(store);
    let repos = di::Repositories::new(&dns_services);
    let app_state = AppState::new(repos.records);

    let dns_addr = config.server.dns_addr()?;
    let web_addr = config.server.web_addr()?;

    info!(forwarders = ?forwarders, "Forwarders configured");
    let dns_handle = server::start_dns_server(dns_addr, &dns_services, forwarders).await?;

    let result = tokio::select! {
        fatal = dns_services.fatal_rx.recv() => match fatal {
            Some(e) => {
                error!(error = %e, "Persistence failed, shutting down");
                Err(anyhow::anyhow!(e))
            }
            None => Ok(()),
        },
        web = server::start_web_server(web_addr, app_state) => web,
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
            Ok(())
        }
    };

    dns_handle.abort();

    if let Err(e) = &result {
        error!(error = %e, "Server stopped with an error");
    } else {
        info!("Server shutdown complete");
    }
    result
}
