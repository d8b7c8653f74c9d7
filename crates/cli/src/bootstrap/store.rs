use bramble_dns_domain::config::StoreConfig;
use bramble_dns_infrastructure::dns::RecordStore;
use std::sync::Arc;
use tracing::{error, info};

/// Creates the read-write directory if needed and loads the last snapshot.
pub fn init_store(cfg: &StoreConfig) -> anyhow::Result<Arc<RecordStore>> {
    std::fs::create_dir_all(&cfg.rw_dir).map_err(|e| {
        error!(path = %cfg.rw_dir.display(), error = %e, "Failed to create store directory");
        anyhow::anyhow!("cannot create {}: {}", cfg.rw_dir.display(), e)
    })?;

    let store = RecordStore::new(&cfg.rw_dir);
    store.load().map_err(|e| {
        error!(path = %store.primary_path().display(), error = %e, "Failed to load store");
        anyhow::anyhow!(e)
    })?;

    info!(
        rw_dir = %cfg.rw_dir.display(),
        entries = store.len(),
        "Record store ready"
    );

    Ok(Arc::new(store))
}
