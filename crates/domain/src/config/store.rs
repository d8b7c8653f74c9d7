use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the record snapshot and its backup live.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    #[serde(default = "default_rw_dir")]
    pub rw_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            rw_dir: default_rw_dir(),
        }
    }
}

fn default_rw_dir() -> PathBuf {
    PathBuf::from("/var/dns")
}
