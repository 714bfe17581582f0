use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where recordings live on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one sub-directory per recording.
    pub recordings_dir: PathBuf,
}
