use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Largest payload, in bytes, a single image download may have.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10_000_000;

/// Options shared by every item of a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// Declared lengths above this abort the item before the body is read.
    pub max_file_size: u64,
    /// Directory the derived file names are resolved against.
    pub output_dir: PathBuf,
    pub user_agent: String,
    /// Per-request timeout. `None` leaves it to the transport.
    pub timeout: Option<Duration>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            output_dir: PathBuf::from("."),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: None,
        }
    }
}

impl FetcherConfig {
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }
}
