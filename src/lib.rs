//! Download images from a list of URLs.
//!
//! Each URL is fetched once, in order. Payloads over the size limit are
//! refused, everything else is written under the name of the URL's last
//! path segment and kept only if its leading bytes identify an image format.
//!
//! [`batch::BatchImageFetcher`] is the entry point: `download_by_url_list`
//! takes URLs directly, `download_by_text_file` reads them from a file first.
//! Both return the number of images kept.

pub mod batch;
pub mod config;
pub mod downloader;
pub mod integrity;
pub mod loader;
pub mod logging;
pub mod models;
pub mod sniff;

/// Convenient type alias exposing common structs.
pub mod prelude {
    pub use crate::batch::{BatchImageFetcher, SetupError};
    pub use crate::config::FetcherConfig;
    pub use crate::downloader::DownloadError;
    pub use crate::loader::UrlListLoader;
    pub use crate::models::{BatchReport, ItemReport, Outcome, StoredImage};
    pub use crate::sniff::ImageFormat;
}
