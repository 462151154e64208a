// src/models.rs

use crate::downloader::DownloadError;
use crate::sniff::ImageFormat;
use serde::Serialize;
use std::path::PathBuf;

/// How a single URL of a batch ended.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    Success,
    SkippedOversize,
    SkippedInvalidUrl,
    SkippedHttpError,
    SkippedNetworkError,
    SkippedIoError,
    SkippedInvalidFormat,
}

/// A payload that was written, sniffed as an image and kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    pub path: PathBuf,
    pub format: ImageFormat,
    pub size: u64,
    pub sha256: String,
}

/// Result of processing one URL.
#[derive(Debug)]
pub struct ItemReport {
    pub url: String,
    /// Name derived from the last path segment of `url`.
    pub file_name: String,
    pub result: Result<StoredImage, DownloadError>,
}

impl ItemReport {
    pub fn outcome(&self) -> Outcome {
        match &self.result {
            Ok(_) => Outcome::Success,
            Err(e) => e.outcome(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Per-item reports of one batch, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub items: Vec<ItemReport>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn success_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_success()).count()
    }

    /// Images kept on disk by this batch.
    pub fn stored(&self) -> impl Iterator<Item = &StoredImage> {
        self.items.iter().filter_map(|item| item.result.as_ref().ok())
    }
}
