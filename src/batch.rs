use std::path::Path;

use reqwest::Client;
use thiserror::Error;

use crate::config::FetcherConfig;
use crate::downloader::{file_name_from_url, has_extension, Downloader};
use crate::loader::UrlListLoader;
use crate::models::{BatchReport, ItemReport};

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Downloads a list of image URLs one after another.
///
/// A failing item is reported and skipped; it never stops the batch.
#[derive(Debug)]
pub struct BatchImageFetcher {
    downloader: Downloader,
}

impl BatchImageFetcher {
    pub fn new(config: FetcherConfig) -> Result<Self, SetupError> {
        let client = Client::builder().user_agent(config.user_agent.as_str()).build()?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: Client, config: FetcherConfig) -> Self {
        Self { downloader: Downloader::new(client, config) }
    }

    /// Process every URL in order and return the per-item reports.
    pub async fn fetch_all<I, S>(&self, urls: I) -> BatchReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        println!("Downloading files...");
        let mut report = BatchReport::default();
        for url in urls {
            let item = self.fetch_one(url.as_ref()).await;
            report.items.push(item);
        }
        println!("completed ({}/{}).", report.success_count(), report.total());
        tracing::info!(
            succeeded = report.success_count(),
            total = report.total(),
            "batch finished"
        );
        report
    }

    /// Number of images stored from `urls`.
    pub async fn download_by_url_list<I, S>(&self, urls: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.fetch_all(urls).await.success_count()
    }

    /// Load the URL list at `path` and download it.
    pub async fn download_by_text_file(&self, path: impl AsRef<Path>) -> usize {
        let urls = UrlListLoader::load(path).await;
        if urls.is_empty() {
            println!("Nothing to do");
            return 0;
        }
        self.download_by_url_list(&urls).await
    }

    async fn fetch_one(&self, url: &str) -> ItemReport {
        println!("...{}...", url);
        let file_name = file_name_from_url(url);
        if !has_extension(file_name) {
            println!("  (Warning: No file extension detected)");
            tracing::warn!(url, file_name, "no file extension detected");
        }

        let result = self.downloader.download(url, file_name).await;
        match &result {
            Ok(image) => {
                println!("  done ({}, {} bytes)", image.format, image.size);
                tracing::info!(
                    url,
                    path = %image.path.display(),
                    format = %image.format,
                    size = image.size,
                    sha256 = %image.sha256,
                    "stored image"
                );
            }
            Err(e) => {
                println!("  failed");
                println!("  Error: {} (skipping)", e);
                tracing::warn!(url, outcome = ?e.outcome(), "skipping: {e}");
            }
        }

        ItemReport {
            url: url.to_string(),
            file_name: file_name.to_string(),
            result,
        }
    }
}
