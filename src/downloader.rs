use crate::config::FetcherConfig;
use crate::integrity::sha256_hex;
use crate::models::{Outcome, StoredImage};
use crate::sniff::sniff_file;
use futures_util::StreamExt;
use reqwest::header::{HeaderMap, CONTENT_LENGTH};
use reqwest::{Client, Response, Url};
use std::path::PathBuf;
use thiserror::Error;

/// Reasons a single URL is skipped.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("the given url is not valid")]
    InvalidUrl,
    #[error("the server could not fulfill the request (status {status})")]
    Http { status: u16 },
    #[error("the server could not be reached ({0})")]
    Network(String),
    #[error("cannot write file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("data of {size} bytes exceeds the maximum of {limit} bytes")]
    Oversize { size: u64, limit: u64 },
    #[error("the url does not point to a valid image")]
    InvalidFormat,
}

impl DownloadError {
    pub fn outcome(&self) -> Outcome {
        match self {
            Self::InvalidUrl => Outcome::SkippedInvalidUrl,
            Self::Http { .. } => Outcome::SkippedHttpError,
            Self::Network(_) => Outcome::SkippedNetworkError,
            Self::Io { .. } => Outcome::SkippedIoError,
            Self::Oversize { .. } => Outcome::SkippedOversize,
            Self::InvalidFormat => Outcome::SkippedInvalidFormat,
        }
    }
}

impl From<reqwest::Error> for DownloadError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Self::InvalidUrl
        } else if let Some(status) = err.status() {
            Self::Http { status: status.as_u16() }
        } else {
            Self::Network(error_chain(&err))
        }
    }
}

/// Joins an error and its sources, e.g. "error sending request: connection refused".
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut reason = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        reason.push_str(": ");
        reason.push_str(&inner.to_string());
        source = inner.source();
    }
    reason
}

/// Output file name for `url`: everything after the last `/`.
pub fn file_name_from_url(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

/// Whether `file_name` carries something that looks like an extension.
pub fn has_extension(file_name: &str) -> bool {
    file_name.contains('.')
}

/// Declared body size; absent or unparsable headers count as zero.
fn declared_length(headers: &HeaderMap) -> u64 {
    headers
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(0)
}

/// Fetches, stores and validates one image at a time.
#[derive(Debug)]
pub struct Downloader {
    client: Client,
    config: FetcherConfig,
}

impl Downloader {
    pub fn new(client: Client, config: FetcherConfig) -> Self {
        Self { client, config }
    }

    /// Download `url` into `file_name` under the output directory.
    ///
    /// The file only survives if its content sniffs as an image; a payload
    /// that fails the check is removed before returning.
    pub async fn download(&self, url: &str, file_name: &str) -> Result<StoredImage, DownloadError> {
        let url = Url::parse(url).map_err(|_| DownloadError::InvalidUrl)?;
        let limit = self.config.max_file_size;

        let mut request = self.client.get(url);
        if let Some(timeout) = self.config.timeout {
            request = request.timeout(timeout);
        }
        let resp = request.send().await?.error_for_status()?;

        let declared = declared_length(resp.headers());
        tracing::debug!(declared, limit, "response headers received");
        if declared > limit {
            return Err(DownloadError::Oversize { size: declared, limit });
        }

        let body = self.read_body(resp, declared).await?;

        let path = self.config.output_dir.join(file_name);
        tokio::fs::write(&path, &body)
            .await
            .map_err(|source| DownloadError::Io { path: path.clone(), source })?;

        let format = match sniff_file(&path).await {
            Ok(Some(format)) => format,
            Ok(None) => {
                discard(&path).await;
                return Err(DownloadError::InvalidFormat);
            }
            Err(source) => {
                discard(&path).await;
                return Err(DownloadError::Io { path, source });
            }
        };

        Ok(StoredImage {
            path,
            format,
            size: body.len() as u64,
            sha256: sha256_hex(&body),
        })
    }

    /// Buffer the whole body. Only the declared length is checked against
    /// the limit; a body without one is read to the end.
    async fn read_body(&self, resp: Response, declared: u64) -> Result<Vec<u8>, DownloadError> {
        let mut body = Vec::with_capacity(declared as usize);
        let mut stream = resp.bytes_stream();
        while let Some(chunk) = stream.next().await {
            body.extend_from_slice(&chunk?);
        }
        Ok(body)
    }
}

async fn discard(path: &std::path::Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        tracing::warn!(path = %path.display(), "failed to remove rejected file: {e}");
    }
}
