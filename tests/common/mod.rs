//! Shared fixtures for integration tests: sample payloads, a fetcher bound to
//! a temp directory, and mock routes on a local `wiremock` server.

#![allow(dead_code)]

pub mod raw_server;

use imgloader::prelude::*;
use reqwest::Client;
use std::path::Path;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const JPEG: &[u8] = &[
    0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00, 0x01, 0x01, 0x00, 0x00, 0x01,
    0x00, 0x01, 0x00, 0x00, 0xFF, 0xD9,
];

pub const PNG: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR\x00\x00\x00\x01\x00\x00\x00\x01\x08\x06\x00\x00\x00\x1f\x15\xc4\x89\x00\x00\x00\x00IEND\xaeB`\x82";

pub const GIF: &[u8] = b"GIF89a\x01\x00\x01\x00\x80\x00\x00\x00\x00\x00\xff\xff\xff!\xf9\x04\x01\x00\x00\x00\x00,\x00\x00\x00\x00\x01\x00\x01\x00\x00\x02\x02D\x01\x00;";

pub const HTML: &[u8] = b"<!DOCTYPE html><html><head><title>Wikipedia</title></head><body></body></html>";

/// Fetcher writing into `dir`, with proxies disabled so requests reach the mock server.
pub fn fetcher(dir: &Path) -> BatchImageFetcher {
    fetcher_with(FetcherConfig::default().with_output_dir(dir))
}

pub fn fetcher_with(config: FetcherConfig) -> BatchImageFetcher {
    let client = Client::builder()
        .no_proxy()
        .user_agent(config.user_agent.as_str())
        .build()
        .unwrap();
    BatchImageFetcher::with_client(client, config)
}

/// Serve `body` with status 200 at `route`.
pub async fn serve(server: &MockServer, route: &str, body: &[u8]) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.to_vec()))
        .mount(server)
        .await;
}

/// Answer `route` with a bare `status`.
pub async fn fail(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// URL on a local port that nothing listens on.
///
/// The port is released before use, so another process could bind it in
/// between; in that unlikely case the request is answered instead of refused.
pub fn unreachable_url(file_name: &str) -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/{file_name}")
}

pub fn file_count(dir: &Path) -> usize {
    std::fs::read_dir(dir).unwrap().count()
}
