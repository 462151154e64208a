//! Minimal HTTP/1.1 server that replays a fixed byte response.
//!
//! Used where wiremock cannot shape the wire format: chunked bodies without
//! `Content-Length`, or a declared length the server never delivers.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Starts a server in a background thread that answers every request with
/// `response`, then keeps the connection open for `hold_open` before closing.
/// Returns the base URL (e.g. "http://127.0.0.1:12345").
pub fn start(response: Vec<u8>, hold_open: Duration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let response = Arc::new(response);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let response = Arc::clone(&response);
            thread::spawn(move || handle(stream, &response, hold_open));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: std::net::TcpStream, response: &[u8], hold_open: Duration) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(_) => {}
    }
    if stream.write_all(response).is_err() {
        return;
    }
    let _ = stream.flush();
    thread::sleep(hold_open);
}

/// A 200 response with `body` sent in 64-byte chunks and no `Content-Length`.
pub fn chunked(body: &[u8]) -> Vec<u8> {
    let mut out =
        b"HTTP/1.1 200 OK\r\nTransfer-Encoding: chunked\r\nConnection: close\r\n\r\n".to_vec();
    for chunk in body.chunks(64) {
        out.extend_from_slice(format!("{:x}\r\n", chunk.len()).as_bytes());
        out.extend_from_slice(chunk);
        out.extend_from_slice(b"\r\n");
    }
    out.extend_from_slice(b"0\r\n\r\n");
    out
}

/// A 200 response announcing `declared` bytes but carrying only `prefix`.
pub fn truncated(declared: u64, prefix: &[u8]) -> Vec<u8> {
    let mut out = format!("HTTP/1.1 200 OK\r\nContent-Length: {}\r\n\r\n", declared).into_bytes();
    out.extend_from_slice(prefix);
    out
}
