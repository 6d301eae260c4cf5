//! Minimal one-shot HTTP server for fetch tests.

#![allow(dead_code)]

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// A canned HTTP response.
pub struct StubResponse {
    pub status: &'static str,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl StubResponse {
    pub fn html(body: impl Into<String>) -> Self {
        Self {
            status: "200 OK",
            content_type: "text/html; charset=utf-8",
            body: body.into().into_bytes(),
        }
    }

    pub fn status(mut self, status: &'static str) -> Self {
        self.status = status;
        self
    }

    pub fn content_type(mut self, content_type: &'static str) -> Self {
        self.content_type = content_type;
        self
    }
}

/// Serves `response` to a single connection on a loopback port.
///
/// Returns the URL to request and the server thread, which ends after
/// answering once.
pub fn serve_once(response: StubResponse) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();

        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut line = String::new();
        loop {
            line.clear();
            if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                break;
            }
        }

        let head = format!(
            "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            response.status,
            response.content_type,
            response.body.len()
        );
        let mut raw = head.into_bytes();
        raw.extend_from_slice(&response.body);
        // The client may hang up after the headers on error statuses.
        let _ = stream.write_all(&raw);
        let _ = stream.flush();
    });

    (format!("http://{}/article", addr), handle)
}

/// Wraps body markup in a minimal page.
pub fn page(body: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>测试</title></head><body>{}</body></html>",
        body
    )
}

/// What a stalled server observed.
pub struct StallReport {
    /// Request line and headers of the first connection, lowercased.
    pub request: String,
    /// Connections that arrived while the first one was held open.
    pub extra_connections: usize,
}

/// Accepts one connection, reads its request, then holds it open for
/// `stall` without answering.
pub fn serve_stalled(stall: Duration) -> (String, JoinHandle<StallReport>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();

        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut request = String::new();
        let mut line = String::new();
        loop {
            line.clear();
            if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                break;
            }
            request.push_str(&line.to_ascii_lowercase());
        }

        thread::sleep(stall);
        drop(stream);

        // A retry would be sitting in the accept backlog by now.
        listener.set_nonblocking(true).unwrap();
        let extra_connections = std::iter::from_fn(|| listener.accept().ok()).count();

        StallReport {
            request,
            extra_connections,
        }
    });

    (format!("http://{}/article", addr), handle)
}
