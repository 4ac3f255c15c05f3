//! Throwaway HTTP backend for integration tests.
//!
//! Binds 127.0.0.1:0, answers each connection with the next canned response
//! and records what it received.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use recycle_web_client::ApiClient;
use recycle_web_client::config::ApiConfig;
use recycle_web_client::credentials::{CredentialStore, MemoryStore};
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// One request as seen by the backend.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl Recorded {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

pub struct Backend {
    pub base_url: String,
    handle: JoinHandle<Vec<Recorded>>,
}

impl Backend {
    /// Requests received, in order. Waits until every canned response is used.
    pub async fn requests(self) -> Vec<Recorded> {
        self.handle.await.unwrap()
    }
}

/// Starts a backend that serves `responses` (status, JSON body) in order,
/// one per connection.
pub async fn spawn_backend(responses: Vec<(u16, &'static str)>) -> Backend {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let mut recorded = Vec::new();
        for (status, body) in responses {
            let (stream, _) = listener.accept().await.unwrap();
            recorded.push(serve_one(stream, status, body).await);
        }
        recorded
    });

    Backend {
        base_url: format!("http://{addr}"),
        handle,
    }
}

async fn serve_one(stream: TcpStream, status: u16, body: &str) -> Recorded {
    let mut reader = BufReader::new(stream);

    let mut request_line = String::new();
    reader.read_line(&mut request_line).await.unwrap();
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut headers = HashMap::new();
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).await.unwrap();
        let line = line.trim_end_matches(['\r', '\n']);
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.insert(name.trim().to_ascii_lowercase(), value.trim().to_string());
        }
    }

    let length: usize = headers
        .get("content-length")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    let mut raw_body = vec![0; length];
    reader.read_exact(&mut raw_body).await.unwrap();

    let reason = match status {
        200 => "OK",
        401 => "Unauthorized",
        500 => "Internal Server Error",
        _ => "Status",
    };
    let response = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let mut stream = reader.into_inner();
    stream.write_all(response.as_bytes()).await.unwrap();
    stream.flush().await.unwrap();

    Recorded {
        method,
        path,
        headers,
        body: String::from_utf8(raw_body).unwrap(),
    }
}

pub fn client_for(base_url: &str, store: Arc<MemoryStore>) -> ApiClient {
    client_with_store(base_url, store)
}

pub fn client_with_store(base_url: &str, store: Arc<dyn CredentialStore>) -> ApiClient {
    let config = ApiConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
    };
    ApiClient::new(&config, store).unwrap()
}
