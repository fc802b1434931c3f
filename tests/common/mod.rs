//! Shared utilities for integration testing: a mock relay chain node and a
//! capturing chat webhook.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use futures_util::{SinkExt, StreamExt};
use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio_tungstenite::accept_async;
use tokio_tungstenite::tungstenite::Message;

use block_predictor::secrets::{SecretError, SecretResult, SecretStore};

/// Methods received by a mock node, in arrival order.
#[allow(dead_code)]
pub type SeenMethods = Arc<Mutex<Vec<String>>>;

/// Start a WebSocket JSON-RPC node whose replies are produced by `respond`.
///
/// `respond` gets the request id, method and params and returns the frames
/// to send back; an empty vec leaves the request unanswered.
#[allow(dead_code)]
pub async fn start_mock_node<F>(respond: F) -> (SocketAddr, SeenMethods)
where
    F: Fn(u64, &str, &Value) -> Vec<Message> + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let respond = Arc::new(respond);
    let seen: SeenMethods = Arc::new(Mutex::new(Vec::new()));
    let methods = seen.clone();

    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            let respond = respond.clone();
            let methods = methods.clone();
            tokio::spawn(async move {
                let Ok(mut socket) = accept_async(stream).await else {
                    return;
                };
                while let Some(Ok(message)) = socket.next().await {
                    let Message::Text(text) = message else {
                        continue;
                    };
                    let request: Value = serde_json::from_str(text.as_str()).unwrap();
                    let id = request["id"].as_u64().unwrap();
                    let method = request["method"].as_str().unwrap().to_string();
                    methods.lock().unwrap().push(method.clone());

                    for reply in respond(id, &method, &request["params"]) {
                        let closing = matches!(reply, Message::Close(_));
                        if socket.send(reply).await.is_err() || closing {
                            return;
                        }
                    }
                }
            });
        }
    });

    (addr, seen)
}

/// JSON-RPC success frame.
#[allow(dead_code)]
pub fn rpc_result(id: u64, result: Value) -> Message {
    Message::Text(json!({"jsonrpc": "2.0", "id": id, "result": result}).to_string().into())
}

/// Substrate header frame for `block`.
#[allow(dead_code)]
pub fn header_result(id: u64, block: u64) -> Message {
    rpc_result(
        id,
        json!({
            "number": format!("0x{:x}", block),
            "parentHash": "0x5e7a0d1c1ddc4fbd0e2c0c2f1b4f7e2f6a7f9a1c0d3e6b8f1a2c4d6e8f0a1b2c",
            "stateRoot": "0x0000000000000000000000000000000000000000000000000000000000000000",
            "extrinsicsRoot": "0x0000000000000000000000000000000000000000000000000000000000000000",
            "digest": {"logs": []}
        }),
    )
}

/// A mock node that always reports `block` as the best head.
#[allow(dead_code)]
pub async fn start_node_at(block: u64) -> (SocketAddr, SeenMethods) {
    start_mock_node(move |id, method, _params| match method {
        "chain_getHeader" => vec![header_result(id, block)],
        _ => Vec::new(),
    })
    .await
}

/// An HTTP request as received by the mock webhook.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub request_line: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

#[allow(dead_code)]
impl CapturedRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Start an HTTP server answering every request with `status` and
/// forwarding what it received.
#[allow(dead_code)]
pub async fn start_mock_webhook(
    status: u16,
) -> (SocketAddr, mpsc::UnboundedReceiver<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let tx = tx.clone();
            tokio::spawn(async move {
                let Some(request) = read_request(&mut socket).await else {
                    return;
                };
                let _ = tx.send(request);

                let status_text = match status {
                    200 => "200 OK",
                    404 => "404 Not Found",
                    500 => "500 Internal Server Error",
                    _ => "200 OK",
                };
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Length: 2\r\nConnection: close\r\n\r\nok",
                    status_text
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    (addr, rx)
}

#[allow(dead_code)]
async fn read_request(socket: &mut tokio::net::TcpStream) -> Option<CapturedRequest> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buffer.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buffer.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos;
        }
    };

    let head = String::from_utf8_lossy(&buffer[..header_end]).to_string();
    let mut lines = head.split("\r\n");
    let request_line = lines.next()?.to_string();
    let headers: Vec<(String, String)> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect();

    let content_length = headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.parse::<usize>().ok())
        .unwrap_or(0);

    let body_start = header_end + 4;
    while buffer.len() < body_start + content_length {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..n]);
    }
    let body_end = buffer.len().min(body_start + content_length);
    let body = String::from_utf8_lossy(&buffer[body_start..body_end]).to_string();

    Some(CapturedRequest {
        request_line,
        headers,
        body,
    })
}

/// Secret store returning a fixed secret string.
#[allow(dead_code)]
pub struct StaticSecretStore(pub &'static str);

impl SecretStore for StaticSecretStore {
    async fn secret_string(&self, name: &str, _version_stage: &str) -> SecretResult<String> {
        if self.0.is_empty() {
            return Err(SecretError::Store {
                name: name.to_string(),
                reason: "ResourceNotFoundException".to_string(),
            });
        }
        Ok(self.0.to_string())
    }
}
