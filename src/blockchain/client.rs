//! Relay chain RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - Connect to the WebSocket JSON-RPC endpoint
//! - Query the best or finalized head and decode its block number
//! - Bound connect and every request with the configured timeout
//! - Close the connection once the height is read

use std::future::Future;
use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use url::Url;

use crate::blockchain::types::{
    ChainConfig, ChainError, ChainHead, ChainResult, Header, RpcRequest, RpcResponse,
};
use crate::resilience::bounded;

/// Anything that can report the current chain height.
pub trait BlockHeightSource {
    /// Read the current block number.
    fn current_block(&self) -> impl Future<Output = ChainResult<u64>> + Send;
}

/// Substrate JSON-RPC client over WebSocket.
///
/// Every call to [`BlockHeightSource::current_block`] opens a fresh
/// connection and closes it afterwards; nothing is pooled between runs.
#[derive(Clone)]
pub struct ChainClient {
    /// Parsed endpoint.
    url: Url,
    /// Configuration.
    config: ChainConfig,
    /// Request timeout duration.
    timeout_duration: Duration,
}

impl ChainClient {
    /// Create a new chain client. No connection is made until a height is requested.
    pub fn new(config: ChainConfig) -> ChainResult<Self> {
        let url: Url = config.rpc_url.parse().map_err(|e: url::ParseError| {
            ChainError::InvalidUrl {
                url: config.rpc_url.clone(),
                reason: e.to_string(),
            }
        })?;
        if !matches!(url.scheme(), "ws" | "wss") {
            return Err(ChainError::InvalidUrl {
                url: config.rpc_url.clone(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        Ok(Self {
            url,
            timeout_duration: Duration::from_secs(config.rpc_timeout_secs),
            config,
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    async fn connect(&self) -> ChainResult<RpcSession> {
        let connecting = connect_async(self.url.as_str());
        let (socket, _) = bounded(self.timeout_duration, connecting)
            .await
            .map_err(|_| ChainError::Timeout(self.config.rpc_timeout_secs))?
            .map_err(|e| ChainError::Connect {
                url: self.config.rpc_url.clone(),
                reason: e.to_string(),
            })?;

        tracing::debug!(rpc_url = %self.config.rpc_url, "Connected to relay chain");

        Ok(RpcSession {
            socket,
            next_id: 1,
            timeout_duration: self.timeout_duration,
        })
    }

    async fn read_head(&self, session: &mut RpcSession) -> ChainResult<u64> {
        let header: Header = match self.config.head {
            ChainHead::Best => session.call("chain_getHeader", Vec::new()).await?,
            ChainHead::Finalized => {
                let hash: String = session.call("chain_getFinalizedHead", Vec::new()).await?;
                session
                    .call("chain_getHeader", vec![Value::String(hash)])
                    .await?
            }
        };

        header.block_number().map_err(|reason| ChainError::Malformed {
            method: "chain_getHeader".to_string(),
            reason,
        })
    }
}

impl BlockHeightSource for ChainClient {
    async fn current_block(&self) -> ChainResult<u64> {
        let mut session = self.connect().await?;
        let result = self.read_head(&mut session).await;
        session.close().await;

        let block = result?;
        tracing::info!(
            current_block = block,
            head = ?self.config.head,
            "Read relay chain height"
        );
        Ok(block)
    }
}

impl std::fmt::Debug for ChainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainClient")
            .field("rpc_url", &self.config.rpc_url)
            .field("head", &self.config.head)
            .field("timeout_secs", &self.config.rpc_timeout_secs)
            .finish()
    }
}

/// One open connection with a request id counter.
struct RpcSession {
    socket: WebSocketStream<MaybeTlsStream<TcpStream>>,
    next_id: u64,
    timeout_duration: Duration,
}

impl RpcSession {
    async fn call<T: DeserializeOwned>(&mut self, method: &str, params: Vec<Value>) -> ChainResult<T> {
        let id = self.next_id;
        self.next_id += 1;

        let payload = serde_json::to_string(&RpcRequest::new(id, method, params)).map_err(|e| {
            ChainError::Malformed {
                method: method.to_string(),
                reason: e.to_string(),
            }
        })?;

        let limit = self.timeout_duration;
        bounded(limit, self.socket.send(Message::Text(payload.into())))
            .await
            .map_err(|_| ChainError::Timeout(limit.as_secs()))?
            .map_err(|e| ChainError::Socket(e.to_string()))?;

        let response = bounded(limit, self.read_response(id, method))
            .await
            .map_err(|_| ChainError::Timeout(limit.as_secs()))??;

        if let Some(error) = response.error {
            return Err(ChainError::Rpc {
                method: method.to_string(),
                code: error.code,
                message: error.message,
            });
        }

        let result = response.result.ok_or_else(|| ChainError::Malformed {
            method: method.to_string(),
            reason: "missing result".to_string(),
        })?;

        serde_json::from_value(result).map_err(|e| ChainError::Malformed {
            method: method.to_string(),
            reason: e.to_string(),
        })
    }

    async fn read_response(&mut self, id: u64, method: &str) -> ChainResult<RpcResponse> {
        while let Some(message) = self.socket.next().await {
            let text = match message.map_err(|e| ChainError::Socket(e.to_string()))? {
                Message::Text(text) => text,
                Message::Close(_) => return Err(ChainError::Closed(method.to_string())),
                _ => continue,
            };

            let response: RpcResponse =
                serde_json::from_str(text.as_str()).map_err(|e| ChainError::Malformed {
                    method: method.to_string(),
                    reason: e.to_string(),
                })?;

            if response.id != Some(id) {
                tracing::trace!(expected = id, got = ?response.id, "Skipping unrelated message");
                continue;
            }
            return Ok(response);
        }

        Err(ChainError::Closed(method.to_string()))
    }

    async fn close(mut self) {
        if let Err(e) = self.socket.close(None).await {
            tracing::debug!(error = %e, "Error closing relay chain connection");
        }
    }
}
