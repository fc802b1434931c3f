//! Chain-specific types and error definitions.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

// Re-export ChainConfig from config module to avoid duplication
pub use crate::config::schema::{ChainConfig, ChainHead};

/// Errors that can occur while reading the chain height.
#[derive(Debug, Error)]
pub enum ChainError {
    /// Endpoint URL could not be parsed.
    #[error("Invalid RPC URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// WebSocket handshake failed.
    #[error("Connection to {url} failed: {reason}")]
    Connect { url: String, reason: String },

    /// Socket error after the connection was established.
    #[error("WebSocket error: {0}")]
    Socket(String),

    /// Node closed the connection before answering.
    #[error("Connection closed before response to '{0}'")]
    Closed(String),

    /// Node answered with a JSON-RPC error object.
    #[error("RPC error {code} from '{method}': {message}")]
    Rpc {
        method: String,
        code: i64,
        message: String,
    },

    /// Response did not have the expected shape.
    #[error("Malformed response to '{method}': {reason}")]
    Malformed { method: String, reason: String },

    /// Connect or request exceeded the configured limit.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),
}

/// Result type for chain operations.
pub type ChainResult<T> = Result<T, ChainError>;

/// Outgoing JSON-RPC 2.0 request.
#[derive(Debug, Serialize)]
pub struct RpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: Vec<Value>,
}

impl<'a> RpcRequest<'a> {
    pub fn new(id: u64, method: &'a str, params: Vec<Value>) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            method,
            params,
        }
    }
}

/// Incoming JSON-RPC 2.0 message. Subscription notifications carry no `id`.
#[derive(Debug, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

/// JSON-RPC error object.
#[derive(Debug, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
}

/// The subset of a Substrate header the predictor needs.
#[derive(Debug, Deserialize)]
pub struct Header {
    pub number: Value,
}

impl Header {
    /// Decode the block number, which Substrate nodes send as a `0x` hex string.
    pub fn block_number(&self) -> Result<u64, String> {
        parse_block_number(&self.number)
    }
}

/// Parse a block number from either a hex string or a plain JSON integer.
pub fn parse_block_number(value: &Value) -> Result<u64, String> {
    match value {
        Value::String(s) => {
            let digits = s
                .strip_prefix("0x")
                .or_else(|| s.strip_prefix("0X"))
                .ok_or_else(|| format!("block number '{}' is not 0x-prefixed", s))?;
            u64::from_str_radix(digits, 16)
                .map_err(|e| format!("block number '{}' is not valid hex: {}", s, e))
        }
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| format!("block number {} is not a non-negative integer", n)),
        other => Err(format!("unexpected block number {}", other)),
    }
}
