//! 错误类型定义

use std::time::Duration;

use thiserror::Error;

/// 错误分类
///
/// 调用方据此决定是重连、放弃还是缩减负载后重发。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 负载无法编码为帧
    Encoding,
    /// 无法建立传输连接
    Connection,
    /// 连接不处于可发送状态，未进行任何 IO
    Send,
    /// 写入已建立的连接时失败
    Io,
}

/// 协议错误类型
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// 负载超出 32 位长度字段
    #[error("Payload too large: {size} bytes (max: {max})")]
    PayloadTooLarge { size: usize, max: u64 },

    /// 负载序列化错误
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 连接失败（不可达、被拒绝等）
    #[error("Failed to connect to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// 连接超时
    #[error("Connection to {addr} timed out after {timeout:?}")]
    ConnectionTimeout { addr: String, timeout: Duration },

    /// 尚未连接，或上一次写入失败后未重新连接
    #[error("Not connected")]
    NotConnected,

    /// 连接已关闭
    #[error("Connection closed")]
    ConnectionClosed,

    /// IO 错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProtocolError {
    /// 返回错误所属分类
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProtocolError::PayloadTooLarge { .. } | ProtocolError::Serialization(_) => {
                ErrorKind::Encoding
            }
            ProtocolError::Connect { .. } | ProtocolError::ConnectionTimeout { .. } => {
                ErrorKind::Connection
            }
            ProtocolError::NotConnected | ProtocolError::ConnectionClosed => ErrorKind::Send,
            ProtocolError::Io(_) => ErrorKind::Io,
        }
    }
}

/// 协议操作结果类型
pub type Result<T> = std::result::Result<T, ProtocolError>;
