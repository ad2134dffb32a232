//! 传输层抽象
//!
//! 提供 Transport trait 使客户端与具体传输实现解耦。
//! 协议只有客户端到服务端一个方向，因此传输层只需交出写入端。

use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::AsyncWrite;
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::error::{ProtocolError, Result};

/// 客户端配置
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// 连接超时时间，`None` 表示一直等待
    pub connect_timeout: Option<Duration>,
    /// 是否禁用 Nagle 算法（TCP nodelay）
    pub nodelay: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: None,
            nodelay: true,
        }
    }
}

impl ClientConfig {
    /// 设置连接超时
    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = Some(connect_timeout);
        self
    }
}

/// 传输层抽象 trait
///
/// 通过实现此 trait，可以在 TCP 之外接入其他可靠有序的字节流。
pub trait Transport: Send + Sized {
    /// 写入端类型
    type Writer: AsyncWrite + Unpin + Send;

    /// 建立连接
    ///
    /// # Arguments
    /// * `host` - 服务器主机名或 IP
    /// * `port` - 服务器端口
    /// * `config` - 客户端配置
    fn connect(
        host: &str,
        port: u16,
        config: &ClientConfig,
    ) -> impl std::future::Future<Output = Result<Self>> + Send;

    /// 对端地址（若可获取）
    fn peer_addr(&self) -> Option<SocketAddr>;

    /// 交出写入端
    fn into_writer(self) -> Self::Writer;
}

// ============================================================================
// TCP 实现
// ============================================================================

/// TCP 传输实现
#[derive(Debug)]
pub struct TcpTransport {
    stream: TcpStream,
}

impl Transport for TcpTransport {
    type Writer = TcpStream;

    async fn connect(host: &str, port: u16, config: &ClientConfig) -> Result<Self> {
        let addr = format!("{}:{}", host, port);

        let connecting = TcpStream::connect((host, port));
        let stream = match config.connect_timeout {
            Some(limit) => timeout(limit, connecting)
                .await
                .map_err(|_| ProtocolError::ConnectionTimeout {
                    addr: addr.clone(),
                    timeout: limit,
                })?,
            None => connecting.await,
        }
        .map_err(|source| ProtocolError::Connect {
            addr: addr.clone(),
            source,
        })?;

        stream
            .set_nodelay(config.nodelay)
            .map_err(|source| ProtocolError::Connect { addr, source })?;

        Ok(Self { stream })
    }

    fn peer_addr(&self) -> Option<SocketAddr> {
        self.stream.peer_addr().ok()
    }

    fn into_writer(self) -> Self::Writer {
        self.stream
    }
}
