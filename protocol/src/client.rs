//! 连接客户端
//!
//! 管理单条连接的生命周期，并在帧编码之上提供按消息发送的接口。
//!
//! 状态机:
//! ```text
//! Unconnected ──connect──▶ Connected ──close──▶ Closed
//!                           │     ▲
//!                       写入失败  connect
//!                           ▼     │
//!                           Failed
//! ```
//!
//! 任意状态下 close 都会进入 Closed。

use std::net::SocketAddr;

use tracing::{debug, info, warn};

use crate::codec::FrameWriter;
use crate::error::{ProtocolError, Result};
use crate::message::{Message, UsernameAnnouncement};
use crate::transport::{ClientConfig, TcpTransport, Transport};

/// 连接状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// 尚未连接
    Unconnected,
    /// 已连接，可以发送
    Connected,
    /// 上一次写入失败，连接已丢弃，需要重新 connect
    Failed,
    /// 已关闭（终态）
    Closed,
}

enum State<W> {
    Unconnected,
    Connected {
        writer: FrameWriter<W>,
        peer: Option<SocketAddr>,
    },
    Failed,
    Closed,
}

/// 连接客户端
///
/// 独占一条连接。所有发送操作都需要 `&mut self`，
/// 同一连接上不会出现交错写入的半帧。
///
/// # Type Parameters
/// * `T` - 传输层实现，默认为 TCP
pub struct Client<T: Transport = TcpTransport> {
    config: ClientConfig,
    state: State<T::Writer>,
}

impl Client<TcpTransport> {
    /// 创建使用 TCP 的客户端
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config)
    }
}

impl Default for Client<TcpTransport> {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl<T: Transport> Client<T> {
    /// 创建使用指定传输层的客户端
    pub fn with_transport(config: ClientConfig) -> Self {
        Self {
            config,
            state: State::Unconnected,
        }
    }

    /// 当前连接状态
    pub fn state(&self) -> ConnectionState {
        match self.state {
            State::Unconnected => ConnectionState::Unconnected,
            State::Connected { .. } => ConnectionState::Connected,
            State::Failed => ConnectionState::Failed,
            State::Closed => ConnectionState::Closed,
        }
    }

    /// 是否已连接
    pub fn is_connected(&self) -> bool {
        matches!(self.state, State::Connected { .. })
    }

    /// 对端地址
    pub fn peer_addr(&self) -> Option<SocketAddr> {
        match &self.state {
            State::Connected { peer, .. } => *peer,
            _ => None,
        }
    }

    /// 连接服务器
    ///
    /// 已连接时不做任何事，保留现有连接。关闭后不能再次连接。
    pub async fn connect(&mut self, host: &str, port: u16) -> Result<()> {
        match self.state {
            State::Connected { .. } => {
                debug!("Already connected, ignoring connect to {}:{}", host, port);
                return Ok(());
            }
            State::Closed => return Err(ProtocolError::ConnectionClosed),
            State::Unconnected | State::Failed => {}
        }

        let transport = T::connect(host, port, &self.config).await?;
        let peer = transport.peer_addr();
        info!("Connected to {}:{}", host, port);

        self.state = State::Connected {
            writer: FrameWriter::new(transport.into_writer()),
            peer,
        };
        Ok(())
    }

    /// 声明用户名（类型 1，负载 `{"username":"..."}`）
    ///
    /// 用户名经 JSON 转义，引号和控制字符不会破坏负载。
    pub async fn announce_username(&mut self, username: &str) -> Result<()> {
        self.send(&UsernameAnnouncement {
            username: username.to_string(),
        })
        .await
    }

    /// 发送一条类型化消息
    pub async fn send<M: Message>(&mut self, message: &M) -> Result<()> {
        let payload = message.payload()?;
        self.send_raw(M::TYPE.into(), &payload).await
    }

    /// 编码并发送任意类型的负载
    ///
    /// 返回时整帧已写入连接。写入失败后客户端进入 `Failed`，
    /// 需要重新 connect 才能继续发送。
    pub async fn send_raw(&mut self, msg_type: u8, payload: &[u8]) -> Result<()> {
        let writer = match &mut self.state {
            State::Connected { writer, .. } => writer,
            State::Closed => return Err(ProtocolError::ConnectionClosed),
            State::Unconnected | State::Failed => return Err(ProtocolError::NotConnected),
        };

        match writer.write_frame(msg_type, payload).await {
            Err(ProtocolError::Io(e)) => {
                warn!("Failed to send frame: {}", e);
                self.state = State::Failed;
                Err(ProtocolError::Io(e))
            }
            result => result,
        }
    }

    /// 关闭连接
    ///
    /// 可重复调用，也可在未连接时调用，从不失败。
    pub async fn close(&mut self) {
        let previous = std::mem::replace(&mut self.state, State::Closed);
        if let State::Connected { mut writer, peer } = previous {
            if let Err(e) = writer.shutdown().await {
                debug!("Shutdown before close failed: {}", e);
            }
            info!(?peer, "Connection closed");
        }
    }
}
