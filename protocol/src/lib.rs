//! 海战棋客户端协议库
//!
//! 包含:
//! - 帧编码 (Codec)
//! - 消息类型定义 (Message, MessageType)
//! - 传输层抽象 (Transport trait)
//! - 连接客户端 (Client)

mod client;
mod codec;
mod constants;
mod error;
mod message;
mod transport;

pub use client::{Client, ConnectionState};
pub use codec::{encode, payload_len, FrameWriter};
pub use constants::*;
pub use error::{ErrorKind, ProtocolError, Result};
pub use message::{
    AbandonGame, AcceptGame, ChatMessage, Coord, CreateGame, GameMove, GameSetPiece, JoinGame,
    Message, MessageType, Ping, RejectGame, RequestGameState, RequestOpenGamesList,
    UsernameAnnouncement,
};
pub use transport::{ClientConfig, TcpTransport, Transport};
