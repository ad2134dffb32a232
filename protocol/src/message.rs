//! 消息类型定义
//!
//! 每种消息对应一个类型标签和一个 JSON 负载。新增消息只需实现
//! [`Message`]，帧编码逻辑无需改动。

use std::fmt;

use serde::Serialize;

use crate::error::Result;

/// 消息类型标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageType(pub u8);

impl MessageType {
    /// 心跳
    pub const PING: MessageType = MessageType(0);
    /// 用户名声明
    pub const USERNAME: MessageType = MessageType(1);
    /// 对局落子
    pub const GAME_MOVE: MessageType = MessageType(3);
    /// 聊天消息
    pub const CHAT_MESSAGE: MessageType = MessageType(4);
    /// 请求可加入的对局列表
    pub const REQUEST_OPEN_GAMES_LIST: MessageType = MessageType(6);
    /// 创建对局
    pub const CREATE_GAME: MessageType = MessageType(7);
    /// 加入对局
    pub const JOIN_GAME: MessageType = MessageType(8);
    /// 接受对手
    pub const ACCEPT_GAME: MessageType = MessageType(9);
    /// 拒绝对手
    pub const REJECT_GAME: MessageType = MessageType(10);
    /// 放置舰船
    pub const GAME_SET_PIECE: MessageType = MessageType(11);
    /// 请求对局状态
    pub const REQUEST_GAME_STATE: MessageType = MessageType(12);
    /// 放弃对局
    pub const ABANDON_GAME: MessageType = MessageType(13);

    /// 已知类型的名称
    pub fn name(self) -> Option<&'static str> {
        let name = match self {
            MessageType::PING => "Ping",
            MessageType::USERNAME => "Username",
            MessageType::GAME_MOVE => "GameMove",
            MessageType::CHAT_MESSAGE => "ChatMessage",
            MessageType::REQUEST_OPEN_GAMES_LIST => "RequestOpenGamesList",
            MessageType::CREATE_GAME => "CreateGame",
            MessageType::JOIN_GAME => "JoinGame",
            MessageType::ACCEPT_GAME => "AcceptGame",
            MessageType::REJECT_GAME => "RejectGame",
            MessageType::GAME_SET_PIECE => "GameSetPiece",
            MessageType::REQUEST_GAME_STATE => "RequestGameState",
            MessageType::ABANDON_GAME => "AbandonGame",
            _ => return None,
        };
        Some(name)
    }
}

impl From<MessageType> for u8 {
    fn from(t: MessageType) -> u8 {
        t.0
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "Unknown({})", self.0),
        }
    }
}

/// 可发送的消息
pub trait Message: Serialize {
    /// 帧中的类型标签
    const TYPE: MessageType;

    /// 序列化负载，默认使用 JSON
    fn payload(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}

/// 为无负载的消息实现 [`Message`]，发送空负载
macro_rules! empty_message {
    ($($name:ident => $ty:expr),* $(,)?) => {
        $(
            #[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
            pub struct $name;

            impl Message for $name {
                const TYPE: MessageType = $ty;

                fn payload(&self) -> Result<Vec<u8>> {
                    Ok(Vec::new())
                }
            }
        )*
    };
}

empty_message! {
    Ping => MessageType::PING,
    RequestOpenGamesList => MessageType::REQUEST_OPEN_GAMES_LIST,
    CreateGame => MessageType::CREATE_GAME,
    RequestGameState => MessageType::REQUEST_GAME_STATE,
    AbandonGame => MessageType::ABANDON_GAME,
}

/// 棋盘坐标
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

/// 用户名声明，连接后发送的第一条消息
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct UsernameAnnouncement {
    pub username: String,
}

impl Message for UsernameAnnouncement {
    const TYPE: MessageType = MessageType::USERNAME;
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameMove {
    pub player: i32,
    pub x: i32,
    pub y: i32,
}

impl Message for GameMove {
    const TYPE: MessageType = MessageType::GAME_MOVE;
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub msg: String,
}

impl Message for ChatMessage {
    const TYPE: MessageType = MessageType::CHAT_MESSAGE;
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinGame {
    pub id: i32,
}

impl Message for JoinGame {
    const TYPE: MessageType = MessageType::JOIN_GAME;
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceptGame {
    pub id: i32,
}

impl Message for AcceptGame {
    const TYPE: MessageType = MessageType::ACCEPT_GAME;
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RejectGame {
    pub id: i32,
}

impl Message for RejectGame {
    const TYPE: MessageType = MessageType::REJECT_GAME;
}

/// 放置一艘舰船，占据 start 到 end 之间的格子
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSetPiece {
    pub piece: i32,
    pub start: Coord,
    pub end: Coord,
}

impl Message for GameSetPiece {
    const TYPE: MessageType = MessageType::GAME_SET_PIECE;
}
