//! 协议常量定义

use std::time::Duration;

/// 长度字段大小（u32 BE）
pub const LENGTH_FIELD_SIZE: usize = 4;

/// 类型字段大小（u8）
pub const TYPE_FIELD_SIZE: usize = 1;

/// 帧头大小: 4 字节长度 + 1 字节类型
pub const HEADER_SIZE: usize = LENGTH_FIELD_SIZE + TYPE_FIELD_SIZE;

/// 负载最大长度，受限于 32 位长度字段
pub const MAX_PAYLOAD_LEN: u64 = u32::MAX as u64;

/// 默认服务器地址
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// 默认服务器端口
pub const DEFAULT_PORT: u16 = 8888;

/// 连接超时（秒）
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

/// 连接超时 Duration
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(CONNECT_TIMEOUT_SECS);
