//! 帧编码
//!
//! 帧格式:
//! ```text
//! ┌────────────────┬───────────┬────────────────────────────────┐
//! │  Length (4B)   │  Type(1B) │         Payload (Length B)     │
//! │    u32 BE      │    u8     │     原始字节（通常为 JSON）    │
//! └────────────────┴───────────┴────────────────────────────────┘
//! ```
//!
//! 长度只计算负载字节，不含类型字节。接收方先读 4 字节得到 L，
//! 随后恰好还有 1 + L 字节属于本帧。

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::error::{ProtocolError, Result};
use crate::{HEADER_SIZE, MAX_PAYLOAD_LEN};

/// 校验负载长度并转换为长度字段的值
pub fn payload_len(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| ProtocolError::PayloadTooLarge {
        size: len,
        max: MAX_PAYLOAD_LEN,
    })
}

/// 将 (类型, 负载) 编码为一帧
///
/// 纯函数：不做 IO，相同输入总是得到相同字节。负载超过 `u32::MAX`
/// 字节时返回 [`ProtocolError::PayloadTooLarge`]，不产生任何输出。
pub fn encode(msg_type: u8, payload: &[u8]) -> Result<Vec<u8>> {
    let length = payload_len(payload.len())?;

    let mut frame = Vec::with_capacity(HEADER_SIZE + payload.len());
    frame.extend_from_slice(&length.to_be_bytes());
    frame.push(msg_type);
    frame.extend_from_slice(payload);
    Ok(frame)
}

/// 帧写入器
pub struct FrameWriter<W> {
    writer: W,
}

impl<W: AsyncWrite + Unpin> FrameWriter<W> {
    /// 创建新的帧写入器
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// 编码并写入一帧
    ///
    /// 整帧作为一个缓冲区写出，`write_all` 会重试部分写入，
    /// 直到全部字节写完或发生 IO 错误。编码失败时不写入任何字节。
    pub async fn write_frame(&mut self, msg_type: u8, payload: &[u8]) -> Result<()> {
        let frame = encode(msg_type, payload)?;

        self.writer.write_all(&frame).await?;
        self.writer.flush().await?;

        debug!(msg_type, len = payload.len(), "Frame written");
        Ok(())
    }

    /// 刷新并关闭写入端
    pub async fn shutdown(&mut self) -> Result<()> {
        self.writer.shutdown().await?;
        Ok(())
    }

    /// 取回底层写入端
    pub fn into_inner(self) -> W {
        self.writer
    }
}
