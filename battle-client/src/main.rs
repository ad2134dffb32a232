//! 海战棋客户端
//!
//! 用法: `battle-client [host] [port] [username]`
//!
//! 连接服务器、声明用户名后关闭连接。

use anyhow::{Context, Result};
use battle_protocol::{Client, ClientConfig, DEFAULT_CONNECT_TIMEOUT, DEFAULT_HOST, DEFAULT_PORT};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_USERNAME: &str = "jonfk";

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("battle_client=debug".parse()?)
                .add_directive("battle_protocol=debug".parse()?),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let host = args.next().unwrap_or_else(|| DEFAULT_HOST.to_string());
    let port = match args.next() {
        Some(port) => port
            .parse::<u16>()
            .with_context(|| format!("invalid port: {}", port))?,
        None => DEFAULT_PORT,
    };
    let username = args.next().unwrap_or_else(|| DEFAULT_USERNAME.to_string());

    let config = ClientConfig::default().with_connect_timeout(DEFAULT_CONNECT_TIMEOUT);
    let mut client = Client::new(config);

    client.connect(&host, port).await?;
    let result = client.announce_username(&username).await;
    client.close().await;
    result?;

    info!("Announced username {:?} to {}:{}", username, host, port);
    Ok(())
}
