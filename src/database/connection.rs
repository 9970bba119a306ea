// 数据库连接
// 解析地址、构建 MySQL 连接参数并建立连接池

use sqlx::Connection;
use sqlx::MySqlPool;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};

use crate::error::{DalError, DalResult};

/// MySQL 默认端口
pub const DEFAULT_PORT: u16 = 3306;

/// 连接参数，由调用方提供
#[derive(Debug, Clone)]
pub struct ConnectParams {
    pub user: String,
    pub password: String,
    /// host:port，端口省略时使用 3306
    pub addr: String,
    pub database: String,
    pub max_connections: u32,
}

/// 把 `host:port` 拆成主机和端口，支持 `[::1]:3306` 形式的 IPv6 地址
pub fn parse_address(addr: &str) -> DalResult<(String, u16)> {
    let addr = addr.trim();
    let invalid = || DalError::InvalidAddress(addr.to_string());

    let (host, port) = match addr.strip_prefix('[') {
        Some(rest) => {
            let (host, tail) = rest.split_once(']').ok_or_else(invalid)?;
            let port = match tail {
                "" => None,
                t => Some(t.strip_prefix(':').ok_or_else(invalid)?),
            };
            (host, port)
        }
        None => match addr.rsplit_once(':') {
            Some((host, port)) => (host, Some(port)),
            None => (addr, None),
        },
    };

    // 未加方括号的地址只能有一个冒号
    if host.is_empty() || (!addr.starts_with('[') && host.contains(':')) {
        return Err(invalid());
    }

    let port = match port {
        Some(p) => p.parse::<u16>().map_err(|_| invalid())?,
        None => DEFAULT_PORT,
    };

    Ok((host.to_string(), port))
}

/// 构建 TCP 连接参数
///
/// 驱动使用 mysql_native_password 认证，不支持 4.1 之前的旧密码协议。
pub fn connect_options(params: &ConnectParams) -> DalResult<MySqlConnectOptions> {
    let (host, port) = parse_address(&params.addr)?;

    Ok(MySqlConnectOptions::new()
        .host(&host)
        .port(port)
        .username(&params.user)
        .password(&params.password)
        .database(&params.database))
}

/// 建立连接池并 ping 一次确认数据库可用
pub async fn open_pool(params: &ConnectParams) -> DalResult<MySqlPool> {
    let options = connect_options(params)?;

    tracing::info!(
        "Connecting to MySQL at {} (database={}, max_connections={})",
        params.addr,
        params.database,
        params.max_connections
    );

    let pool = MySqlPoolOptions::new()
        .max_connections(params.max_connections)
        .connect_with(options)
        .await
        .map_err(|e| {
            tracing::error!("Failed to open MySQL pool: {:?}", e);
            DalError::Connection(e)
        })?;

    let mut conn = pool.acquire().await.map_err(DalError::Connection)?;
    conn.ping().await.map_err(|e| {
        tracing::error!("MySQL ping failed: {:?}", e);
        DalError::Connection(e)
    })?;

    tracing::info!("Connected to MySQL at {}", params.addr);
    Ok(pool)
}
